//! Covering-arc construction: pairwise merging and smallest enclosing arcs.

use qtty::Quantity;

use super::error::CyclicError;
use super::interval::{CyclicInterval, Wraparound};

/// Merges two cyclic intervals into a single covering interval.
///
/// The rule distinguishes three geometric situations:
///
/// - one interval is endpoint-contained in the other: keep the longer one;
/// - the intervals straddle (an endpoint of `a` lies inside `b`): of the two
///   candidate unions `(a.start, b.end)` and `(b.start, a.end)`, keep the
///   **larger**, which preserves coverage of the straddled region;
/// - the intervals are disjoint: keep the **smaller** candidate union, the
///   minimal arc connecting them.
///
/// Ties on length resolve to the second operand / second candidate, which
/// keeps the fold over a sequence deterministic.
pub fn merge_pair<U: Wraparound>(
    a: CyclicInterval<U>,
    b: CyclicInterval<U>,
) -> CyclicInterval<U> {
    if a.within(&b) || b.within(&a) {
        return if a.length().value() > b.length().value() {
            a
        } else {
            b
        };
    }

    let forward = CyclicInterval::new(a.start(), b.end());
    let backward = CyclicInterval::new(b.start(), a.end());

    let straddling = b.contains(a.start()) || b.contains(a.end());
    let keep_forward = if straddling {
        forward.length().value() > backward.length().value()
    } else {
        forward.length().value() < backward.length().value()
    };

    if keep_forward {
        forward
    } else {
        backward
    }
}

/// Folds an ordered sequence of cyclic intervals into one covering interval.
///
/// The first two intervals are merged with [`merge_pair`], and the result is
/// folded against the remaining intervals in input order. The fold is
/// iterative, so arbitrarily long exposure histories cannot exhaust the
/// stack.
///
/// # Errors
///
/// Returns [`CyclicError::EmptySequence`] for an empty input. A single
/// interval is returned unchanged.
pub fn merge_sequence<U: Wraparound>(
    intervals: &[CyclicInterval<U>],
) -> Result<CyclicInterval<U>, CyclicError> {
    let (first, rest) = intervals.split_first().ok_or(CyclicError::EmptySequence)?;
    Ok(rest.iter().fold(*first, |acc, next| merge_pair(acc, *next)))
}

/// Smallest cyclic interval enclosing every point in the set.
///
/// Points are first reduced to `[0, TURN)`. A single point yields the
/// degenerate arc `(p, p)`. Otherwise every ordered pair of distinct points
/// is tried as a candidate arc, candidates that fail to cover the full set
/// are discarded, and the shortest survivor wins. When several candidates
/// tie in length the first one in enumeration order is returned, so the
/// result is deterministic even for symmetric point sets.
///
/// # Errors
///
/// Returns [`CyclicError::EmptyPointSet`] for an empty input and
/// [`CyclicError::NonFinitePoint`] if any point is NaN or infinite.
pub fn enclosing_arc<U: Wraparound>(
    points: &[Quantity<U>],
) -> Result<CyclicInterval<U>, CyclicError> {
    if points.is_empty() {
        return Err(CyclicError::EmptyPointSet);
    }
    if let Some(bad) = points.iter().find(|p| !p.value().is_finite()) {
        return Err(CyclicError::NonFinitePoint(bad.value()));
    }

    let reduced: Vec<f64> = points
        .iter()
        .map(|p| p.value().rem_euclid(U::TURN))
        .collect();

    if let [only] = reduced[..] {
        return Ok(CyclicInterval::at(Quantity::new(only)));
    }

    let mut best: Option<CyclicInterval<U>> = None;
    for (i, &start) in reduced.iter().enumerate() {
        for (j, &end) in reduced.iter().enumerate() {
            if i == j {
                continue;
            }
            let candidate = CyclicInterval::<U>::from_f64(start, end);
            if !reduced
                .iter()
                .all(|&p| candidate.contains(Quantity::new(p)))
            {
                continue;
            }
            let shorter = best
                .map(|b| candidate.length().value() < b.length().value())
                .unwrap_or(true);
            if shorter {
                best = Some(candidate);
            }
        }
    }

    // A finite point set always admits at least one covering pair: the pair
    // bracketing the largest angular gap.
    Ok(best.expect("covering arc exists for every finite point set"))
}
