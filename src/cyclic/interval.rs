//! Directed interval representation on a circular domain.

use std::fmt::Display;

use qtty::{Degree, Hour, Quantity, Unit};

/// Units whose domain closes on itself after one full turn.
///
/// The turn length plays the role of the modulus in all cyclic arithmetic:
/// 360 for degrees, 24 for sidereal hours. Implement this trait for a custom
/// unit to run the algebra on a different modulus.
pub trait Wraparound: Unit {
    /// Length of one full turn, expressed in this unit.
    const TURN: f64;
}

impl Wraparound for Degree {
    const TURN: f64 = 360.0;
}

impl Wraparound for Hour {
    const TURN: f64 = 24.0;
}

/// Directed range `start → end` on the cyclic domain of `U`.
///
/// Unlike a linear interval, the endpoint order carries meaning: `(350, 10)`
/// is the short arc crossing the origin, while `(10, 350)` is the long way
/// around. Swapping endpoints therefore changes membership. All operations
/// are pure; they never mutate their inputs and return fresh values.
///
/// A zero-length interval is a valid degenerate arc and is never collapsed
/// or reinterpreted by the algebra itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CyclicInterval<U: Wraparound> {
    start: Quantity<U>,
    end: Quantity<U>,
}

impl<U: Wraparound> CyclicInterval<U> {
    /// Creates the directed interval `start → end`.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is non-finite. Any finite pair is valid;
    /// `end < start` simply denotes an arc crossing the origin.
    pub fn new(start: Quantity<U>, end: Quantity<U>) -> Self {
        assert!(
            start.value().is_finite() && end.value().is_finite(),
            "CyclicInterval endpoints must be finite"
        );
        Self { start, end }
    }

    pub fn from_f64(start: f64, end: f64) -> Self {
        Self::new(Quantity::<U>::new(start), Quantity::<U>::new(end))
    }

    /// Degenerate interval anchored at a single point.
    pub fn at(point: Quantity<U>) -> Self {
        Self::new(point, point)
    }

    pub const fn start(&self) -> Quantity<U> {
        self.start
    }

    pub const fn end(&self) -> Quantity<U> {
        self.end
    }

    /// Arc length `(end - start) mod TURN`, always in `[0, TURN)`.
    pub fn length(&self) -> Quantity<U> {
        Quantity::new((self.end.value() - self.start.value()).rem_euclid(U::TURN))
    }

    /// Returns true if `point` lies on the arc, endpoints included.
    ///
    /// Membership is directional: a point is inside when its angular offset
    /// from `start` does not exceed the arc length.
    pub fn contains(&self, point: Quantity<U>) -> bool {
        (point.value() - self.start.value()).rem_euclid(U::TURN) <= self.length().value()
    }

    /// Midpoint of the arc, reduced to `[0, TURN)`.
    pub fn midpoint(&self) -> Quantity<U> {
        Quantity::new((self.start.value() + self.length().value() / 2.0).rem_euclid(U::TURN))
    }

    /// Strict interior test for a single endpoint value.
    ///
    /// Containment tests deliberately use a strict comparison so that two
    /// arcs sharing only a boundary point are not reported as nested.
    fn interior(&self, value: f64) -> bool {
        (value - self.start.value()).rem_euclid(U::TURN) < self.length().value()
    }

    /// Returns true if both endpoints of `self` lie strictly inside `outer`.
    pub fn within(&self, outer: &Self) -> bool {
        outer.interior(self.start.value()) && outer.interior(self.end.value())
    }

    /// Returns true if at least one endpoint of `self` lies strictly inside
    /// `outer`.
    pub fn partly_within(&self, outer: &Self) -> bool {
        outer.interior(self.start.value()) || outer.interior(self.end.value())
    }

    /// Overlap of two cyclic intervals, or `None` when they are disjoint.
    ///
    /// The longer interval acts as the container: if both endpoints of the
    /// shorter one are inside it the shorter interval is itself the overlap;
    /// if exactly one endpoint is inside, the overlap is bounded by the two
    /// interior endpoints. The result is the same regardless of argument
    /// order.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let (outer, inner) = if other.length().value() > self.length().value() {
            (other, self)
        } else {
            (self, other)
        };

        match (
            outer.contains(inner.start()),
            outer.contains(inner.end()),
        ) {
            (true, true) => Some(*inner),
            (false, false) => None,
            (true, false) => Some(Self::new(inner.start(), outer.end())),
            (false, true) => Some(Self::new(outer.start(), inner.end())),
        }
    }

    /// Length of the overlap with `other`, zero when disjoint.
    pub fn intersection_length(&self, other: &Self) -> Quantity<U> {
        self.intersection(other)
            .map_or_else(|| Quantity::new(0.0), |overlap| overlap.length())
    }
}

impl<U: Wraparound> Display for CyclicInterval<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.3}, {:.3}]", self.start.value(), self.end.value())
    }
}

// =============================================================================
// CyclicInterval Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<U: Wraparound> serde::Serialize for CyclicInterval<U> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("CyclicInterval", 2)?;
        s.serialize_field("start", &self.start.value())?;
        s.serialize_field("end", &self.end.value())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Wraparound> serde::Deserialize<'de> for CyclicInterval<U> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            start: f64,
            end: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        if !raw.start.is_finite() || !raw.end.is_finite() {
            return Err(serde::de::Error::custom(
                "CyclicInterval endpoints must be finite",
            ));
        }
        Ok(Self::new(
            Quantity::<U>::new(raw.start),
            Quantity::<U>::new(raw.end),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn iv(start: f64, end: f64) -> CyclicInterval<Degree> {
        CyclicInterval::from_f64(start, end)
    }

    fn deg(value: f64) -> Quantity<Degree> {
        Quantity::new(value)
    }

    // ── Length ────────────────────────────────────────────────────────

    #[test]
    fn length_of_plain_interval() {
        assert_eq!(iv(10.0, 50.0).length().value(), 40.0);
    }

    #[test]
    fn length_of_wrapping_interval() {
        assert_eq!(iv(350.0, 10.0).length().value(), 20.0);
    }

    #[test]
    fn length_of_degenerate_interval_is_zero() {
        assert_eq!(iv(42.0, 42.0).length().value(), 0.0);
    }

    #[test]
    fn swapped_endpoints_give_complementary_lengths() {
        assert_eq!(iv(10.0, 350.0).length().value(), 340.0);
        assert_eq!(iv(350.0, 10.0).length().value(), 20.0);
    }

    #[test]
    fn hour_domain_wraps_at_24() {
        let lst = CyclicInterval::<Hour>::from_f64(23.0, 1.0);
        assert_eq!(lst.length().value(), 2.0);
        assert!(lst.contains(Quantity::new(0.0)));
        assert!(!lst.contains(Quantity::new(12.0)));
    }

    // ── Membership ────────────────────────────────────────────────────

    #[test]
    fn contains_its_own_start() {
        assert!(iv(10.0, 50.0).contains(deg(10.0)));
        assert!(iv(350.0, 10.0).contains(deg(350.0)));
        assert!(iv(0.0, 0.0).contains(deg(0.0)));
    }

    #[test]
    fn contains_is_directional() {
        // (350, 10) is the short arc through zero; (10, 350) the long one.
        assert!(iv(350.0, 10.0).contains(deg(0.0)));
        assert!(!iv(350.0, 10.0).contains(deg(180.0)));
        assert!(iv(10.0, 350.0).contains(deg(180.0)));
        assert!(!iv(10.0, 350.0).contains(deg(0.0)));
    }

    #[test]
    fn contains_endpoints_inclusive() {
        let arc = iv(40.0, 70.0);
        assert!(arc.contains(deg(40.0)));
        assert!(arc.contains(deg(70.0)));
        assert!(!arc.contains(deg(70.001)));
    }

    // ── Containment ───────────────────────────────────────────────────

    #[test]
    fn within_requires_both_endpoints_interior() {
        assert!(iv(5.0, 15.0).within(&iv(0.0, 20.0)));
        assert!(!iv(5.0, 25.0).within(&iv(0.0, 20.0)));
    }

    #[test]
    fn shared_boundary_is_not_containment() {
        // End coincides with the outer end; the strict test rejects it.
        assert!(!iv(0.0, 20.0).within(&iv(0.0, 20.0)));
        assert!(iv(0.0, 20.0).partly_within(&iv(0.0, 20.0)));
    }

    #[test]
    fn within_across_the_origin() {
        assert!(iv(355.0, 5.0).within(&iv(340.0, 20.0)));
        assert!(!iv(340.0, 20.0).within(&iv(355.0, 5.0)));
    }

    #[test]
    fn partly_within_with_single_interior_endpoint() {
        assert!(iv(10.0, 30.0).partly_within(&iv(0.0, 20.0)));
        assert!(!iv(30.0, 40.0).partly_within(&iv(0.0, 20.0)));
    }

    // ── Intersection ──────────────────────────────────────────────────

    #[test]
    fn intersection_partial_overlap() {
        let overlap = iv(10.0, 50.0).intersection(&iv(40.0, 70.0)).unwrap();
        assert_eq!(overlap, iv(40.0, 50.0));
    }

    #[test]
    fn intersection_with_wrapping_container() {
        // (40, 20) spans 340 degrees and fully contains (10, 50), so the
        // shorter interval is itself the overlap.
        let overlap = iv(10.0, 50.0).intersection(&iv(40.0, 20.0)).unwrap();
        assert_eq!(overlap.start().value(), 10.0);
        assert_eq!(overlap.end().value(), 50.0);
    }

    #[test]
    fn intersection_disjoint_is_none() {
        assert_eq!(iv(0.0, 10.0).intersection(&iv(100.0, 120.0)), None);
    }

    #[test]
    fn intersection_is_symmetric() {
        let a = iv(10.0, 50.0);
        let b = iv(40.0, 70.0);
        assert_eq!(a.intersection(&b), b.intersection(&a));

        let c = iv(300.0, 30.0);
        assert_eq!(a.intersection(&c), c.intersection(&a));
    }

    #[test]
    fn intersection_length_of_disjoint_is_zero() {
        assert_eq!(iv(0.0, 10.0).intersection_length(&iv(100.0, 120.0)).value(), 0.0);
    }

    // ── Midpoint ──────────────────────────────────────────────────────

    #[test]
    fn midpoint_of_plain_interval() {
        assert_eq!(iv(10.0, 50.0).midpoint().value(), 30.0);
    }

    #[test]
    fn midpoint_of_wrapping_interval_reduces() {
        // 350 + 20/2 = 360, which folds back to 0.
        assert_eq!(iv(350.0, 10.0).midpoint().value(), 0.0);
    }

    // ── Construction ──────────────────────────────────────────────────

    #[test]
    #[should_panic(expected = "finite")]
    fn non_finite_endpoint_is_rejected() {
        let _ = iv(f64::NAN, 10.0);
    }

    #[test]
    fn degenerate_at_point() {
        let arc = CyclicInterval::<Degree>::at(deg(77.0));
        assert_eq!(arc.start().value(), 77.0);
        assert_eq!(arc.end().value(), 77.0);
    }

    // ── Properties ────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_interval_contains_its_start(s in 0.0..360.0f64, e in 0.0..360.0f64) {
            prop_assert!(iv(s, e).contains(deg(s)));
        }

        #[test]
        fn prop_intersection_length_is_symmetric(
            a0 in 0.0..360.0f64, a1 in 0.0..360.0f64,
            b0 in 0.0..360.0f64, b1 in 0.0..360.0f64,
        ) {
            let a = iv(a0, a1);
            let b = iv(b0, b1);
            prop_assert_eq!(
                a.intersection_length(&b).value(),
                b.intersection_length(&a).value()
            );
        }

        #[test]
        fn prop_intersection_never_exceeds_shorter_operand(
            a0 in 0.0..360.0f64, a1 in 0.0..360.0f64,
            b0 in 0.0..360.0f64, b1 in 0.0..360.0f64,
        ) {
            let a = iv(a0, a1);
            let b = iv(b0, b1);
            let bound = a.length().value().min(b.length().value());
            prop_assert!(a.intersection_length(&b).value() <= bound + 1e-9);
        }
    }
}
