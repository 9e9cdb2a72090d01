//! Exposure sets and their visibility/quality windows.

use log::debug;
use qtty::{Degree, Hour, Quantity};

use crate::cyclic::{enclosing_arc, merge_sequence, CyclicInterval, Wraparound};

use super::error::WindowError;
use super::exposure::{Dither, Exposure};

/// Default hour-angle tolerance around an existing set when deciding where
/// further exposures may still be taken: 15 degrees, one hour of tracking.
pub const DEFAULT_REPLUG_TOLERANCE: Quantity<Degree> = Quantity::new(15.0);

/// How the combined hour-angle window of a set is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMode {
    /// Merge the full hour-angle windows of the valid exposures.
    Extremes,
    /// Take the smallest arc enclosing the valid exposures' midpoints.
    Midpoints,
}

/// A group of exposures of one field, taken (or planned) as a unit.
///
/// The set keeps the field's right ascension so hour-angle windows can be
/// re-expressed in local sidereal time. Exposure order is preserved: window
/// merging folds the windows in the order the exposures were taken.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExposureSet {
    ra: Quantity<Degree>,
    exposures: Vec<Exposure>,
}

impl ExposureSet {
    /// Creates a set from existing exposures.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::EmptySet`] if `exposures` is empty.
    pub fn new(ra: Quantity<Degree>, exposures: Vec<Exposure>) -> Result<Self, WindowError> {
        if exposures.is_empty() {
            return Err(WindowError::EmptySet);
        }
        debug!(
            "loaded exposure set at ra={:.3} with {} exposures",
            ra.value(),
            exposures.len()
        );
        Ok(Self { ra, exposures })
    }

    pub fn ra(&self) -> Quantity<Degree> {
        self.ra
    }

    pub fn exposures(&self) -> &[Exposure] {
        &self.exposures
    }

    /// Exposures that still count towards windows and quality.
    pub fn valid_exposures(&self) -> Vec<&Exposure> {
        self.exposures.iter().filter(|e| e.is_valid()).collect()
    }

    /// Appends an exposure to the set.
    pub fn push(&mut self, exposure: Exposure) {
        self.exposures.push(exposure);
    }

    /// Appends a simulated exposure, returning its generated id.
    pub fn push_mock(&mut self, ha: CyclicInterval<Degree>, dither: Dither, seeing: f64) -> String {
        let exposure = Exposure::mock(ha, dither, seeing);
        let id = exposure.id().to_string();
        self.exposures.push(exposure);
        id
    }

    /// Combined hour-angle window of the set's valid exposures.
    ///
    /// In [`WindowMode::Extremes`] (and always when only one valid exposure
    /// exists) the individual windows are folded into a single covering
    /// interval. In [`WindowMode::Midpoints`] the window is the smallest arc
    /// enclosing the exposures' mid hour angles, which is better behaved for
    /// long, patchy exposure histories.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::NoValidExposures`] if every exposure has been
    /// invalidated.
    pub fn ha_window(&self, mode: WindowMode) -> Result<CyclicInterval<Degree>, WindowError> {
        let valid = self.valid_exposures();
        if valid.is_empty() {
            return Err(WindowError::NoValidExposures);
        }

        match mode {
            WindowMode::Extremes => {
                let windows: Vec<_> = valid.iter().map(|e| e.ha_window()).collect();
                Ok(merge_sequence(&windows)?)
            }
            WindowMode::Midpoints if valid.len() == 1 => Ok(valid[0].ha_window()),
            WindowMode::Midpoints => {
                let midpoints: Vec<_> = valid.iter().map(|e| e.mid_ha()).collect();
                Ok(enclosing_arc(&midpoints)?)
            }
        }
    }

    /// Hour-angle limits within which further exposures may join the set.
    ///
    /// Derived from the merged window by bracketing its numerically larger
    /// endpoint minus the tolerance and its smaller endpoint plus the
    /// tolerance, reduced into the degree domain. A window already wider
    /// than twice the tolerance yields a reversed (empty) bracket.
    pub fn replug_window(
        &self,
        tolerance: Quantity<Degree>,
    ) -> Result<CyclicInterval<Degree>, WindowError> {
        let window = self.ha_window(WindowMode::Extremes)?;
        let hi = window.start().value().max(window.end().value());
        let lo = window.start().value().min(window.end().value());
        Ok(CyclicInterval::from_f64(
            (hi - tolerance.value()).rem_euclid(Degree::TURN),
            (lo + tolerance.value()).rem_euclid(Degree::TURN),
        ))
    }

    /// Local-sidereal-time window corresponding to [`Self::replug_window`]
    /// at the default tolerance.
    pub fn lst_window(&self) -> Result<CyclicInterval<Hour>, WindowError> {
        let replug = self.replug_window(DEFAULT_REPLUG_TOLERANCE)?;
        let lst = |ha: f64| (ha + self.ra.value()).rem_euclid(Degree::TURN) / 15.0;
        Ok(CyclicInterval::from_f64(
            lst(replug.start().value()),
            lst(replug.end().value()),
        ))
    }

    /// Dither positions present in the set, in exposure order.
    pub fn dithers(&self) -> Vec<Dither> {
        self.exposures.iter().map(|e| e.dither()).collect()
    }

    /// Expected dither positions not yet covered by the set.
    ///
    /// Each exposure consumes one occurrence from the expected list, so a
    /// repeated expectation stays missing until it is matched twice.
    pub fn missing_dithers(&self, expected: &[Dither]) -> Vec<Dither> {
        let mut remaining: Vec<Dither> = expected.to_vec();
        for dither in self.dithers() {
            if let Some(pos) = remaining.iter().position(|&d| d == dither) {
                remaining.remove(pos);
            }
        }
        remaining
    }

    /// Seeing range, in arcseconds, within which further exposures keep the
    /// set homogeneous: `(max(seeing) - spread, min(seeing) + spread)`, with
    /// the upper bound clamped to `ceiling`. All exposures count, valid or
    /// not.
    pub fn seeing_window(&self, max_spread: f64, ceiling: f64) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for exposure in &self.exposures {
            min = min.min(exposure.seeing());
            max = max.max(exposure.seeing());
        }
        (max - max_spread, (min + max_spread).min(ceiling))
    }

    /// Mean seeing over the valid exposures, or `None` when none remain.
    pub fn mean_seeing(&self) -> Option<f64> {
        let valid = self.valid_exposures();
        if valid.is_empty() {
            return None;
        }
        let total: f64 = valid.iter().map(|e| e.seeing()).sum();
        Some(total / valid.len() as f64)
    }
}
