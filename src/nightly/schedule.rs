//! Night schedule records: per-survey observing windows in MJD.

use std::fmt::Display;

use qtty::{Day, Quantity};

/// A linear (non-wrapping) time window in Modified Julian Date.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Period {
    start: Quantity<Day>,
    stop: Quantity<Day>,
}

impl Period {
    /// Creates the window `[start, stop]`.
    ///
    /// # Panics
    ///
    /// Panics if `start > stop`; night windows never wrap.
    pub fn new(start: Quantity<Day>, stop: Quantity<Day>) -> Self {
        assert!(
            start.value() <= stop.value(),
            "Period start must be <= stop"
        );
        Self { start, stop }
    }

    pub fn from_mjd(start: f64, stop: f64) -> Self {
        Self::new(Quantity::new(start), Quantity::new(stop))
    }

    pub const fn start(&self) -> Quantity<Day> {
        self.start
    }

    pub const fn stop(&self) -> Quantity<Day> {
        self.stop
    }

    pub fn duration(&self) -> Quantity<Day> {
        self.stop - self.start
    }

    /// Window length in hours.
    pub fn hours(&self) -> f64 {
        self.duration().value() * 24.0
    }

    pub fn contains(&self, time: Quantity<Day>) -> bool {
        self.start.value() <= time.value() && time.value() <= self.stop.value()
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.4}, {:.4}]", self.start.value(), self.stop.value())
    }
}

/// One night's awarded observing windows, in survey priority order.
///
/// The schedule says *when* each survey observes tonight; which plates it
/// observes is the planners' business, and where they are plugged is the
/// assigner's.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NightSchedule<S> {
    mjd: i64,
    windows: Vec<(S, Period)>,
}

impl<S: Copy + PartialEq> NightSchedule<S> {
    pub fn new(mjd: i64) -> Self {
        Self {
            mjd,
            windows: Vec::new(),
        }
    }

    /// Awards `period` to `survey` tonight.
    pub fn award(mut self, survey: S, period: Period) -> Self {
        self.windows.push((survey, period));
        self
    }

    pub fn mjd(&self) -> i64 {
        self.mjd
    }

    /// The window awarded to `survey`, if any.
    pub fn window(&self, survey: S) -> Option<Period> {
        self.windows
            .iter()
            .find(|(s, _)| *s == survey)
            .map(|(_, period)| *period)
    }

    pub fn is_awarded(&self, survey: S) -> bool {
        self.window(survey).is_some()
    }

    /// Awarded windows in insertion (priority) order.
    pub fn windows(&self) -> &[(S, Period)] {
        &self.windows
    }

    /// Total awarded time across all surveys, in hours.
    pub fn total_hours(&self) -> f64 {
        self.windows.iter().map(|(_, p)| p.hours()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Survey {
        Infrared,
        Ifu,
    }

    #[test]
    fn period_duration_and_hours() {
        let period = Period::from_mjd(57274.75, 57275.0);
        assert_eq!(period.duration().value(), 0.25);
        assert_eq!(period.hours(), 6.0);
    }

    #[test]
    fn period_contains_endpoints() {
        let period = Period::from_mjd(57274.75, 57275.0);
        assert!(period.contains(Quantity::new(57274.75)));
        assert!(period.contains(Quantity::new(57275.0)));
        assert!(!period.contains(Quantity::new(57275.1)));
    }

    #[test]
    #[should_panic(expected = "start must be <= stop")]
    fn reversed_period_is_rejected() {
        let _ = Period::from_mjd(57275.0, 57274.75);
    }

    #[test]
    fn schedule_lookups() {
        let schedule = NightSchedule::new(57274)
            .award(Survey::Infrared, Period::from_mjd(57274.6, 57274.8))
            .award(Survey::Ifu, Period::from_mjd(57274.8, 57275.05));

        assert_eq!(schedule.mjd(), 57274);
        assert!(schedule.is_awarded(Survey::Infrared));
        assert_eq!(
            schedule.window(Survey::Ifu),
            Some(Period::from_mjd(57274.8, 57275.05))
        );
        assert_eq!(schedule.windows().len(), 2);
    }

    #[test]
    fn total_hours_sums_windows() {
        let schedule = NightSchedule::new(57274)
            .award(Survey::Infrared, Period::from_mjd(57274.5, 57274.75))
            .award(Survey::Ifu, Period::from_mjd(57274.75, 57275.0));

        assert!((schedule.total_hours() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn unawarded_survey_has_no_window() {
        let schedule =
            NightSchedule::new(57274).award(Survey::Infrared, Period::from_mjd(57274.6, 57274.8));
        assert!(!schedule.is_awarded(Survey::Ifu));
        assert_eq!(schedule.window(Survey::Ifu), None);
    }
}
