//! Nightly plan composition.
//!
//! The nightly run wires the pieces together: the night's schedule says when
//! each survey observes, the per-survey planners (external to this crate)
//! rank the plates they want, and the assigner maps those choices onto the
//! cartridge inventory. This module performs that composition and packages
//! the result for the caller to persist or format.
//!
//! Loading the schedule file, querying the plate database and the planners'
//! selection heuristics all live upstream; `plan_night` receives their
//! already-validated output records.

mod schedule;

pub use schedule::{NightSchedule, Period};

use std::fmt::Debug;

use log::{info, warn};

use crate::assignment::{assign, AssignmentReport, CartridgeInventory, SurveyRequests};

/// Complete output of one nightly planning run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NightlyPlan<S> {
    /// The night schedule the run was planned against.
    pub schedule: NightSchedule<S>,
    /// Cartridge mapping and under-subscription summary.
    pub report: AssignmentReport<S>,
}

impl<S: Copy + PartialEq> NightlyPlan<S> {
    pub fn mjd(&self) -> i64 {
        self.schedule.mjd()
    }
}

/// Runs the nightly cartridge assignment for one night.
///
/// `requests` must already be in the configured survey priority order; the
/// inventory is the caller's exclusively-owned working copy and is mutated
/// in place. Surveys that submitted choices without holding a window
/// tonight are logged and still assigned: gating choices on the schedule is
/// the planners' responsibility, not the assigner's.
pub fn plan_night<S>(
    schedule: NightSchedule<S>,
    inventory: &mut CartridgeInventory<S>,
    requests: &[SurveyRequests<S>],
) -> NightlyPlan<S>
where
    S: Copy + PartialEq + Debug,
{
    info!(
        "planning night mjd={} ({} surveys, {} cartridges, {:.2} h awarded)",
        schedule.mjd(),
        requests.len(),
        inventory.len(),
        schedule.total_hours()
    );

    for request in requests {
        if !request.choices.is_empty() && !schedule.is_awarded(request.survey) {
            warn!(
                "{:?} submitted {} choices but holds no window on mjd={}",
                request.survey,
                request.choices.len(),
                schedule.mjd()
            );
        }
    }

    let report = assign(inventory, requests);

    info!(
        "night mjd={}: {} cartridges filled, {} choices unplaced",
        schedule.mjd(),
        report.plan.placed_count(),
        report.unplaced_count()
    );

    NightlyPlan { schedule, report }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::{Cartridge, CartridgeId, ChoiceRecord, EligibilityTier, PlateId};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Survey {
        Infrared,
        Ifu,
    }

    fn two_cart_inventory() -> CartridgeInventory<Survey> {
        CartridgeInventory::new(vec![
            Cartridge::new(CartridgeId(1), EligibilityTier::Dedicated(Survey::Infrared)),
            Cartridge::new(CartridgeId(2), EligibilityTier::Universal),
        ])
        .unwrap()
    }

    #[test]
    fn plan_night_composes_schedule_and_assignment() {
        let schedule = NightSchedule::new(57274)
            .award(Survey::Infrared, Period::from_mjd(57274.6, 57274.8))
            .award(Survey::Ifu, Period::from_mjd(57274.8, 57275.05));
        let mut inventory = two_cart_inventory();
        let requests = [
            SurveyRequests::new(Survey::Infrared, vec![ChoiceRecord::new(PlateId(8))]),
            SurveyRequests::new(Survey::Ifu, vec![ChoiceRecord::new(PlateId(21))]),
        ];

        let plan = plan_night(schedule, &mut inventory, &requests);

        assert_eq!(plan.mjd(), 57274);
        assert_eq!(plan.report.plan.placed_count(), 2);
        assert!(plan.report.unplaced.is_empty());
        assert_eq!(inventory.free_count(), 0);
    }

    #[test]
    fn surveys_without_windows_are_still_assigned() {
        let schedule = NightSchedule::new(57274);
        let mut inventory = two_cart_inventory();
        let requests = [SurveyRequests::new(
            Survey::Ifu,
            vec![ChoiceRecord::new(PlateId(21))],
        )];

        let plan = plan_night(schedule, &mut inventory, &requests);

        assert_eq!(plan.report.plan.placed_count(), 1);
    }
}
