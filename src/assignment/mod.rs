//! Cartridge assignment: ranked survey choices onto physical slots.
//!
//! Each survey's planner independently ranks its observable plates and emits
//! an ordered choice list. This module merges those lists into a single
//! deterministic cartridge → plate mapping:
//!
//! 1. **Slot model**: a fixed inventory of [`Cartridge`] slots, each with an
//!    [`EligibilityTier`] restricting which surveys it may host and a record
//!    of the plate mounted before tonight.
//! 2. **Continuity first**: plates already sitting in an eligible cartridge
//!    keep their slot, so the plugging crew never re-plugs a plate that is
//!    about to be observed again.
//! 3. **Greedy fallback**: everything else claims the first free eligible
//!    slot in id order, earlier-ranked choices first. Surveys are processed
//!    in the caller's priority order; there is no backtracking and no global
//!    optimisation.
//!
//! Choices that find no slot are returned in the report's unplaced summary.
//!
//! # Module Structure
//!
//! - [`cartridge`] - slot inventory model and identifiers
//! - [`choice`] - ranked choice records handed over by the planners
//! - [`engine`] - the two-pass assignment loop
//! - [`plan`] - output mapping and under-subscription summary

mod cartridge;
mod choice;
mod engine;
mod error;
mod plan;


pub use cartridge::{Cartridge, CartridgeId, CartridgeInventory, EligibilityTier, PlateId};
pub use choice::{ChoiceRecord, SurveyRequests};
pub use engine::assign;
pub use error::AssignError;
pub use plan::{AssignmentReport, Placement, PlugPlan, Unplaced};
