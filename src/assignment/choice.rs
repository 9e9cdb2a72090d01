//! Ranked plate choices handed over by the per-survey planners.

use qtty::{Day, Quantity, Second};

use super::cartridge::{CartridgeId, PlateId};

/// One ranked plate choice emitted by a survey planner.
///
/// Planners rank their own candidates; a choice list encodes priority by
/// position and is never re-sorted here. The scheduling metadata rides along
/// unmodified into the plugging request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChoiceRecord {
    /// The plate to observe.
    pub plate: PlateId,
    /// Cartridge this plate would keep if it is already mounted there.
    pub keep_cart: Option<CartridgeId>,
    /// Ordered fallback plates should this one become unobservable.
    pub backups: Vec<PlateId>,
    /// Requested observation time, MJD.
    pub obs_time: Quantity<Day>,
    /// Expected exposure length.
    pub exposure_length: Quantity<Second>,
}

impl ChoiceRecord {
    /// Creates a bare choice with no continuity hint, backups or timing.
    pub fn new(plate: PlateId) -> Self {
        Self {
            plate,
            keep_cart: None,
            backups: Vec::new(),
            obs_time: Quantity::new(0.0),
            exposure_length: Quantity::new(0.0),
        }
    }

    /// Hints that `cart` currently holds this plate and should keep it.
    pub fn keep_in(mut self, cart: CartridgeId) -> Self {
        self.keep_cart = Some(cart);
        self
    }

    pub fn with_backups(mut self, backups: Vec<PlateId>) -> Self {
        self.backups = backups;
        self
    }

    pub fn with_timing(mut self, obs_time: Quantity<Day>, exposure_length: Quantity<Second>) -> Self {
        self.obs_time = obs_time;
        self.exposure_length = exposure_length;
        self
    }
}

/// One survey's ordered choice list.
///
/// The slice of `SurveyRequests` handed to the assigner must already be in
/// the configured survey priority order: surveys with the tightest slot
/// eligibility go first so flexible slots remain available for the rest.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurveyRequests<S> {
    pub survey: S,
    pub choices: Vec<ChoiceRecord>,
}

impl<S> SurveyRequests<S> {
    pub fn new(survey: S, choices: Vec<ChoiceRecord>) -> Self {
        Self { survey, choices }
    }
}
