//! Assignment output: the cartridge → plate mapping and its summary.

use std::collections::BTreeMap;

use super::cartridge::{CartridgeId, PlateId};
use super::choice::ChoiceRecord;

/// A filled cartridge: the survey and choice that landed in it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement<S> {
    pub survey: S,
    pub choice: ChoiceRecord,
}

/// A choice that found no eligible free cartridge tonight.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unplaced<S> {
    pub survey: S,
    pub plate: PlateId,
}

/// The final cartridge → choice mapping for one night.
///
/// Only filled cartridges appear as entries; a missing key means the slot
/// stays empty. Iteration is in cartridge-id order, so two runs over the
/// same inputs produce byte-identical output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlugPlan<S> {
    entries: BTreeMap<CartridgeId, Placement<S>>,
}

impl<S> PlugPlan<S> {
    pub(crate) fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, cart: CartridgeId, placement: Placement<S>) {
        self.entries.insert(cart, placement);
    }

    /// The placement in `cart`, or `None` when the slot stays empty.
    pub fn get(&self, cart: CartridgeId) -> Option<&Placement<S>> {
        self.entries.get(&cart)
    }

    /// Iterates over filled cartridges in id order.
    pub fn iter(&self) -> impl Iterator<Item = (CartridgeId, &Placement<S>)> {
        self.entries.iter().map(|(id, placement)| (*id, placement))
    }

    pub fn placed_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if `plate` has been placed in some cartridge.
    pub fn contains_plate(&self, plate: PlateId) -> bool {
        self.entries.values().any(|p| p.choice.plate == plate)
    }
}

/// Outcome of one assignment run: the mapping plus the under-subscription
/// summary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignmentReport<S> {
    pub plan: PlugPlan<S>,
    pub unplaced: Vec<Unplaced<S>>,
}

impl<S> AssignmentReport<S> {
    pub fn unplaced_count(&self) -> usize {
        self.unplaced.len()
    }
}
