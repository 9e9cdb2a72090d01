//! Cartridge slot inventory model.

use std::fmt::Display;

use super::error::AssignError;

/// Identifier of a physical cartridge slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CartridgeId(pub u16);

impl Display for CartridgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of a plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlateId(pub u32);

impl Display for PlateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Which surveys a cartridge may host.
///
/// Eligibility is fixed hardware configuration, supplied by the caller
/// alongside the inventory; the assigner only ever queries [`accepts`].
///
/// [`accepts`]: EligibilityTier::accepts
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EligibilityTier<S> {
    /// Hosts exactly one survey.
    Dedicated(S),
    /// Shared between a fixed group of surveys.
    Shared(Vec<S>),
    /// Accepts any survey.
    Universal,
}

impl<S: PartialEq> EligibilityTier<S> {
    /// Returns true if a cartridge of this tier may host `survey`.
    pub fn accepts(&self, survey: &S) -> bool {
        match self {
            EligibilityTier::Dedicated(only) => only == survey,
            EligibilityTier::Shared(group) => group.contains(survey),
            EligibilityTier::Universal => true,
        }
    }
}

/// One physical cartridge slot.
///
/// `previous` records the plate that was mounted before tonight's planning
/// pass; `current` is tonight's assignment, filled in by the assigner.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cartridge<S> {
    id: CartridgeId,
    tier: EligibilityTier<S>,
    previous: Option<PlateId>,
    current: Option<PlateId>,
}

impl<S: PartialEq> Cartridge<S> {
    /// Creates an empty cartridge with no plugging history.
    pub fn new(id: CartridgeId, tier: EligibilityTier<S>) -> Self {
        Self {
            id,
            tier,
            previous: None,
            current: None,
        }
    }

    /// Records the plate physically mounted before this planning run.
    pub fn with_previous(mut self, plate: PlateId) -> Self {
        self.previous = Some(plate);
        self
    }

    pub fn id(&self) -> CartridgeId {
        self.id
    }

    pub fn tier(&self) -> &EligibilityTier<S> {
        &self.tier
    }

    pub fn previous(&self) -> Option<PlateId> {
        self.previous
    }

    pub fn current(&self) -> Option<PlateId> {
        self.current
    }

    pub fn accepts(&self, survey: &S) -> bool {
        self.tier.accepts(survey)
    }

    /// Returns true if no plate has been assigned tonight.
    pub fn is_free(&self) -> bool {
        self.current.is_none()
    }

    pub(crate) fn mount(&mut self, plate: PlateId) {
        self.current = Some(plate);
    }
}

/// The full slot inventory for one scheduling run.
///
/// Loaded once per run, held sorted by cartridge id, and mutated in place
/// while choices are assigned. The caller owns the inventory exclusively;
/// concurrent runs must each bring their own copy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CartridgeInventory<S> {
    carts: Vec<Cartridge<S>>,
}

impl<S: PartialEq> CartridgeInventory<S> {
    /// Builds an inventory from the given cartridges, sorting by id.
    ///
    /// # Errors
    ///
    /// Returns [`AssignError::EmptyInventory`] for an empty slot list and
    /// [`AssignError::DuplicateCartridge`] when two slots share an id.
    pub fn new(mut carts: Vec<Cartridge<S>>) -> Result<Self, AssignError> {
        if carts.is_empty() {
            return Err(AssignError::EmptyInventory);
        }
        carts.sort_by_key(|c| c.id());
        if let Some(pair) = carts.windows(2).find(|pair| pair[0].id() == pair[1].id()) {
            return Err(AssignError::DuplicateCartridge(pair[0].id()));
        }
        Ok(Self { carts })
    }

    pub fn len(&self) -> usize {
        self.carts.len()
    }

    /// The inventory is never empty; kept for slice-like ergonomics.
    pub fn is_empty(&self) -> bool {
        self.carts.is_empty()
    }

    /// Iterates over the cartridges in id order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cartridge<S>> {
        self.carts.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Cartridge<S>> {
        self.carts.iter_mut()
    }

    pub fn get(&self, id: CartridgeId) -> Option<&Cartridge<S>> {
        self.carts.iter().find(|c| c.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: CartridgeId) -> Option<&mut Cartridge<S>> {
        self.carts.iter_mut().find(|c| c.id() == id)
    }

    /// Number of cartridges still without a plate tonight.
    pub fn free_count(&self) -> usize {
        self.carts.iter().filter(|c| c.is_free()).count()
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
    fn eligibility_tiers() {
        assert!(EligibilityTier::Dedicated(Survey::Infrared).accepts(&Survey::Infrared));
        assert!(!EligibilityTier::Dedicated(Survey::Infrared).accepts(&Survey::Ifu));

        let shared = EligibilityTier::Shared(vec![Survey::Infrared, Survey::Ifu]);
        assert!(shared.accepts(&Survey::Infrared));
        assert!(shared.accepts(&Survey::Ifu));

        assert!(EligibilityTier::<Survey>::Universal.accepts(&Survey::Ifu));
    }

    #[test]
    fn new_cartridge_is_free_with_no_history() {
        let cart = Cartridge::new(CartridgeId(3), EligibilityTier::Dedicated(Survey::Infrared));
        assert!(cart.is_free());
        assert_eq!(cart.previous(), None);
        assert_eq!(cart.current(), None);
    }

    #[test]
    fn inventory_sorts_by_id() {
        let inventory = CartridgeInventory::new(vec![
            Cartridge::new(CartridgeId(9), EligibilityTier::Dedicated(Survey::Ifu)),
            Cartridge::new(CartridgeId(2), EligibilityTier::Dedicated(Survey::Infrared)),
            Cartridge::new(CartridgeId(5), EligibilityTier::<Survey>::Universal),
        ])
        .unwrap();

        let ids: Vec<u16> = inventory.iter().map(|c| c.id().0).collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }

    #[test]
    fn empty_inventory_is_rejected() {
        assert_eq!(
            CartridgeInventory::<Survey>::new(Vec::new()),
            Err(AssignError::EmptyInventory)
        );
    }

    #[test]
    fn duplicate_cartridge_ids_are_rejected() {
        let result = CartridgeInventory::new(vec![
            Cartridge::new(CartridgeId(4), EligibilityTier::Dedicated(Survey::Infrared)),
            Cartridge::new(CartridgeId(4), EligibilityTier::Dedicated(Survey::Ifu)),
        ]);
        assert_eq!(result, Err(AssignError::DuplicateCartridge(CartridgeId(4))));
    }

    #[test]
    fn free_count_tracks_mounts() {
        let mut inventory = CartridgeInventory::new(vec![
            Cartridge::new(CartridgeId(1), EligibilityTier::Dedicated(Survey::Infrared)),
            Cartridge::new(CartridgeId(2), EligibilityTier::Dedicated(Survey::Infrared)),
        ])
        .unwrap();

        assert_eq!(inventory.free_count(), 2);
        inventory.get_mut(CartridgeId(1)).unwrap().mount(PlateId(77));
        assert_eq!(inventory.free_count(), 1);
        assert!(!inventory.get(CartridgeId(1)).unwrap().is_free());
    }
}
