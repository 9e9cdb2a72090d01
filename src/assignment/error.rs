use thiserror::Error;

use super::cartridge::CartridgeId;

/// Errors reported while building the slot inventory.
///
/// Running out of slots for a choice is deliberately *not* an error: a
/// night with more choices than cartridges is a normal operating condition,
/// reported through the assignment summary instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssignError {
    #[error("cartridge inventory is empty")]
    EmptyInventory,

    #[error("duplicate cartridge id in inventory: {0}")]
    DuplicateCartridge(CartridgeId),
}
