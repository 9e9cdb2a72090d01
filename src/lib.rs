//! plugsched - nightly cartridge assignment for multi-survey plate observing
//!
//! A library for allocating a telescope's plug-in cartridge slots to the
//! ranked plate choices produced by independent per-survey planners, together
//! with the circular (wrap-around) interval algebra used to reason about
//! hour-angle and local-sidereal-time visibility windows.

pub mod assignment;
pub mod cyclic;
pub mod nightly;
pub mod window;

/// Identifier type used for exposures and other scheduling artifacts.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
