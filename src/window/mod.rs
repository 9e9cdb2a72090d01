//! Visibility and quality windows for groups of exposures.
//!
//! Per-survey planners decide rank order from how much hour angle a field
//! still has available tonight. This module derives those windows from the
//! exposures already taken: the merged hour-angle window of a set, the
//! limits within which further exposures may still join it, and the
//! corresponding local-sidereal-time window.
//!
//! All wrap-around reasoning delegates to [`crate::cyclic`].

mod error;
mod exposure;
mod set;

pub use error::WindowError;
pub use exposure::{Dither, Exposure};
pub use set::{ExposureSet, WindowMode, DEFAULT_REPLUG_TOLERANCE};
