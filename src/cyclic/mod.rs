//! Circular interval algebra on wrap-around domains.
//!
//! Hour angles and sidereal times live on circles: a visibility window may
//! cross the zero point, so `end < start` is meaningful and every operation
//! must reason modulo a full turn. This module provides the directed
//! [`CyclicInterval`] value type together with the covering-arc operations
//! the window computations are built on:
//!
//! - point membership, directional containment and intersection
//!   ([`CyclicInterval`]);
//! - folding an ordered sequence of windows into one covering interval
//!   ([`merge_sequence`]);
//! - the smallest arc enclosing a set of points ([`enclosing_arc`]).
//!
//! The modulus is carried by the unit through [`Wraparound`] (360 for
//! degrees, 24 for sidereal hours), so degree- and hour-domain windows
//! cannot be mixed by accident.
//!
//! Every operation is a pure function of its arguments: inputs are never
//! mutated, and degenerate geometry resolves by fixed, documented
//! tie-breaks.

mod error;
mod interval;
mod merge;

pub use error::CyclicError;
pub use interval::{CyclicInterval, Wraparound};
pub use merge::{enclosing_arc, merge_pair, merge_sequence};
