//! Single-exposure record used by the window computations.

use std::fmt::Display;

use qtty::{Degree, Quantity};

use crate::cyclic::CyclicInterval;
use crate::Id;

/// Dither position of an exposure within its set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dither {
    North,
    South,
    East,
}

impl Display for Dither {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Dither::North => 'N',
            Dither::South => 'S',
            Dither::East => 'E',
        };
        write!(f, "{}", letter)
    }
}

/// One observed (or simulated) exposure of a plate.
///
/// The hour-angle window records the arc the target crossed while the
/// shutter was open. Exposures flagged invalid stay in their set for
/// bookkeeping but are excluded from window computations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exposure {
    id: Id,
    ha: CyclicInterval<Degree>,
    dither: Dither,
    seeing: f64,
    valid: bool,
}

impl Exposure {
    pub fn new(id: impl Into<Id>, ha: CyclicInterval<Degree>, dither: Dither, seeing: f64) -> Self {
        Self {
            id: id.into(),
            ha,
            dither,
            seeing,
            valid: true,
        }
    }

    /// Creates a simulated exposure with an auto-generated unique id.
    ///
    /// Used when planning ahead: mock exposures let the caller probe how a
    /// set's windows evolve as further dithers are taken.
    pub fn mock(ha: CyclicInterval<Degree>, dither: Dither, seeing: f64) -> Self {
        Self::new(crate::generate_id(), ha, dither, seeing)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Hour-angle window covered by this exposure.
    pub fn ha_window(&self) -> CyclicInterval<Degree> {
        self.ha
    }

    /// Midpoint of the hour-angle window.
    pub fn mid_ha(&self) -> Quantity<Degree> {
        self.ha.midpoint()
    }

    pub fn dither(&self) -> Dither {
        self.dither
    }

    /// Seeing in arcseconds at the time of the exposure.
    pub fn seeing(&self) -> f64 {
        self.seeing
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Flags the exposure as unusable for window and quality computations.
    pub fn invalidate(&mut self) {
        self.valid = false;
    }
}
