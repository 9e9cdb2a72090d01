use thiserror::Error;

use crate::cyclic::CyclicError;

/// Errors reported by the exposure-window computations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WindowError {
    #[error("exposure set has no exposures")]
    EmptySet,

    #[error("exposure set has no valid exposures")]
    NoValidExposures,

    #[error(transparent)]
    Algebra(#[from] CyclicError),
}
