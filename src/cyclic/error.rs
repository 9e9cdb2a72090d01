use thiserror::Error;

/// Errors reported by the cyclic interval operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CyclicError {
    #[error("cannot merge an empty interval sequence")]
    EmptySequence,

    #[error("cannot derive an enclosing arc from an empty point set")]
    EmptyPointSet,

    #[error("point set contains a non-finite value: {0}")]
    NonFinitePoint(f64),
}
