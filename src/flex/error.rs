//! Error taxonomy for flexibility computations.

use std::error::Error;
use std::fmt;

use serde::Serialize;

use super::types::Polarity;

/// Precondition violations detected while computing flexibility curves.
///
/// Every variant is raised at the point of detection and propagated to the
/// caller; none is recovered locally. Each one indicates malformed data from
/// an upstream collaborator, so the message carries the offending
/// timestep/polarity where one exists. Callers preparing a multi-device
/// visualization should skip the affected device or offer and continue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FlexError {
    /// Time grid with zero steps or a nonpositive step rate.
    InvalidGrid {
        /// Which grid invariant was violated.
        message: String,
    },
    /// Schedule or trajectory length does not match the grid.
    InvalidSchedule {
        /// Length required by the grid.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
    /// Offer with nonzero energy but zero power: the implied duration is
    /// undefined. Valid upstream data never produces this.
    InvalidOffer {
        /// Timestep of the offending offer.
        timestep: usize,
        /// Polarity whose fields are inconsistent.
        polarity: Polarity,
    },
    /// Empty input where at least one element is required.
    InvalidInput {
        /// What was empty.
        message: String,
    },
}

impl fmt::Display for FlexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlexError::InvalidGrid { message } => {
                write!(f, "invalid time grid: {message}")
            }
            FlexError::InvalidSchedule { expected, actual } => {
                write!(
                    f,
                    "schedule length {actual} does not match grid count {expected}"
                )
            }
            FlexError::InvalidOffer {
                timestep,
                polarity,
            } => {
                write!(
                    f,
                    "invalid {polarity:?} offer at timestep {timestep}: nonzero energy with zero power"
                )
            }
            FlexError::InvalidInput { message } => {
                write!(f, "invalid input: {message}")
            }
        }
    }
}

impl Error for FlexError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_context() {
        let err = FlexError::InvalidOffer {
            timestep: 17,
            polarity: Polarity::Neg,
        };
        let msg = err.to_string();
        assert!(msg.contains("17"));
        assert!(msg.contains("Neg"));
    }

    #[test]
    fn display_schedule_mismatch() {
        let err = FlexError::InvalidSchedule {
            expected: 96,
            actual: 95,
        };
        let msg = err.to_string();
        assert!(msg.contains("95"));
        assert!(msg.contains("96"));
    }
}
