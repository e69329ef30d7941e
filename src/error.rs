//! Engine error types.

use derive_more::{Display, Error};

/// Errors surfaced by the engine's public entry points.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// The caller handed over something that is not a well-formed board,
    /// cell or mark.
    #[display("invalid input: {reason}")]
    InvalidInput { reason: String },
    /// A move was requested on a board that has no legal move.
    #[display("precondition violated: {reason}")]
    PreconditionViolation { reason: String },
}

impl EngineError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn precondition(reason: impl Into<String>) -> Self {
        Self::PreconditionViolation {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EngineError::invalid_input("board needs 9 cells, got 8");
        assert_eq!(err.to_string(), "invalid input: board needs 9 cells, got 8");

        let err = EngineError::precondition("game is over");
        assert_eq!(err.to_string(), "precondition violated: game is over");
    }
}
