//! Circuit-specific error types.

use bb_core::{BbError, Position};

pub type CircuitResult<T> = Result<T, CircuitError>;

/// Usage errors raised while building or registering a circuit.
///
/// Every variant is a caller mistake in the call sequence, never an
/// environmental fault; retrying the same call cannot succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CircuitError {
    /// The circuit was constructed without a board.
    MissingCollaborator,

    /// A ground was designated while one is already set.
    DuplicateGround {
        existing: Position,
        requested: Position,
    },

    /// Registration was attempted before a ground was designated.
    IncompleteCircuit,

    /// Registration was attempted with no board bound.
    MissingBoard,
}

impl CircuitError {
    /// Short stable name, used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        match self {
            CircuitError::MissingCollaborator => "missing_collaborator",
            CircuitError::DuplicateGround { .. } => "duplicate_ground",
            CircuitError::IncompleteCircuit => "incomplete_circuit",
            CircuitError::MissingBoard => "missing_board",
        }
    }
}

impl std::fmt::Display for CircuitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CircuitError::MissingCollaborator => {
                write!(f, "Circuit needs to be initialised with a board")
            }
            CircuitError::DuplicateGround {
                existing,
                requested,
            } => {
                write!(
                    f,
                    "Each circuit can only have one ground node (already {}, requested {})",
                    existing, requested
                )
            }
            CircuitError::IncompleteCircuit => {
                write!(f, "Circuit has no ground/reference node yet")
            }
            CircuitError::MissingBoard => write!(f, "Circuit is not bound to a board"),
        }
    }
}

impl std::error::Error for CircuitError {}

impl From<CircuitError> for BbError {
    fn from(err: CircuitError) -> Self {
        BbError::Invariant {
            what: err.to_string(),
        }
    }
}
