use thiserror::Error;

pub type BbResult<T> = Result<T, BbError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BbError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invalid position '{input}': {reason}")]
    InvalidPosition { input: String, reason: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
