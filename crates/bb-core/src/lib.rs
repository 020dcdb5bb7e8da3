//! bb-core: stable foundation for breadboard.
//!
//! Contains:
//! - ids (compact IDs for nodes and circuits, plus a local allocator)
//! - position (grid coordinates with a canonical string form)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod position;

pub use error::{BbError, BbResult};
pub use ids::*;
pub use position::Position;
