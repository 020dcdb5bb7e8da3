//! bb-circuit: node and ground bookkeeping for one circuit on a board.
//!
//! Provides:
//! - `Circuit`, which accumulates nodes, resolves a single ground and
//!   registers itself with a board
//! - the `Board` seam plus a concrete `Breadboard`
//! - the `Reporter` diagnostic channel and `CircuitConfig`
//!
//! # Example
//!
//! ```
//! use bb_circuit::{Breadboard, Circuit};
//! use bb_core::Position;
//!
//! let mut board = Breadboard::new("demo");
//! let mut circuit = Circuit::new(&mut board);
//! circuit.add_node(Position::new(0, 0));
//! circuit.add_node(Position::new(0, 1));
//! circuit.set_ground(Position::new(0, 0)).unwrap();
//! circuit.add_to_board().unwrap();
//!
//! assert_eq!(board.len(), 1);
//! assert_eq!(board.circuits()[0].nodes.len(), 1);
//! ```

pub mod board;
pub mod circuit;
pub mod config;
pub mod error;
pub mod node;
pub mod report;

// Re-exports for ergonomics
pub use board::{Board, Breadboard, CircuitRecord};
pub use circuit::Circuit;
pub use config::{CircuitConfig, NodeMerging, ValidationPolicy};
pub use error::{CircuitError, CircuitResult};
pub use node::Node;
pub use report::{RecordingReporter, Reporter, TracingReporter};
