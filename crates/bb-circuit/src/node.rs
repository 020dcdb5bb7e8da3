//! Electrical nodes.

use bb_core::{NodeId, Position};

/// A distinct electrical connection point of a circuit.
///
/// Nodes are minimal: an id unique within the owning circuit and the
/// position it was created from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id: NodeId,
    pub position: Position,
}

impl Node {
    pub fn new(id: NodeId, position: Position) -> Self {
        Self { id, position }
    }

    /// True when this node sits on the same electrical point as `position`.
    pub fn is_at(&self, position: &Position) -> bool {
        self.position.same_point(position)
    }
}
