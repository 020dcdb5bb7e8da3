//! Boards: sinks for completed circuits.

use bb_core::{CircuitId, IdAllocator, Position};

use crate::node::Node;

/// Snapshot of a circuit handed to a board on registration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircuitRecord {
    pub name: Option<String>,
    /// Non-ground nodes in insertion order.
    pub nodes: Vec<Node>,
    /// `None` only when registered under the lenient policy.
    pub ground: Option<Position>,
}

impl CircuitRecord {
    pub fn node_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.nodes.iter().map(|n| n.position)
    }
}

/// Anything that accepts completed circuits.
pub trait Board {
    fn add_circuit(&mut self, circuit: CircuitRecord);
}

/// A board keeping registered circuits in registration order.
///
/// Accepts every circuit presented to it, duplicates included.
#[derive(Debug, Clone, Default)]
pub struct Breadboard {
    name: String,
    circuits: Vec<CircuitRecord>,
    ids: IdAllocator,
}

impl Breadboard {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn circuits(&self) -> &[CircuitRecord] {
        &self.circuits
    }

    /// Get a registered circuit by ID (returns None if ID out of bounds).
    pub fn circuit(&self, id: CircuitId) -> Option<&CircuitRecord> {
        self.circuits.get(id.index() as usize)
    }

    /// Registered circuits paired with the ids they were given.
    pub fn iter(&self) -> impl Iterator<Item = (CircuitId, &CircuitRecord)> {
        self.circuits
            .iter()
            .enumerate()
            .map(|(i, c)| (CircuitId::from_index(i as u32), c))
    }

    pub fn len(&self) -> usize {
        self.circuits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circuits.is_empty()
    }
}

impl Board for Breadboard {
    fn add_circuit(&mut self, circuit: CircuitRecord) {
        let id = self.ids.fresh();
        tracing::debug!(
            board = %self.name,
            circuit = %id,
            nodes = circuit.nodes.len(),
            "registered circuit"
        );
        self.circuits.push(circuit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bb_core::Id;

    fn record(name: &str) -> CircuitRecord {
        CircuitRecord {
            name: Some(name.into()),
            nodes: vec![Node::new(Id::from_index(0), Position::new(1, 1))],
            ground: Some(Position::new(0, 0)),
        }
    }

    #[test]
    fn circuits_are_kept_in_registration_order() {
        let mut board = Breadboard::new("bench");
        assert!(board.is_empty());
        board.add_circuit(record("a"));
        board.add_circuit(record("b"));

        assert_eq!(board.name(), "bench");
        assert_eq!(board.len(), 2);
        let b = board.circuit(CircuitId::from_index(1)).unwrap();
        assert_eq!(b.name.as_deref(), Some("b"));
        assert!(board.circuit(CircuitId::from_index(2)).is_none());

        let ids: Vec<u32> = board.iter().map(|(id, _)| id.index()).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn duplicates_are_accepted() {
        let mut board = Breadboard::default();
        board.add_circuit(record("same"));
        board.add_circuit(record("same"));
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn record_positions() {
        let positions: Vec<Position> = record("a").node_positions().collect();
        assert_eq!(positions, vec![Position::new(1, 1)]);
    }
}
