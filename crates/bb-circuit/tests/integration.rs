//! Integration tests for bb-circuit.

use bb_circuit::{
    Board, Breadboard, Circuit, CircuitConfig, CircuitError, CircuitRecord, RecordingReporter,
};
use bb_core::Position;

/// Board that remembers every registration call.
#[derive(Default)]
struct SpyBoard {
    received: Vec<CircuitRecord>,
}

impl Board for SpyBoard {
    fn add_circuit(&mut self, circuit: CircuitRecord) {
        self.received.push(circuit);
    }
}

fn p(column: i32, row: i32) -> Position {
    Position::new(column, row)
}

#[test]
fn distinct_positions_get_unique_ids() {
    let mut board = SpyBoard::default();
    let mut circuit = Circuit::new(&mut board);
    let ids: Vec<_> = (0..5).map(|i| circuit.add_node(p(i, 0))).collect();

    assert_eq!(circuit.node_count(), 5);
    let unique: std::collections::HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), 5);
    for (i, id) in ids.iter().enumerate() {
        assert_eq!(circuit.node(*id).unwrap().position, p(i as i32, 0));
    }
}

#[test]
fn ground_on_existing_node_removes_it() {
    let mut board = SpyBoard::default();
    let mut circuit = Circuit::new(&mut board);
    circuit.add_node(p(0, 0));
    let b = circuit.add_node(p(0, 1));

    circuit.set_ground(p(0, 0)).unwrap();

    assert_eq!(circuit.ground(), Some(p(0, 0)));
    let left: Vec<_> = circuit.nodes().map(|n| n.id).collect();
    assert_eq!(left, vec![b]);
}

#[test]
fn ground_on_unknown_position_keeps_nodes() {
    let mut board = SpyBoard::default();
    let mut circuit = Circuit::new(&mut board);
    circuit.add_node(p(1, 0));
    circuit.add_node(p(2, 0));

    let absorbed = circuit.set_ground(p(9, 9)).unwrap();

    assert!(absorbed.is_none());
    assert_eq!(circuit.node_count(), 2);
    assert_eq!(circuit.ground(), Some(p(9, 9)));
}

#[test]
fn second_ground_is_rejected_when_strict() {
    let reporter = RecordingReporter::new();
    let mut board = SpyBoard::default();
    let mut circuit =
        Circuit::with_config(Some(&mut board), CircuitConfig::strict(), reporter.clone()).unwrap();
    circuit.add_node(p(0, 0));
    circuit.add_node(p(0, 1));
    circuit.set_ground(p(0, 0)).unwrap();

    let err = circuit.set_ground(p(0, 1)).unwrap_err();

    assert_eq!(
        err,
        CircuitError::DuplicateGround {
            existing: p(0, 0),
            requested: p(0, 1),
        }
    );
    assert_eq!(circuit.ground(), Some(p(0, 0)));
    assert_eq!(circuit.node_count(), 1);
    assert_eq!(reporter.len(), 1);
}

#[test]
fn second_ground_overwrites_when_lenient() {
    let reporter = RecordingReporter::new();
    let mut board = SpyBoard::default();
    let mut circuit =
        Circuit::with_config(Some(&mut board), CircuitConfig::lenient(), reporter.clone())
            .unwrap();
    circuit.add_node(p(0, 0));
    circuit.add_node(p(0, 1));
    circuit.set_ground(p(0, 0)).unwrap();

    circuit.set_ground(p(0, 1)).unwrap();

    assert_eq!(circuit.ground(), Some(p(0, 1)));
    assert_eq!(circuit.node_count(), 0);
    assert_eq!(reporter.entries()[0].kind(), "duplicate_ground");
}

#[test]
fn registering_without_ground_fails_and_skips_board() {
    let reporter = RecordingReporter::new();
    let mut board = SpyBoard::default();
    {
        let mut circuit =
            Circuit::with_config(Some(&mut board), CircuitConfig::strict(), reporter.clone())
                .unwrap();
        circuit.add_node(p(0, 0));
        assert_eq!(circuit.add_to_board(), Err(CircuitError::IncompleteCircuit));
    }
    assert!(board.received.is_empty());
    assert_eq!(
        reporter.messages(),
        vec!["Circuit has no ground/reference node yet".to_string()]
    );
}

#[test]
fn lenient_registration_without_ground_still_reaches_board() {
    let reporter = RecordingReporter::new();
    let mut board = SpyBoard::default();
    let mut circuit =
        Circuit::with_config(Some(&mut board), CircuitConfig::lenient(), reporter.clone())
            .unwrap();
    circuit.add_node(p(0, 0));
    circuit.add_to_board().unwrap();

    assert_eq!(board.received.len(), 1);
    assert_eq!(board.received[0].ground, None);
    assert_eq!(reporter.entries(), vec![CircuitError::IncompleteCircuit]);
}

#[test]
fn grounded_circuit_registers_exactly_once() {
    let mut board = SpyBoard::default();
    let mut circuit = Circuit::new(&mut board).with_name("led");
    circuit.add_node(p(0, 0));
    circuit.add_node(p(0, 1));
    circuit.set_ground(p(0, 0)).unwrap();
    let expected = circuit.record();

    circuit.add_to_board().unwrap();

    assert_eq!(board.received, vec![expected]);
}

#[test]
fn end_to_end_two_nodes() {
    let mut board = Breadboard::new("bench");
    let a = p(4, 10);
    let b = p(4, 11);

    let mut circuit = Circuit::new(&mut board);
    circuit.add_node(a);
    let b_id = circuit.add_node(b);
    circuit.set_ground(a).unwrap();

    let nodes: Vec<_> = circuit.nodes().cloned().collect();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].id, b_id);
    assert_eq!(nodes[0].position, b);
    assert_eq!(circuit.ground(), Some(a));

    circuit.add_to_board().unwrap();

    assert_eq!(board.len(), 1);
    let registered = &board.circuits()[0];
    assert_eq!(registered.ground, Some(a));
    assert_eq!(registered.nodes, nodes);
}

#[test]
fn end_to_end_immediate_registration_fails() {
    let mut board = Breadboard::new("bench");
    let mut circuit = Circuit::new(&mut board);

    assert_eq!(circuit.add_to_board(), Err(CircuitError::IncompleteCircuit));

    assert!(board.is_empty());
}

#[test]
fn board_errors_convert_into_core_error() {
    fn register(circuit: &mut Circuit<'_, SpyBoard>) -> bb_core::BbResult<()> {
        circuit.add_to_board()?;
        Ok(())
    }

    let mut board = SpyBoard::default();
    let mut circuit = Circuit::new(&mut board);
    let err = register(&mut circuit).unwrap_err();
    assert!(matches!(err, bb_core::BbError::Invariant { .. }));
}

mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    proptest! {
        #[test]
        fn n_distinct_positions_make_n_nodes(
            cells in prop::collection::hash_set((-20_i32..20, -20_i32..20), 0..60)
        ) {
            let mut board = SpyBoard::default();
            let mut circuit = Circuit::new(&mut board);
            let ids: HashSet<_> = cells
                .iter()
                .map(|&cell| circuit.add_node(Position::from(cell)))
                .collect();

            prop_assert_eq!(ids.len(), cells.len());
            prop_assert_eq!(circuit.node_count(), cells.len());
        }

        #[test]
        fn grounding_removes_at_most_one_node(
            cells in prop::collection::vec((0_i32..4, 0_i32..4), 1..30),
            ground in (0_i32..4, 0_i32..4),
        ) {
            let mut board = SpyBoard::default();
            let mut circuit = Circuit::new(&mut board);
            for &cell in &cells {
                circuit.add_node(Position::from(cell));
            }
            let before = circuit.node_count();
            let hits = cells.iter().filter(|&&c| c == ground).count();

            let absorbed = circuit.set_ground(Position::from(ground)).unwrap();

            prop_assert_eq!(absorbed.is_some(), hits > 0);
            prop_assert_eq!(circuit.node_count(), before - usize::from(hits > 0));
            prop_assert_eq!(circuit.ground(), Some(Position::from(ground)));
        }
    }
}
