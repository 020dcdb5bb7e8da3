//! Replay a board description onto a `Breadboard`.

use bb_circuit::{Breadboard, Circuit, CircuitConfig, TracingReporter};

use crate::schema::{CircuitDef, Project};
use crate::validate::{parse_position, validate_project_with};
use crate::{ProjectError, ProjectResult};

/// Build a board by running every circuit of `project` through the circuit
/// API: nodes in file order, then the ground, then registration.
///
/// `config` overrides the per-circuit configuration when given, for
/// validation as well as for the replay itself.
pub fn build_board(project: &Project, config: Option<CircuitConfig>) -> ProjectResult<Breadboard> {
    validate_project_with(project, config)?;

    let mut board = Breadboard::new(project.name.clone());
    for def in &project.circuits {
        let config = config.or(def.config).unwrap_or_default();
        place_circuit(&mut board, def, config)?;
    }

    tracing::info!(
        board = %board.name(),
        circuits = board.len(),
        "board built"
    );
    Ok(board)
}

fn place_circuit(board: &mut Breadboard, def: &CircuitDef, config: CircuitConfig) -> ProjectResult<()> {
    let circuit_err = |source| ProjectError::Circuit {
        id: def.id.clone(),
        source,
    };

    let mut circuit =
        Circuit::with_config(Some(board), config, TracingReporter).map_err(circuit_err)?;
    circuit.set_name(def.display_name());

    for raw in &def.nodes {
        let position = parse_position(&format!("circuits.{}.nodes", def.id), raw)?;
        circuit.add_node(position);
    }

    if let Some(raw) = &def.ground {
        let position = parse_position(&format!("circuits.{}.ground", def.id), raw)?;
        circuit.set_ground(position).map_err(circuit_err)?;
    }

    circuit.add_to_board().map_err(circuit_err)?;
    Ok(())
}
