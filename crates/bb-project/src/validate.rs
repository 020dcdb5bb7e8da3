//! Board description validation.

use std::collections::HashSet;

use bb_circuit::CircuitConfig;
use bb_core::Position;

use crate::schema::{CircuitDef, Project};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Circuit {id} has no ground/reference node")]
    MissingGround { id: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    validate_project_with(project, None)
}

/// Validate as `validate_project`, but judge every circuit by `config` when
/// given instead of its own configuration.
pub fn validate_project_with(
    project: &Project,
    config: Option<CircuitConfig>,
) -> Result<(), ValidationError> {
    if project.version == 0 || project.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    let mut circuit_ids = HashSet::new();
    for circuit in &project.circuits {
        if !circuit_ids.insert(&circuit.id) {
            return Err(ValidationError::DuplicateId {
                id: circuit.id.clone(),
                context: "circuits".to_string(),
            });
        }
        validate_circuit(circuit, config.or(circuit.config).unwrap_or_default())?;
    }

    Ok(())
}

fn validate_circuit(circuit: &CircuitDef, config: CircuitConfig) -> Result<(), ValidationError> {
    for node in &circuit.nodes {
        parse_position(&format!("circuits.{}.nodes", circuit.id), node)?;
    }

    match &circuit.ground {
        Some(ground) => {
            parse_position(&format!("circuits.{}.ground", circuit.id), ground)?;
        }
        None if config.is_strict() => {
            return Err(ValidationError::MissingGround {
                id: circuit.id.clone(),
            });
        }
        None => {}
    }

    Ok(())
}

pub(crate) fn parse_position(field: &str, raw: &str) -> Result<Position, ValidationError> {
    raw.parse().map_err(|err: bb_core::BbError| ValidationError::InvalidValue {
        field: field.to_string(),
        value: raw.to_string(),
        reason: err.to_string(),
    })
}
