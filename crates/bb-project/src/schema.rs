//! Board description schema.

use bb_circuit::CircuitConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub circuits: Vec<CircuitDef>,
}

/// One circuit, listed by the positions of its electrical nodes.
///
/// Positions are kept as strings (`"<column>,<row>"`) so a malformed entry
/// surfaces as a validation error naming the circuit instead of a bare
/// deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CircuitDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ground: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<CircuitConfig>,
}

impl CircuitDef {
    /// Name shown to users: the explicit name, else the id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}
