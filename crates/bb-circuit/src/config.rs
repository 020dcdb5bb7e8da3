//! Circuit construction settings.

/// What happens when a usage error is detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ValidationPolicy {
    /// Report the error and abort the operation.
    #[default]
    Strict,
    /// Report the error and carry on with the operation.
    Lenient,
}

/// How repeated positions passed to `add_node` are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum NodeMerging {
    /// Every call creates a new node, even for a repeated position.
    #[default]
    Distinct,
    /// A repeated position resolves to the node already created for it.
    ByPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CircuitConfig {
    pub policy: ValidationPolicy,
    pub merging: NodeMerging,
}

impl CircuitConfig {
    pub fn strict() -> Self {
        Self::default()
    }

    pub fn lenient() -> Self {
        Self {
            policy: ValidationPolicy::Lenient,
            ..Self::default()
        }
    }

    pub fn with_merging(mut self, merging: NodeMerging) -> Self {
        self.merging = merging;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.policy == ValidationPolicy::Strict
    }
}
