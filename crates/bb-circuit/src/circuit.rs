//! Node accumulation, ground resolution and board registration.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use bb_core::{IdAllocator, NodeId, Position};

use crate::board::{Board, CircuitRecord};
use crate::config::{CircuitConfig, NodeMerging, ValidationPolicy};
use crate::error::{CircuitError, CircuitResult};
use crate::node::Node;
use crate::report::{Reporter, TracingReporter};

/// One circuit under construction, bound to the board it will be placed on.
///
/// Add nodes with `add_node`, designate the reference point with
/// `set_ground`, then hand the result to the board with `add_to_board`.
/// The ground position is kept apart from `nodes`: designating it removes
/// the first node created at that position.
pub struct Circuit<'b, B: Board + ?Sized> {
    board: Option<&'b mut B>,
    name: Option<String>,
    /// Keyed by id; ids are allocated monotonically so iteration follows
    /// insertion order.
    nodes: BTreeMap<NodeId, Node>,
    /// Canonical position -> node. Only maintained with `NodeMerging::ByPosition`.
    by_position: HashMap<String, NodeId>,
    ground: Option<Position>,
    ids: IdAllocator,
    config: CircuitConfig,
    reporter: Box<dyn Reporter>,
}

impl<'b, B: Board + ?Sized> Circuit<'b, B> {
    /// Bind a new, empty circuit to `board` with the default configuration.
    pub fn new(board: &'b mut B) -> Self {
        Self::bind(Some(board), CircuitConfig::default(), Box::new(TracingReporter))
    }

    /// Bind a new circuit with an explicit configuration and reporter.
    ///
    /// A missing board is reported. Under the strict policy it is also
    /// returned as `MissingCollaborator`; under the lenient policy the
    /// circuit is built anyway and only registration will fail.
    pub fn with_config(
        board: Option<&'b mut B>,
        config: CircuitConfig,
        reporter: impl Reporter + 'static,
    ) -> CircuitResult<Self> {
        let circuit = Self::bind(board, config, Box::new(reporter));
        if circuit.board.is_none() {
            circuit.flag(CircuitError::MissingCollaborator)?;
        }
        Ok(circuit)
    }

    fn bind(board: Option<&'b mut B>, config: CircuitConfig, reporter: Box<dyn Reporter>) -> Self {
        Self {
            board,
            name: None,
            nodes: BTreeMap::new(),
            by_position: HashMap::new(),
            ground: None,
            ids: IdAllocator::new(),
            config,
            reporter,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn config(&self) -> &CircuitConfig {
        &self.config
    }

    /// Add a node at `position` and return its id.
    ///
    /// With `NodeMerging::Distinct` every call creates a fresh node, even for
    /// a position already present. With `NodeMerging::ByPosition` a repeated
    /// position returns the id of the node created for it earlier.
    pub fn add_node(&mut self, position: Position) -> NodeId {
        if self.config.merging == NodeMerging::ByPosition {
            if let Some(&id) = self.by_position.get(&position.canonical()) {
                tracing::debug!(node = %id, %position, "position already has a node");
                return id;
            }
        }

        let id = self.ids.fresh();
        if self.config.merging == NodeMerging::ByPosition {
            self.by_position.insert(position.canonical(), id);
        }
        self.nodes.insert(id, Node::new(id, position));
        tracing::debug!(node = %id, %position, "added node");
        id
    }

    /// Designate `position` as the circuit's ground.
    ///
    /// The first node (in insertion order) sitting on `position` is removed
    /// from the node set and returned; later duplicates are left in place.
    /// Grounding a position that was never added is allowed.
    ///
    /// A second call is a `DuplicateGround` error. Under the lenient policy it
    /// is reported and the new ground replaces the old one.
    pub fn set_ground(&mut self, position: Position) -> CircuitResult<Option<Node>> {
        if let Some(existing) = self.ground {
            self.flag(CircuitError::DuplicateGround {
                existing,
                requested: position,
            })?;
        }

        self.ground = Some(position);

        let absorbed = self
            .first_node_at(&position)
            .and_then(|id| self.nodes.remove(&id));
        if absorbed.is_some() {
            self.by_position.remove(&position.canonical());
        }

        tracing::debug!(
            %position,
            absorbed = ?absorbed.as_ref().map(|n| n.id),
            "set ground"
        );
        Ok(absorbed)
    }

    /// Register this circuit with its board.
    ///
    /// Fails with `MissingBoard` if no board is bound, and with
    /// `IncompleteCircuit` if no ground has been set (strict policy only).
    /// On failure the board is not touched.
    pub fn add_to_board(&mut self) -> CircuitResult<()> {
        if self.board.is_none() {
            let err = CircuitError::MissingBoard;
            self.reporter.report(&err);
            return Err(err);
        }

        if self.ground.is_none() {
            self.flag(CircuitError::IncompleteCircuit)?;
        }

        let record = self.record();
        if let Some(board) = self.board.as_deref_mut() {
            board.add_circuit(record);
        }
        Ok(())
    }

    /// Snapshot of the circuit as it would be handed to the board.
    pub fn record(&self) -> CircuitRecord {
        CircuitRecord {
            name: self.name.clone(),
            nodes: self.nodes.values().cloned().collect(),
            ground: self.ground,
        }
    }

    /// Non-ground nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get a node by ID (returns None if unknown or absorbed by the ground).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn ground(&self) -> Option<Position> {
        self.ground
    }

    pub fn is_grounded(&self) -> bool {
        self.ground.is_some()
    }

    pub fn has_board(&self) -> bool {
        self.board.is_some()
    }

    /// True if some non-ground node sits on `position`.
    pub fn contains_position(&self, position: &Position) -> bool {
        self.first_node_at(position).is_some()
    }

    fn first_node_at(&self, position: &Position) -> Option<NodeId> {
        match self.config.merging {
            NodeMerging::ByPosition => self.by_position.get(&position.canonical()).copied(),
            NodeMerging::Distinct => self
                .nodes
                .values()
                .find(|node| node.is_at(position))
                .map(|node| node.id),
        }
    }

    /// Report `err`, then fail under the strict policy.
    fn flag(&self, err: CircuitError) -> CircuitResult<()> {
        self.reporter.report(&err);
        match self.config.policy {
            ValidationPolicy::Strict => Err(err),
            ValidationPolicy::Lenient => Ok(()),
        }
    }
}

impl<B: Board + ?Sized> fmt::Debug for Circuit<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Circuit")
            .field("name", &self.name)
            .field("has_board", &self.board.is_some())
            .field("nodes", &self.nodes)
            .field("ground", &self.ground)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
