//! Node/flow context resolution collaborator.

use std::collections::HashMap;

use crate::types::NodeContext;

/// Resolves a node id to its context. Supplied by the host runtime.
///
/// A pure read that fails soft: unknown ids yield `None`, never an error.
/// Callers treat `None` as "context unknown" and degrade dependent fields.
pub trait NodeLookup: Send + Sync {
  fn resolve_node(&self, node_id: &str) -> Option<NodeContext>;
}

/// In-memory lookup backed by a map. Used by hosts that snapshot their flow
/// configuration, and by this crate's tests.
#[derive(Debug, Default, Clone)]
pub struct MapNodeLookup {
  nodes: HashMap<String, NodeContext>,
}

impl MapNodeLookup {
  pub fn new() -> Self {
    Self {
      nodes: HashMap::new(),
    }
  }

  /// Registers a node context under its own id.
  pub fn insert(&mut self, context: NodeContext) {
    self.nodes.insert(context.id.clone(), context);
  }
}

impl NodeLookup for MapNodeLookup {
  fn resolve_node(&self, node_id: &str) -> Option<NodeContext> {
    self.nodes.get(node_id).cloned()
  }
}

/// Lookup that resolves nothing, for hosts without flow introspection.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLookup;

impl NodeLookup for NoLookup {
  fn resolve_node(&self, _node_id: &str) -> Option<NodeContext> {
    None
  }
}
