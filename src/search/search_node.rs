use crate::search::{HeuristicValue, Move, NodeId, NO_NODE};

/// A [`SearchNode`] is one step of a path. Nodes form a tree: each frontier
/// entry refers to its own node, and nodes sharing a path prefix share the
/// parent nodes of that prefix.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Unique identifier of the node
    node_id: NodeId,
    /// Move that led to this node, `None` for the root
    transition: Option<Move>,
    /// Parent node
    parent_id: NodeId,
    /// G-value of the node, i.e. the number of moves from the root
    g: HeuristicValue,
}

impl SearchNode {
    /// Create the root node of a search space. For non-root nodes see
    /// [`SearchNode::new_with_parent`].
    pub fn new_without_parent(node_id: NodeId) -> Self {
        Self {
            node_id,
            transition: None,
            parent_id: NO_NODE,
            g: 0,
        }
    }

    pub fn new_with_parent(node_id: NodeId, parent: &SearchNode, transition: Move) -> Self {
        Self {
            node_id,
            transition: Some(transition),
            parent_id: parent.node_id,
            g: parent.g + 1,
        }
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    pub fn get_transition(&self) -> Option<Move> {
        self.transition
    }

    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }
}
