use crate::search::{Move, Plan, SearchNode, State};
use segvec::{Linear, SegVec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// A [`SearchSpace`] stores the path tree of a single search. Every insertion
/// creates a fresh node, so one state may appear under several nodes when the
/// search engine allows duplicate frontier entries.
#[derive(Debug)]
pub struct SearchSpace {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode, Linear>,
    states: SegVec<State, Linear>,
}

impl SearchSpace {
    pub fn new(initial_state: State) -> Self {
        let mut nodes = SegVec::new();
        let mut states = SegVec::new();

        let root_node_id = NodeId(0);
        nodes.push(SearchNode::new_without_parent(root_node_id));
        states.push(initial_state);

        Self {
            root_node_id,
            nodes,
            states,
        }
    }

    /// Record that `state` is reached from `parent_id` via `transition`.
    pub fn insert_node(&mut self, state: State, transition: Move, parent_id: NodeId) -> NodeId {
        let node_id = NodeId(self.nodes.len());
        let node = SearchNode::new_with_parent(node_id, self.get_node(parent_id), transition);
        self.nodes.push(node);
        self.states.push(state);
        node_id
    }

    /// Walk the parents of `goal_id` back to the root.
    pub fn extract_plan(&self, goal_id: NodeId) -> Plan {
        let mut steps = vec![];
        let mut current_node = self.get_node(goal_id);
        while let Some(transition) = current_node.get_transition() {
            steps.push(transition);
            current_node = self.get_node(current_node.get_parent_id());
        }
        steps.reverse();
        Plan::new(steps)
    }

    #[inline(always)]
    pub fn get_root_id(&self) -> NodeId {
        self.root_node_id
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &State {
        self.states.get(node_id.id()).expect("Invalid node id")
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
