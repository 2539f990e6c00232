use crate::search::{HeuristicValue, NodeId};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;

/// Min-priority open list of search nodes. Entries are ordered by key, and
/// entries with equal keys by insertion order, so the pop order is fully
/// determined by the push order. The same state may be pushed any number of
/// times; each push gets its own entry.
#[derive(Debug)]
pub struct PriorityFrontier {
    queue: PriorityQueue<(u64, NodeId), Reverse<(HeuristicValue, u64)>>,
    next_sequence: u64,
}

impl Default for PriorityFrontier {
    fn default() -> Self {
        Self::new()
    }
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, node_id: NodeId, key: HeuristicValue) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.queue.push((sequence, node_id), Reverse((key, sequence)));
    }

    /// Remove the entry with the smallest key, oldest first among ties.
    pub fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop().map(|((_, node_id), _)| node_id)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
