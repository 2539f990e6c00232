use crate::search::HeuristicValue;
use std::time::{Duration, Instant};
use tracing::info;

/// Node counters of a search engine. The evaluated and generated counters are
/// kept for the lifetime of the engine, the remaining fields describe the
/// most recent search only. None of them influence the search itself.
#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of legal move enumerations, over all searches
    evaluated_nodes: u64,
    /// Number of successor states materialised, over all searches
    generated_nodes: u64,
    /// Number of nodes expanded in the current search
    expanded_nodes: u64,
    /// Number of heuristic evaluations in the current search
    heuristic_evaluations: u64,
    /// Number of frontier entries or successors discarded as already seen
    pruned_nodes: u64,
    /// Best heuristic value found so far in the current search
    best_heuristic_value: Option<HeuristicValue>,
    /// Time when the current search started
    search_start_time: Instant,
    /// Wall-clock time of the last finished search
    search_duration: Duration,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        Self {
            evaluated_nodes: 0,
            generated_nodes: 0,
            expanded_nodes: 0,
            heuristic_evaluations: 0,
            pruned_nodes: 0,
            best_heuristic_value: None,
            search_start_time: Instant::now(),
            search_duration: Duration::ZERO,
            last_log_time: Instant::now(),
        }
    }

    /// Reset the per-search fields. The node counters keep accumulating.
    pub fn start_search(&mut self) {
        info!("starting search");
        self.expanded_nodes = 0;
        self.heuristic_evaluations = 0;
        self.pruned_nodes = 0;
        self.best_heuristic_value = None;
        self.search_start_time = Instant::now();
        self.last_log_time = Instant::now();
    }

    pub fn register_heuristic_value(&mut self, heuristic_value: HeuristicValue) {
        self.heuristic_evaluations += 1;
        if self
            .best_heuristic_value
            .map_or(true, |best| heuristic_value < best)
        {
            self.best_heuristic_value = Some(heuristic_value);
            info!(best_heuristic_value = heuristic_value);
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    pub fn increment_evaluated_nodes(&mut self) {
        self.evaluated_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes as u64;
        self.log_if_needed();
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_pruned_nodes(&mut self) {
        self.pruned_nodes += 1;
    }

    pub fn nodes_evaluated(&self) -> u64 {
        self.evaluated_nodes
    }

    pub fn nodes_generated(&self) -> u64 {
        self.generated_nodes
    }

    pub fn expanded_nodes(&self) -> u64 {
        self.expanded_nodes
    }

    pub fn heuristic_evaluations(&self) -> u64 {
        self.heuristic_evaluations
    }

    pub fn pruned_nodes(&self) -> u64 {
        self.pruned_nodes
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            evaluated_nodes = self.evaluated_nodes,
            generated_nodes = self.generated_nodes,
            expanded_nodes = self.expanded_nodes,
            heuristic_evaluations = self.heuristic_evaluations,
            pruned_nodes = self.pruned_nodes,
            best_heuristic_value = self.best_heuristic_value,
        );
    }

    pub fn finalise_search(&mut self) {
        self.search_duration = self.search_start_time.elapsed();
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_duration.as_secs_f64());
    }

    pub fn search_duration(&self) -> Duration {
        self.search_duration
    }
}
