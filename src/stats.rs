//! Statistics collection for searches
//!
//! This module provides structures for collecting and reporting statistics
//! about a search run. None of them influence control flow.

use std::fmt;
use std::time::Duration;

/// Why a search run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The goal was reached or the frontier was exhausted
    Completed,

    /// The deadline passed
    TimedOut,

    /// The frontier grew beyond its ceiling
    OutOfMemory,

    /// A node deeper than the depth cap was popped
    ///
    /// Only iterative deepening sets a cap. A deepening search that ends in
    /// this state used up every cap up to its limit.
    DepthLimited,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Termination::Completed => "completed",
            Termination::TimedOut => "timed out",
            Termination::OutOfMemory => "out of memory",
            Termination::DepthLimited => "depth limited",
        };
        f.write_str(label)
    }
}

/// Statistics collected during a search
#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of nodes popped and expanded
    pub expanded_nodes: usize,

    /// Largest frontier observed right after a pop
    pub peak_frontier: usize,

    /// Total time spent searching
    pub elapsed: Duration,

    /// Number of depth iterations run (1 without iterative deepening)
    pub depth_iterations: u32,

    /// How the search ended
    pub termination: Termination,
}

impl SearchStatistics {
    /// Creates a new, empty statistics object
    pub fn new() -> Self {
        SearchStatistics {
            expanded_nodes: 0,
            peak_frontier: 0,
            elapsed: Duration::ZERO,
            depth_iterations: 0,
            termination: Termination::Completed,
        }
    }

    /// Elapsed time in minutes
    pub fn elapsed_minutes(&self) -> f64 {
        self.elapsed.as_secs_f64() / 60.0
    }

    /// Returns the number of expanded nodes per second
    pub fn nodes_per_second(&self) -> f64 {
        if self.elapsed.as_secs_f64() <= 0.0 {
            return 0.0;
        }
        self.expanded_nodes as f64 / self.elapsed.as_secs_f64()
    }

    /// Returns a summary of the statistics as a string
    pub fn summary(&self) -> String {
        format!(
            "Search Statistics:\n\
             - Runtime: {:.3} minutes\n\
             - Expanded nodes: {}\n\
             - Max nodes stored in the frontier: {}\n\
             - Depth iterations: {}\n\
             - Nodes per second: {:.1}\n\
             - Termination: {}",
            self.elapsed_minutes(),
            self.expanded_nodes,
            self.peak_frontier,
            self.depth_iterations,
            self.nodes_per_second(),
            self.termination
        )
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
