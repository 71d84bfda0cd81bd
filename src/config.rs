//! Configuration options for the solver
//!
//! This module defines the parameters that bound a search: the deadline, the
//! frontier ceiling and the iterative-deepening limit.

use std::time::Duration;

use crate::{Result, SearchError};

/// Frontier size that keeps a full peg solitaire search within roughly 2 GB
pub const DEFAULT_FRONTIER_CEILING: usize = 3_231_848;

/// How bookkeeping behaves across iterative-deepening iterations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bookkeeping {
    /// Best result, expanded-node count and peak frontier carry over from one
    /// depth iteration to the next
    ///
    /// A node found at a shallow cap stays the best result unless a later
    /// iteration beats its progress, and the counters report the total work
    /// of the whole deepening run.
    #[default]
    Cumulative,

    /// Every depth iteration starts with fresh bookkeeping
    ///
    /// The report reflects the last iteration only.
    PerIteration,
}

/// Configuration for the solver
///
/// Use the builder methods to create a customized configuration.
///
/// # Example
///
/// ```
/// use pegsearch::{Bookkeeping, SolverConfig};
/// use std::time::Duration;
///
/// let config = SolverConfig::default()
///     .with_time_limit(Duration::from_secs(60 * 60))
///     .with_deepening_limit(33)
///     .with_bookkeeping(Bookkeeping::PerIteration);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Maximum wall-clock time for one search
    ///
    /// The deadline is fixed when the search starts and checked once per
    /// popped node. `None` searches without a deadline, and so does a limit
    /// too large to add to the start instant.
    pub time_limit: Option<Duration>,

    /// Largest frontier the search may hold before it gives up
    ///
    /// Exceeding it ends the search as out of memory.
    pub frontier_ceiling: usize,

    /// Maximum depth cap for iterative deepening
    ///
    /// If set, the search is repeated with depth caps `1..=limit`.
    pub deepening_limit: Option<u32>,

    /// Bookkeeping behaviour across deepening iterations
    pub bookkeeping: Bookkeeping,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            time_limit: None,
            frontier_ceiling: DEFAULT_FRONTIER_CEILING,
            deepening_limit: None,
            bookkeeping: Bookkeeping::Cumulative,
        }
    }
}

impl SolverConfig {
    /// Sets the maximum time to run the search
    pub fn with_time_limit(mut self, duration: Duration) -> Self {
        self.time_limit = Some(duration);
        self
    }

    /// Sets the frontier size ceiling
    pub fn with_frontier_ceiling(mut self, ceiling: usize) -> Self {
        self.frontier_ceiling = ceiling;
        self
    }

    /// Enables iterative deepening up to the given depth cap
    pub fn with_deepening_limit(mut self, max_depth: u32) -> Self {
        self.deepening_limit = Some(max_depth);
        self
    }

    /// Sets the bookkeeping behaviour across deepening iterations
    pub fn with_bookkeeping(mut self, bookkeeping: Bookkeeping) -> Self {
        self.bookkeeping = bookkeeping;
        self
    }

    /// Checks the configuration for values the solver cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.frontier_ceiling == 0 {
            return Err(SearchError::InvalidConfiguration(
                "frontier ceiling must be positive".to_string(),
            ));
        }
        if self.deepening_limit == Some(0) {
            return Err(SearchError::InvalidConfiguration(
                "deepening limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
