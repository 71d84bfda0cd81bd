//! Main implementation of the search loop
//!
//! This module contains the solver that drives every strategy: it pops one
//! node at a time, checks the stop criteria, records bookkeeping, expands the
//! node and feeds the selected children back into the frontier. Iterative
//! deepening wraps the same loop in an outer loop over depth caps.

use std::rc::Rc;
use std::time::Instant;

use log::{debug, info, warn};

use crate::{
    clock::{Clock, SystemClock},
    config::{Bookkeeping, SolverConfig},
    frontier::{Frontier, StackFrontier},
    node::{NodeRef, SearchNode},
    policy::selection::{PositionalOrder, SelectionPolicy},
    report::SearchReport,
    state::PuzzleState,
    stats::{SearchStatistics, Termination},
    Result,
};

/// Mutable bookkeeping of a run
struct RunState<S: PuzzleState> {
    best: Option<NodeRef<S>>,
    best_progress: u32,
    expanded_nodes: usize,
    peak_frontier: usize,
    depth_limited: bool,
}

impl<S: PuzzleState> RunState<S> {
    fn new() -> Self {
        RunState {
            best: None,
            best_progress: 0,
            expanded_nodes: 0,
            peak_frontier: 0,
            depth_limited: false,
        }
    }
}

/// The search solver
///
/// Owns the start state, the frontier, the selection policy and the clock.
/// The defaults are a stack frontier with positional ordering, i.e. plain
/// depth-first search.
pub struct Solver<S: PuzzleState> {
    /// Start state of every run
    initial: S,

    /// Configuration for the search
    config: SolverConfig,

    /// Pending nodes
    frontier: Box<dyn Frontier<S>>,

    /// Policy applied to every expansion batch
    selection_policy: Box<dyn SelectionPolicy<S>>,

    /// Time source for the deadline
    clock: Box<dyn Clock>,

    /// Bookkeeping of the current search
    run: RunState<S>,

    /// Statistics of the last search
    statistics: SearchStatistics,
}

impl<S: PuzzleState + 'static> Solver<S> {
    /// Creates a depth-first solver for the given start state
    pub fn new(initial: S, config: SolverConfig) -> Self {
        Solver {
            initial,
            config,
            frontier: Box::new(StackFrontier::new()),
            selection_policy: Box::new(PositionalOrder::new()),
            clock: Box::new(SystemClock),
            run: RunState::new(),
            statistics: SearchStatistics::new(),
        }
    }

    /// Sets the frontier to use
    pub fn with_frontier<F: Frontier<S> + 'static>(mut self, frontier: F) -> Self {
        self.frontier = Box::new(frontier);
        self
    }

    /// Sets the selection policy to use
    pub fn with_selection_policy<P: SelectionPolicy<S> + 'static>(mut self, policy: P) -> Self {
        self.selection_policy = Box::new(policy);
        self
    }

    /// Sets the time source used for the deadline
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Returns the configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Returns the statistics of the last search
    pub fn get_statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Runs the search and reports the best result found
    ///
    /// Every call starts from the initial state with fresh bookkeeping.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidConfiguration`](crate::SearchError::InvalidConfiguration)
    /// for an unusable configuration.
    pub fn search(&mut self) -> Result<SearchReport<S>> {
        self.config.validate()?;

        self.run = RunState::new();
        self.statistics = SearchStatistics::new();

        let start_time = self.clock.now();
        // A limit too large to represent as an instant means no deadline.
        let deadline = self
            .config
            .time_limit
            .and_then(|limit| start_time.checked_add(limit));

        info!(
            "Starting search: frontier={}, selection={}, time_limit={:?}, deepening_limit={:?}",
            self.frontier.name(),
            self.selection_policy.name(),
            self.config.time_limit,
            self.config.deepening_limit
        );

        let termination = match self.config.deepening_limit {
            Some(limit) => self.deepen(deadline, limit)?,
            None => {
                self.statistics.depth_iterations = 1;
                self.run_once(deadline, None)?
            }
        };
        self.frontier.clear();

        self.statistics.expanded_nodes = self.run.expanded_nodes;
        self.statistics.peak_frontier = self.run.peak_frontier;
        self.statistics.elapsed = self.clock.now().saturating_duration_since(start_time);
        self.statistics.termination = termination;

        info!(
            "Search {} after {} expanded nodes (peak frontier {})",
            termination, self.statistics.expanded_nodes, self.statistics.peak_frontier
        );

        Ok(SearchReport::new(self.run.best.as_deref(), self.statistics.clone()))
    }

    /// Repeats the run with depth caps `1..=limit`
    fn deepen(&mut self, deadline: Option<Instant>, limit: u32) -> Result<Termination> {
        let mut termination = Termination::DepthLimited;

        for cap in 1..=limit {
            self.frontier.clear();
            self.run.depth_limited = false;
            if self.config.bookkeeping == Bookkeeping::PerIteration {
                self.run = RunState::new();
            }

            debug!("Deepening iteration with depth cap {}", cap);
            self.statistics.depth_iterations = cap;
            termination = self.run_once(deadline, Some(cap))?;

            if !self.run.depth_limited {
                break;
            }
        }

        Ok(termination)
    }

    /// One pass of the search loop from the root
    fn run_once(
        &mut self,
        deadline: Option<Instant>,
        depth_cap: Option<u32>,
    ) -> Result<Termination> {
        self.frontier.push(Rc::new(SearchNode::root(self.initial.clone())));

        while !self.frontier.is_empty() {
            let node = self.frontier.pop()?;

            if let Some(termination) = self.check_stop(&node, deadline, depth_cap) {
                return Ok(termination);
            }

            if self.record(&node) {
                return Ok(Termination::Completed);
            }

            let children: Vec<NodeRef<S>> = node
                .state
                .successors()
                .into_iter()
                .map(|(state, consumed)| Rc::new(SearchNode::child(&node, state, consumed)))
                .collect();

            for child in self.selection_policy.select(children) {
                self.frontier.push(child);
            }
        }

        Ok(Termination::Completed)
    }

    /// Stop criteria, in priority order: deadline, frontier ceiling, depth cap
    fn check_stop(
        &mut self,
        node: &SearchNode<S>,
        deadline: Option<Instant>,
        depth_cap: Option<u32>,
    ) -> Option<Termination> {
        if let Some(deadline) = deadline {
            if self.clock.now() > deadline {
                warn!("Search stopped early due to time limit");
                return Some(Termination::TimedOut);
            }
        }

        if self.frontier.len() > self.config.frontier_ceiling {
            warn!(
                "Frontier size {} exceeded ceiling {}",
                self.frontier.len(),
                self.config.frontier_ceiling
            );
            return Some(Termination::OutOfMemory);
        }

        if let Some(cap) = depth_cap {
            if node.progress > cap {
                self.run.depth_limited = true;
                return Some(Termination::DepthLimited);
            }
        }

        None
    }

    /// Updates counters and the best node; returns true when `node` is a goal
    fn record(&mut self, node: &NodeRef<S>) -> bool {
        self.run.expanded_nodes += 1;
        self.run.peak_frontier = self.run.peak_frontier.max(self.frontier.len());

        if node.state.is_goal() {
            debug!("Goal reached at progress {}", node.progress);
            self.run.best_progress = node.progress;
            self.run.best = Some(Rc::clone(node));
            return true;
        }

        if node.progress > self.run.best_progress {
            debug!("New best node at progress {}", node.progress);
            self.run.best_progress = node.progress;
            self.run.best = Some(Rc::clone(node));
        }

        false
    }
}
