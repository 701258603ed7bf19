//! Jump Point Search driver.
//!
//! [`JumpSearch`] is an explicit state machine: each [`step`](JumpSearch::step)
//! pops the node with the lowest `f`, finishes if it is the goal, and
//! otherwise pushes the jump points found in its pruned directions. Callers
//! that need cancellation or a time budget can check between steps;
//! [`find_path`] simply runs the machine to completion.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use jumpgrid_core::Point;
use log::{debug, trace};

use crate::jump::jump;
use crate::node::{Node, NodeArena};
use crate::open::OpenSet;
use crate::prune;
use crate::traits::Walkable;

/// What to do with a successor that repeats an already queued state.
///
/// A node's expansion depends only on its position, the direction it was
/// reached from, and its forced-neighbour direction. Two nodes sharing that
/// triple expand into the same subtree, shifted by their cost difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DuplicatePolicy {
    /// Push every successor unconditionally.
    ///
    /// On some grids the pruning rules revisit the same states forever, so
    /// the open set never drains. Pair this with an expansion limit.
    KeepAll,
    /// Drop a successor when a node with the same state was already queued
    /// at an equal or lower `g`. Paths are identical to `KeepAll` whenever
    /// that terminates, and the search always terminates.
    #[default]
    SkipRepeatedState,
}

/// Tuning knobs for a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SearchConfig {
    /// Fail instead of expanding a node once this many have been expanded.
    /// Reaching the goal is always allowed. `None` is unlimited.
    pub expansion_limit: Option<usize>,
    pub duplicates: DuplicatePolicy,
}

impl SearchConfig {
    /// Default configuration: unlimited expansions, repeated states skipped.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expansion_limit(mut self, limit: usize) -> Self {
        self.expansion_limit = Some(limit);
        self
    }

    pub fn with_duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }
}

/// Where a [`JumpSearch`] currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// The open set still holds nodes and the goal has not been popped.
    Running,
    /// The goal was popped; the path is available.
    Succeeded,
    /// No path: the open set drained, the expansion limit was hit, or an
    /// endpoint is not walkable.
    Failed,
}

impl SearchState {
    /// Whether the search has finished, successfully or not.
    #[inline]
    pub fn is_done(self) -> bool {
        !matches!(self, SearchState::Running)
    }
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes pushed to the open set, the start node included.
    pub created: usize,
    /// Nodes popped and expanded (the goal pop is not an expansion).
    pub expanded: usize,
    /// Successors dropped by [`DuplicatePolicy::SkipRepeatedState`].
    pub skipped: usize,
    /// Largest size the open set reached.
    pub peak_open: usize,
}

/// A single Jump Point Search from `start` to `goal` over a [`Walkable`] map.
///
/// Every search owns its node arena and open set, so independent searches
/// may run concurrently over one shared map.
pub struct JumpSearch<'a, W: Walkable + ?Sized> {
    map: &'a W,
    start: Point,
    goal: Point,
    config: SearchConfig,
    arena: NodeArena,
    open: OpenSet,
    best_g: HashMap<(Point, Point, Point), i32>,
    state: SearchState,
    path: Vec<Point>,
    stats: SearchStats,
}

impl<'a, W: Walkable + ?Sized> JumpSearch<'a, W> {
    /// Prepare a search with the default [`SearchConfig`].
    pub fn new(map: &'a W, start: Point, goal: Point) -> Self {
        Self::with_config(map, start, goal, SearchConfig::default())
    }

    /// Prepare a search. A blocked or out-of-range endpoint fails
    /// immediately and `start == goal` succeeds immediately.
    pub fn with_config(map: &'a W, start: Point, goal: Point, config: SearchConfig) -> Self {
        let mut search = Self {
            map,
            start,
            goal,
            config,
            arena: NodeArena::default(),
            open: OpenSet::default(),
            best_g: HashMap::new(),
            state: SearchState::Running,
            path: Vec::new(),
            stats: SearchStats::default(),
        };

        if !map.is_walkable(start) || !map.is_walkable(goal) {
            debug!("jps {start} -> {goal}: endpoint not walkable");
            search.state = SearchState::Failed;
        } else if start == goal {
            search.path.push(start);
            search.state = SearchState::Succeeded;
        } else {
            search.enqueue(Node::start(start, goal));
        }
        search
    }

    /// Advance the search by one pop/expand cycle and return the new state.
    ///
    /// Once the search is done, further calls return the same final state.
    pub fn step(&mut self) -> SearchState {
        if self.state.is_done() {
            return self.state;
        }

        let Some(id) = self.open.pop() else {
            debug!(
                "jps {} -> {}: no path after {} expansions",
                self.start, self.goal, self.stats.expanded
            );
            return self.finish(SearchState::Failed);
        };

        let node = *self.arena.get(id);
        if node.pos == self.goal {
            self.path = self.arena.path_to(id);
            debug!(
                "jps {} -> {}: {} jump points, cost {}, {} expansions",
                self.start,
                self.goal,
                self.path.len(),
                node.g,
                self.stats.expanded
            );
            return self.finish(SearchState::Succeeded);
        }

        // The goal pop above is not an expansion, so only non-goal nodes
        // count against the limit. The popped node is dropped.
        if let Some(limit) = self.config.expansion_limit {
            if self.stats.expanded >= limit {
                debug!(
                    "jps {} -> {}: expansion limit {limit} reached",
                    self.start, self.goal
                );
                return self.finish(SearchState::Failed);
            }
        }

        self.stats.expanded += 1;
        trace!(
            "jps expand {} g={} f={} dir={} forced={}",
            node.pos, node.g, node.f, node.dir, node.forced
        );

        for dir in prune::directions(&node) {
            let hit = jump(self.map, node.pos + dir, dir, self.goal);
            let Some(pos) = hit.point() else {
                continue;
            };
            self.enqueue(Node::successor(id, &node, pos, dir, hit.forced(), self.goal));
        }
        SearchState::Running
    }

    /// Step until the search is done and return the final state.
    pub fn run(&mut self) -> SearchState {
        loop {
            let state = self.step();
            if state.is_done() {
                return state;
            }
        }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// The jump-point path, start first and goal last. Empty unless the
    /// search succeeded.
    #[inline]
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Consume the search and return its path (empty unless succeeded).
    pub fn into_path(self) -> Vec<Point> {
        self.path
    }

    /// Counters so far.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// The node the next [`step`](Self::step) will pop, if any.
    pub fn peek(&self) -> Option<&Node> {
        if self.state.is_done() {
            return None;
        }
        self.open.peek().map(|id| self.arena.get(id))
    }

    /// Number of nodes waiting in the open set.
    #[inline]
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    fn enqueue(&mut self, node: Node) {
        if self.config.duplicates == DuplicatePolicy::SkipRepeatedState {
            match self.best_g.entry((node.pos, node.dir, node.forced)) {
                Entry::Occupied(e) if *e.get() <= node.g => {
                    self.stats.skipped += 1;
                    return;
                }
                Entry::Occupied(mut e) => {
                    e.insert(node.g);
                }
                Entry::Vacant(e) => {
                    e.insert(node.g);
                }
            }
        }

        let id = self.arena.push(node);
        self.open.push(id, node.f);
        self.stats.created = self.arena.len();
        self.stats.peak_open = self.stats.peak_open.max(self.open.len());
    }

    fn finish(&mut self, state: SearchState) -> SearchState {
        self.state = state;
        state
    }
}

/// Find a path from `start` to `end` with Jump Point Search.
///
/// Returns the jump points of the path, `start` first and `end` last, with
/// each consecutive pair on one straight (orthogonal or diagonal) line. The
/// result is empty when no path is found. Use
/// [`expand_path`](crate::expand_path) for a cell-by-cell walk.
pub fn find_path<W: Walkable + ?Sized>(start: Point, end: Point, map: &W) -> Vec<Point> {
    find_path_with(start, end, map, SearchConfig::default())
}

/// [`find_path`] with an explicit configuration.
pub fn find_path_with<W: Walkable + ?Sized>(
    start: Point,
    end: Point,
    map: &W,
    config: SearchConfig,
) -> Vec<Point> {
    let mut search = JumpSearch::with_config(map, start, end, config);
    search.run();
    search.into_path()
}
