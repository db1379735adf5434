//! Path search module.
//!
//! This module contains the A* search over a [`Grid`]. Nodes live in an arena indexed by the
//! row-major coordinate key, predecessors are arena indices, and the frontier is an ordered set of
//! `(total cost, key)` entries so that ties always resolve to the lowest row, then the lowest
//! column.

use std::{
    collections::BTreeSet,
    fmt, iter,
    sync::atomic::{AtomicBool, Ordering},
};

use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    grid::{Cell, Grid},
    types::Coord,
};

/// End of a search that a coordinate was supplied for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The cell the path starts from.
    Start,
    /// The cell the path leads to.
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Start => "start",
            Self::Goal => "goal",
        })
    }
}

/// Failure of a path search.
///
/// An unreachable goal is not a failure; it is reported as `Ok(None)`.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The start or the goal lies outside the grid.
    #[error("{endpoint} {coord} lies outside the {width}x{height} grid")]
    InvalidEndpoint {
        /// Which endpoint was rejected.
        endpoint: Endpoint,
        /// The rejected coordinate.
        coord: Coord,
        /// Width of the searched grid.
        width: usize,
        /// Height of the searched grid.
        height: usize,
    },
    /// The cancellation flag was raised before the search completed.
    #[error("path search was cancelled")]
    Cancelled,
}

/// Shortest path between two cells.
///
/// The path always holds at least one coordinate, starts on the start cell, ends on the goal cell,
/// and every consecutive pair of coordinates is 4-adjacent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    /// Coordinates from start to goal, both inclusive.
    coords: Vec<Coord>,
}

impl Path {
    /// Returns the coordinates from start to goal, both inclusive.
    #[must_use]
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Returns the number of unit steps taken along the path.
    #[must_use]
    pub fn cost(&self) -> usize {
        self.coords.len().saturating_sub(1)
    }

    /// Returns the first coordinate of the path.
    #[must_use]
    pub fn start(&self) -> Option<Coord> {
        self.coords.first().copied()
    }

    /// Returns the last coordinate of the path.
    #[must_use]
    pub fn goal(&self) -> Option<Coord> {
        self.coords.last().copied()
    }

    /// Consumes the path and returns its coordinates.
    #[must_use]
    pub fn into_coords(self) -> Vec<Coord> {
        self.coords
    }
}

/// Finds a shortest 4-connected path from `start` to `goal`.
///
/// Returns `Ok(None)` when the goal cannot be reached. When several shortest paths exist, the one
/// returned is fixed: the frontier always expands the lowest total cost first and breaks ties by
/// the lowest row, then the lowest column, while neighbours are discovered in the order up, down,
/// left, right.
///
/// # Errors
///
/// This function returns [`SearchError::InvalidEndpoint`] if the start or the goal lies outside
/// the grid.
pub fn find_path(grid: &Grid, start: Coord, goal: Coord) -> Result<Option<Path>, SearchError> {
    search(grid, start, goal, None)
}

/// Finds a shortest path like [`find_path`], polling a cancellation flag once per expansion.
///
/// # Errors
///
/// This function returns [`SearchError::InvalidEndpoint`] if the start or the goal lies outside
/// the grid, and [`SearchError::Cancelled`] if `cancel` is observed raised before the search ends.
pub fn find_path_cancellable(
    grid: &Grid,
    start: Coord,
    goal: Coord,
    cancel: &AtomicBool,
) -> Result<Option<Path>, SearchError> {
    search(grid, start, goal, Some(cancel))
}

/// Validates the endpoints and runs the search.
fn search(
    grid: &Grid,
    start: Coord,
    goal: Coord,
    cancel: Option<&AtomicBool>,
) -> Result<Option<Path>, SearchError> {
    let start_key = endpoint_key(grid, start, Endpoint::Start)?;
    let _ = endpoint_key(grid, goal, Endpoint::Goal)?;

    if start == goal {
        return Ok(Some(Path {
            coords: vec![start],
        }));
    }

    Search::new(grid, start, start_key, goal).run(cancel)
}

/// Returns the coordinate key of an endpoint, rejecting coordinates outside the grid.
fn endpoint_key(grid: &Grid, coord: Coord, endpoint: Endpoint) -> Result<usize, SearchError> {
    grid.index_of(coord)
        .ok_or(SearchError::InvalidEndpoint {
            endpoint,
            coord,
            width: grid.width(),
            height: grid.height(),
        })
}

/// Search-local record of a discovered cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SearchNode {
    /// Position of the cell.
    coord: Coord,
    /// Cost of the best known path from the start.
    cost_from_start: usize,
    /// Manhattan distance to the goal.
    heuristic_cost: usize,
    /// Coordinate key of the node this one was reached from.
    predecessor: Option<usize>,
}

impl SearchNode {
    /// Returns the estimated cost of a path through this node.
    const fn total_cost(&self) -> usize {
        self.cost_from_start + self.heuristic_cost
    }
}

/// State of one arena slot. A key is open or closed, never both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    /// Not reached yet; the cost from the start is effectively infinite.
    Undiscovered,
    /// Discovered and waiting in the frontier.
    Open(SearchNode),
    /// Expanded; its cost from the start is final.
    Closed(SearchNode),
}

/// Frontier entry ordered by total cost, then by coordinate key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    /// Total cost of the node when the entry was made.
    total_cost: usize,
    /// Row-major coordinate key of the node.
    key: usize,
}

impl FrontierEntry {
    /// Builds the entry describing a node stored under `key`.
    const fn of(key: usize, node: &SearchNode) -> Self {
        Self {
            total_cost: node.total_cost(),
            key,
        }
    }
}

/// State of a single search invocation.
struct Search<'grid> {
    /// Grid being searched.
    grid: &'grid Grid,
    /// Cell the search is heading to.
    goal: Coord,
    /// Node arena indexed by coordinate key.
    nodes: Vec<Slot>,
    /// Open set; holds exactly one entry per open node.
    frontier: BTreeSet<FrontierEntry>,
    /// Number of nodes closed so far.
    expanded: usize,
}

impl<'grid> Search<'grid> {
    /// Prepares a search with only the start node in the frontier.
    fn new(grid: &'grid Grid, start: Coord, start_key: usize, goal: Coord) -> Self {
        let mut nodes = vec![Slot::Undiscovered; grid.area()];
        let mut frontier = BTreeSet::new();

        let start_node = SearchNode {
            coord: start,
            cost_from_start: 0,
            heuristic_cost: start.manhattan(goal),
            predecessor: None,
        };
        if let Some(slot) = nodes.get_mut(start_key) {
            *slot = Slot::Open(start_node);
            let _ = frontier.insert(FrontierEntry::of(start_key, &start_node));
        }

        Self {
            grid,
            goal,
            nodes,
            frontier,
            expanded: 0,
        }
    }

    /// Expands frontier nodes until the goal is closed or the frontier runs dry.
    fn run(mut self, cancel: Option<&AtomicBool>) -> Result<Option<Path>, SearchError> {
        loop {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                debug!(expanded = self.expanded, "path search cancelled");
                return Err(SearchError::Cancelled);
            }

            let Some(entry) = self.frontier.pop_first() else {
                break;
            };
            let Some(node) = self.close(entry.key) else {
                continue;
            };

            if node.coord == self.goal {
                let path = self.reconstruct(entry.key);
                debug!(
                    expanded = self.expanded,
                    cost = path.cost(),
                    "path search reached the goal"
                );
                return Ok(Some(path));
            }

            self.expand(entry.key, &node);
        }

        debug!(expanded = self.expanded, "path search exhausted the frontier");
        Ok(None)
    }

    /// Moves an open node to the closed set and returns it.
    fn close(&mut self, key: usize) -> Option<SearchNode> {
        let slot = self.nodes.get_mut(key)?;
        let Slot::Open(node) = *slot else {
            return None;
        };

        *slot = Slot::Closed(node);
        self.expanded += 1;
        trace!(coord = %node.coord, total_cost = node.total_cost(), "closed node");

        Some(node)
    }

    /// Discovers or improves every walkable neighbour of a freshly closed node.
    fn expand(&mut self, key: usize, node: &SearchNode) {
        let grid = self.grid;
        let cost = node.cost_from_start + 1;

        for neighbour in grid.neighbours(node.coord) {
            if !matches!(grid.cell(neighbour), Ok(Cell::Open)) {
                continue;
            }
            let Some(neighbour_key) = grid.index_of(neighbour) else {
                continue;
            };

            self.relax(neighbour_key, neighbour, cost, key);
        }
    }

    /// Records a path of cost `cost` to `coord` through the node stored under `predecessor`.
    ///
    /// Undiscovered nodes enter the frontier; open nodes are only updated when the new cost is
    /// strictly lower, in which case their single frontier entry is re-keyed. Closed nodes are
    /// final and never reopened.
    fn relax(&mut self, key: usize, coord: Coord, cost: usize, predecessor: usize) {
        let Some(slot) = self.nodes.get_mut(key) else {
            return;
        };

        match *slot {
            Slot::Undiscovered => {
                let node = SearchNode {
                    coord,
                    cost_from_start: cost,
                    heuristic_cost: coord.manhattan(self.goal),
                    predecessor: Some(predecessor),
                };
                *slot = Slot::Open(node);
                let _ = self.frontier.insert(FrontierEntry::of(key, &node));
            }
            Slot::Open(ref mut node) if cost < node.cost_from_start => {
                let _ = self.frontier.remove(&FrontierEntry::of(key, node));
                node.cost_from_start = cost;
                node.predecessor = Some(predecessor);
                let _ = self.frontier.insert(FrontierEntry::of(key, node));
            }
            Slot::Open(_) | Slot::Closed(_) => {}
        }
    }

    /// Returns the discovered node stored under `key`.
    fn node(&self, key: usize) -> Option<&SearchNode> {
        match self.nodes.get(key)? {
            Slot::Open(node) | Slot::Closed(node) => Some(node),
            Slot::Undiscovered => None,
        }
    }

    /// Follows predecessor links from the goal back to the start and returns the reversed walk.
    fn reconstruct(&self, goal_key: usize) -> Path {
        let mut coords: Vec<Coord> = iter::successors(self.node(goal_key), |node| {
            node.predecessor.and_then(|key| self.node(key))
        })
        .map(|node| node.coord)
        .collect();
        coords.reverse();

        Path { coords }
    }
}
