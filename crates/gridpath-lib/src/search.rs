use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::grid::{Elevation, TileCoord};
use crate::movement::can_step;
use crate::route::{Route, RouteStep};
use crate::routing::SearchLimits;
use crate::terrain::TerrainQuery;

/// Uniform cost of one cardinal step.
pub(crate) const MOVE_COST: u32 = 10;

/// Search state: a tile together with the elevation the agent holds there.
/// Both take part in identity, so the same tile may be visited once per
/// elevation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct SearchState {
    tile: TileCoord,
    elevation: Elevation,
}

/// Find a route between two positions on the same or different elevation,
/// bounding exploration to the default direct-path distance around `start`.
///
/// Returns the full route (including both endpoints) or `None` if no path
/// exists within the bound.
pub fn find_path<T: TerrainQuery + ?Sized>(
    terrain: &T,
    start: TileCoord,
    start_elevation: Elevation,
    goal: TileCoord,
    goal_elevation: Elevation,
) -> Option<Route> {
    find_path_bounded(
        terrain,
        start,
        start_elevation,
        goal,
        goal_elevation,
        start,
        SearchLimits::default().direct_path_bound,
    )
}

/// A* over `(tile, elevation)` states, pruned to tiles within
/// `max_distance` Manhattan range of `focus`.
///
/// The goal must match on both tile and elevation; reaching the right tile
/// on the wrong layer is not success. A hard cap of `4 * max_distance^2`
/// expansions aborts runaway searches and reads as "no path".
pub fn find_path_bounded<T: TerrainQuery + ?Sized>(
    terrain: &T,
    start: TileCoord,
    start_elevation: Elevation,
    goal: TileCoord,
    goal_elevation: Elevation,
    focus: TileCoord,
    max_distance: i32,
) -> Option<Route> {
    // A walled start can never be a real agent position; bail before any
    // expansion. The goal only needs to exist: callers may target a tile
    // occupied by another agent.
    if !terrain.in_bounds(start) || terrain.has_wall(start) {
        return None;
    }
    if !terrain.in_bounds(goal) {
        return None;
    }

    let start_state = SearchState {
        tile: start,
        elevation: start_elevation,
    };
    let goal_state = SearchState {
        tile: goal,
        elevation: goal_elevation,
    };

    if start_state == goal_state {
        return Some(Route::single(RouteStep::new(start, start_elevation)));
    }

    let cap = expansion_cap(max_distance);
    let mut g_score: HashMap<SearchState, u32> = HashMap::new();
    let mut parents: HashMap<SearchState, SearchState> = HashMap::new();
    let mut closed: HashSet<SearchState> = HashSet::new();
    let mut open = BinaryHeap::new();

    g_score.insert(start_state, 0);
    let start_h = heuristic(start, goal);
    open.push(OpenEntry {
        f: start_h,
        h: start_h,
        g: 0,
        state: start_state,
    });

    let mut expansions: u64 = 0;

    while let Some(entry) = open.pop() {
        let state = entry.state;

        // Skip stale heap entries superseded by a cheaper rediscovery.
        if closed.contains(&state) || entry.g > g_score.get(&state).copied().unwrap_or(u32::MAX) {
            continue;
        }

        if state == goal_state {
            return Some(retrace(&parents, start_state, goal_state));
        }

        closed.insert(state);
        expansions += 1;
        if expansions > cap {
            tracing::debug!(
                start = %start,
                goal = %goal,
                cap,
                "search aborted after hitting the expansion cap"
            );
            return None;
        }

        for neighbour in state.tile.cardinal_neighbours() {
            if neighbour.manhattan_distance(focus) > max_distance {
                continue;
            }
            let Some(next_elevation) = can_step(terrain, state.tile, state.elevation, neighbour)
            else {
                continue;
            };
            let next = SearchState {
                tile: neighbour,
                elevation: next_elevation,
            };
            if closed.contains(&next) {
                continue;
            }

            let tentative = entry.g + MOVE_COST;
            if tentative < g_score.get(&next).copied().unwrap_or(u32::MAX) {
                g_score.insert(next, tentative);
                parents.insert(next, state);
                let h = heuristic(neighbour, goal);
                open.push(OpenEntry {
                    f: tentative + h,
                    h,
                    g: tentative,
                    state: next,
                });
            }
        }
    }

    None
}

pub(crate) fn expansion_cap(max_distance: i32) -> u64 {
    let d = max_distance.max(0) as u64;
    4 * d * d
}

fn heuristic(tile: TileCoord, goal: TileCoord) -> u32 {
    tile.manhattan_distance(goal) as u32 * MOVE_COST
}

fn retrace(
    parents: &HashMap<SearchState, SearchState>,
    start: SearchState,
    goal: SearchState,
) -> Route {
    let mut steps = Vec::new();
    let mut current = goal;
    loop {
        steps.push(RouteStep::new(current.tile, current.elevation));
        if current == start {
            break;
        }
        current = parents[&current];
    }
    steps.reverse();
    Route::from_steps(steps)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenEntry {
    f: u32,
    h: u32,
    g: u32,
    state: SearchState,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by f-cost, with
        // the lower heuristic preferred among equal-f entries.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.state.cmp(&self.state))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
