//! Route composition across elevation layers.
//!
//! This module provides:
//! - [`SearchLimits`] - Tunable bounds applied to the underlying searches
//! - [`RouteRequest`] - High-level route planning request
//! - [`RoutePlan`] - Planned route result with per-step elevations
//! - [`find_overall_path`] - Composed search across elevation layers
//! - [`plan_route`] - Main entry point for agent controllers
//!
//! A same-elevation request is a single bounded search. A cross-elevation
//! request locates the nearest usable stair, routes to its entry tile,
//! crosses the feature, and routes from its exit tile to the goal; the three
//! pieces are stitched into one continuous route. Composition is
//! all-or-nothing: if any piece fails, no partial route is returned.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::grid::{Elevation, TileCoord};
use crate::route::{Route, RouteStep};
use crate::search::find_path_bounded;
use crate::terrain::TerrainQuery;
use crate::transition::find_nearest_stair;

/// Bounds applied to the searches behind a route request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Manhattan range explored around the focus tile of a direct search.
    pub direct_path_bound: i32,
    /// Window radius scanned for a usable stair when elevations differ.
    pub stair_search_radius: i32,
    /// Extra range granted to the segment walking to the stair entry.
    pub segment_margin: i32,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            direct_path_bound: 48,
            stair_search_radius: 20,
            segment_margin: 4,
        }
    }
}

/// High-level route planning request issued by an agent controller.
#[derive(Debug, Clone, Copy)]
pub struct RouteRequest {
    pub start: TileCoord,
    pub start_elevation: Elevation,
    pub goal: TileCoord,
    pub goal_elevation: Elevation,
    pub limits: SearchLimits,
}

impl RouteRequest {
    /// Request with the default search limits.
    pub fn new(
        start: TileCoord,
        start_elevation: Elevation,
        goal: TileCoord,
        goal_elevation: Elevation,
    ) -> Self {
        Self {
            start,
            start_elevation,
            goal,
            goal_elevation,
            limits: SearchLimits::default(),
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub start: TileCoord,
    pub goal: TileCoord,
    pub steps: Vec<RouteStep>,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Composed pathfinding across elevation layers with default limits.
///
/// `None` uniformly covers every no-path cause: unreachable goal, no usable
/// stair in range, or a failed segment search.
pub fn find_overall_path<T: TerrainQuery + ?Sized>(
    terrain: &T,
    start: TileCoord,
    start_elevation: Elevation,
    goal: TileCoord,
    goal_elevation: Elevation,
) -> Option<Route> {
    find_overall_path_with(
        terrain,
        start,
        start_elevation,
        goal,
        goal_elevation,
        &SearchLimits::default(),
    )
}

/// Composed pathfinding with explicit [`SearchLimits`].
pub fn find_overall_path_with<T: TerrainQuery + ?Sized>(
    terrain: &T,
    start: TileCoord,
    start_elevation: Elevation,
    goal: TileCoord,
    goal_elevation: Elevation,
    limits: &SearchLimits,
) -> Option<Route> {
    if start_elevation == goal_elevation {
        return find_path_bounded(
            terrain,
            start,
            start_elevation,
            goal,
            goal_elevation,
            goal,
            limits.direct_path_bound,
        );
    }

    let Some(transition) = find_nearest_stair(
        terrain,
        start,
        start_elevation,
        goal_elevation,
        limits.stair_search_radius,
    ) else {
        tracing::debug!(
            start = %start,
            from_elevation = start_elevation,
            to_elevation = goal_elevation,
            "no usable stair within search radius"
        );
        return None;
    };

    // Leg one: walk to the stair entry, staying on the current layer.
    let mut route = find_path_bounded(
        terrain,
        start,
        start_elevation,
        transition.entry,
        transition.entry_elevation,
        start,
        limits.stair_search_radius + limits.segment_margin,
    )?;

    // Crossing the feature itself changes the layer.
    route.push_step(RouteStep::new(transition.stair.tile, transition.exit_elevation));

    // Leg two: from the exit tile onward at the target elevation.
    let tail = find_path_bounded(
        terrain,
        transition.exit,
        transition.exit_elevation,
        goal,
        goal_elevation,
        goal,
        limits.direct_path_bound,
    )?;

    route.join(tail);
    route.collapse_duplicates();

    tracing::debug!(
        start = %start,
        goal = %goal,
        stair = %transition.stair.tile,
        steps = route.len(),
        "composed cross-elevation route"
    );

    Some(route)
}

/// Compute a route for the given request.
///
/// This is the main entry point for agent controllers, invoked each path
/// refresh tick. Endpoints outside the terrain are a caller error reported
/// once at entry; every in-bounds failure is the uniform
/// [`Error::RouteNotFound`], which callers treat as "stay put".
pub fn plan_route<T: TerrainQuery + ?Sized>(
    terrain: &T,
    request: &RouteRequest,
) -> Result<RoutePlan> {
    for endpoint in [request.start, request.goal] {
        if !terrain.in_bounds(endpoint) {
            tracing::warn!(tile = %endpoint, "route endpoint outside terrain bounds");
            return Err(Error::EndpointOutOfBounds { tile: endpoint });
        }
    }

    let route = find_overall_path_with(
        terrain,
        request.start,
        request.start_elevation,
        request.goal,
        request.goal_elevation,
        &request.limits,
    )
    .ok_or(Error::RouteNotFound {
        start: request.start,
        goal: request.goal,
    })?;

    Ok(RoutePlan {
        start: request.start,
        goal: request.goal,
        steps: route.into_steps(),
    })
}
