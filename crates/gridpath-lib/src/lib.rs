//! gridpath library entry points.
//!
//! This crate models a tile world with stacked elevation layers connected by
//! stairs and bridges, and computes walkable routes for autonomous agents
//! across it. Searches run over compound `(tile, elevation)` states, so the
//! same tile can be traversed independently on each layer. Higher-level
//! consumers (agent controllers) should depend on the functions exported
//! here instead of reimplementing movement rules.

#![deny(warnings)]

pub mod error;
pub mod grid;
pub mod movement;
pub mod route;
pub mod routing;
pub mod search;
pub mod spawn;
pub mod terrain;
pub mod transition;

pub use error::{Error, Result};
pub use grid::{Elevation, TileCoord};
pub use movement::can_step;
pub use route::{Route, RouteStep};
pub use routing::{
    find_overall_path, find_overall_path_with, plan_route, RoutePlan, RouteRequest, SearchLimits,
};
pub use search::{find_path, find_path_bounded};
pub use spawn::find_spawn_tile;
pub use terrain::{GridTerrain, StairFeature, TerrainQuery};
pub use transition::{find_nearest_stair, is_well_formed, StairTransition};
