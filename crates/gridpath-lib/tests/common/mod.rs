//! Common test utilities and synthetic terrain fixtures.

#![allow(dead_code)]

use std::cell::Cell;

use gridpath_lib::{
    can_step, Elevation, GridTerrain, Route, StairFeature, TerrainQuery, TileCoord,
};

pub fn tile(x: i32, y: i32) -> TileCoord {
    TileCoord::new(x, y)
}

/// Flat square map: ground at elevation 0 everywhere, no features.
pub fn flat_map(side: i32) -> GridTerrain {
    GridTerrain::flat_ground(side, side)
}

/// Two-level map: ground rows below a cliff line, plateau rows above it,
/// connected by a single stair.
///
/// Layout (8 wide, 10 tall): rows `y < 5` are ground at elevation 0, row
/// `y == 5` is the cliff line (walls everywhere except the stair at (3, 5)),
/// rows `y >= 6` are plateau ground at elevation 1. The stair's low access
/// is (3, 4) and its high access is (3, 6).
pub fn two_level_map() -> GridTerrain {
    let mut terrain = two_level_map_without_stair();
    terrain.place_stair(tile(3, 5));
    terrain
}

/// Two-level layout with the cliff line left solid: no stair connects the
/// layers. The cliff row is bare rock, not a walkable surface.
pub fn two_level_map_without_stair() -> GridTerrain {
    let mut terrain = GridTerrain::flat_ground(8, 10);
    for y in 6..10 {
        for x in 0..8 {
            terrain.set_elevation(tile(x, y), 1);
        }
    }
    for x in 0..8 {
        terrain.add_wall(tile(x, 5));
        terrain.remove_ground(tile(x, 5));
    }
    terrain
}

/// Bridge map: two plateau banks separated by a void gap, spanned by a
/// single-tile-wide bridge at x = 5.
///
/// Rows `y <= 4` and `y >= 9` are ground at elevation 1 (the banks). Rows
/// `5..=8` are void except for bridge tiles at (5, y). Tiles (4, 6) and
/// (5, 6) additionally carry elevation-0 ground, forming a tunnel passage
/// under the bridge.
pub fn bridge_map() -> GridTerrain {
    let mut terrain = GridTerrain::new(12, 14);
    for y in 0..14 {
        for x in 0..12 {
            let t = tile(x, y);
            if y <= 4 || y >= 9 {
                terrain.add_ground(t);
                terrain.set_elevation(t, 1);
            }
        }
    }
    for y in 5..=8 {
        terrain.add_bridge(tile(5, y));
        terrain.set_elevation(tile(5, y), 1);
    }
    // Ground-level passage running under the bridge.
    for x in 3..=7 {
        terrain.add_ground(tile(x, 6));
        terrain.set_elevation(tile(x, 6), 0);
    }
    terrain
}

/// Replay a route through the move validator, asserting every consecutive
/// pair is a legal step arriving at the recorded elevation.
pub fn assert_route_is_legal(terrain: &GridTerrain, route: &Route) {
    for pair in route.steps().windows(2) {
        let from = pair[0];
        let to = pair[1];
        assert_eq!(
            from.tile.manhattan_distance(to.tile),
            1,
            "steps {} -> {} must be cardinally adjacent",
            from.tile,
            to.tile
        );
        let arrived = can_step(terrain, from.tile, from.elevation, to.tile);
        assert_eq!(
            arrived,
            Some(to.elevation),
            "step {} -> {} must be legal and land at elevation {}",
            from.tile,
            to.tile,
            to.elevation
        );
    }
}

/// Terrain wrapper counting oracle queries, used to bound search effort.
pub struct CountingTerrain<'a> {
    inner: &'a GridTerrain,
    bounds_checks: Cell<u64>,
}

impl<'a> CountingTerrain<'a> {
    pub fn new(inner: &'a GridTerrain) -> Self {
        Self {
            inner,
            bounds_checks: Cell::new(0),
        }
    }

    pub fn bounds_checks(&self) -> u64 {
        self.bounds_checks.get()
    }
}

impl TerrainQuery for CountingTerrain<'_> {
    fn in_bounds(&self, t: TileCoord) -> bool {
        self.bounds_checks.set(self.bounds_checks.get() + 1);
        self.inner.in_bounds(t)
    }

    fn elevation_at(&self, t: TileCoord) -> Elevation {
        self.inner.elevation_at(t)
    }

    fn has_wall(&self, t: TileCoord) -> bool {
        self.inner.has_wall(t)
    }

    fn has_ground(&self, t: TileCoord) -> bool {
        self.inner.has_ground(t)
    }

    fn has_bridge(&self, t: TileCoord) -> bool {
        self.inner.has_bridge(t)
    }

    fn stair_at(&self, t: TileCoord) -> Option<StairFeature> {
        self.inner.stair_at(t)
    }
}
