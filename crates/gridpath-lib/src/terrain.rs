use std::collections::{HashMap, HashSet};

use crate::grid::{Elevation, TileCoord};

/// Stair instance connecting the ground level to the plateau above it.
///
/// The feature tile sits on the boundary row and carries ground-level data
/// elevation. Its access tiles follow a fixed convention: the single
/// ground-level neighbour to the south, and the single plateau-level
/// neighbour to the north.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StairFeature {
    /// Tile the stair occupies.
    pub tile: TileCoord,
    /// Ground-level entry tile, south of the stair.
    pub low_access: TileCoord,
    /// Plateau-level entry tile, north of the stair.
    pub high_access: TileCoord,
}

impl StairFeature {
    /// Build the feature for a stair at `tile`, deriving both access tiles
    /// from the south-low/north-high convention.
    pub const fn at(tile: TileCoord) -> Self {
        Self {
            tile,
            low_access: tile.south(),
            high_access: tile.north(),
        }
    }

    /// Whether this feature can carry an agent from `from` to `to`.
    pub fn connects(&self, from: Elevation, to: Elevation) -> bool {
        matches!((from, to), (0, 1) | (1, 0))
    }
}

/// Read-only oracle describing the tile world.
///
/// The searches only ever query this surface; they never mutate it, so a
/// shared implementation may serve concurrent callers.
pub trait TerrainQuery {
    /// Whether `tile` lies inside the map.
    fn in_bounds(&self, tile: TileCoord) -> bool;

    /// Data elevation of `tile`, independent of what currently stands on it.
    /// Only meaningful for in-bounds tiles.
    fn elevation_at(&self, tile: TileCoord) -> Elevation;

    /// Whether a wall blocks `tile`.
    fn has_wall(&self, tile: TileCoord) -> bool;

    /// Whether a walkable ground surface exists at `tile`.
    fn has_ground(&self, tile: TileCoord) -> bool;

    /// Whether a bridge spans `tile`. Bridges always carry plateau-level data.
    fn has_bridge(&self, tile: TileCoord) -> bool;

    /// The stair feature occupying `tile`, if any.
    fn stair_at(&self, tile: TileCoord) -> Option<StairFeature>;
}

/// In-memory tile map implementing [`TerrainQuery`].
///
/// Suitable for callers whose world fits a dense elevation grid with sparse
/// feature layers, and for deterministic synthetic terrains in tests.
#[derive(Debug, Clone, Default)]
pub struct GridTerrain {
    width: i32,
    height: i32,
    elevation: Vec<Elevation>,
    walls: HashSet<TileCoord>,
    ground: HashSet<TileCoord>,
    bridges: HashSet<TileCoord>,
    stairs: HashMap<TileCoord, StairFeature>,
}

impl GridTerrain {
    /// Empty terrain: no surfaces anywhere, elevation 0 everywhere.
    pub fn new(width: i32, height: i32) -> Self {
        let cells = (width.max(0) as usize) * (height.max(0) as usize);
        Self {
            width: width.max(0),
            height: height.max(0),
            elevation: vec![0; cells],
            ..Self::default()
        }
    }

    /// Terrain with ground at elevation 0 on every tile.
    pub fn flat_ground(width: i32, height: i32) -> Self {
        let mut terrain = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                terrain.ground.insert(TileCoord::new(x, y));
            }
        }
        terrain
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Set the data elevation of an in-bounds tile. Out-of-bounds tiles are
    /// ignored.
    pub fn set_elevation(&mut self, tile: TileCoord, elevation: Elevation) {
        if let Some(index) = self.index(tile) {
            self.elevation[index] = elevation;
        }
    }

    pub fn add_ground(&mut self, tile: TileCoord) {
        self.ground.insert(tile);
    }

    pub fn remove_ground(&mut self, tile: TileCoord) {
        self.ground.remove(&tile);
    }

    pub fn add_wall(&mut self, tile: TileCoord) {
        self.walls.insert(tile);
    }

    pub fn remove_wall(&mut self, tile: TileCoord) {
        self.walls.remove(&tile);
    }

    pub fn add_bridge(&mut self, tile: TileCoord) {
        self.bridges.insert(tile);
    }

    /// Place a stair at `tile`, replacing any wall standing there, and
    /// return the resulting feature.
    pub fn place_stair(&mut self, tile: TileCoord) -> StairFeature {
        let feature = StairFeature::at(tile);
        self.walls.remove(&tile);
        self.stairs.insert(tile, feature);
        feature
    }

    fn index(&self, tile: TileCoord) -> Option<usize> {
        if self.in_bounds(tile) {
            Some((tile.y * self.width + tile.x) as usize)
        } else {
            None
        }
    }
}

impl TerrainQuery for GridTerrain {
    fn in_bounds(&self, tile: TileCoord) -> bool {
        tile.x >= 0 && tile.x < self.width && tile.y >= 0 && tile.y < self.height
    }

    fn elevation_at(&self, tile: TileCoord) -> Elevation {
        self.index(tile)
            .map(|index| self.elevation[index])
            .unwrap_or(0)
    }

    fn has_wall(&self, tile: TileCoord) -> bool {
        self.walls.contains(&tile)
    }

    fn has_ground(&self, tile: TileCoord) -> bool {
        self.ground.contains(&tile)
    }

    fn has_bridge(&self, tile: TileCoord) -> bool {
        self.bridges.contains(&tile)
    }

    fn stair_at(&self, tile: TileCoord) -> Option<StairFeature> {
        self.stairs.get(&tile).copied()
    }
}
