//! Locating the stair an agent must take to change elevation layers.

use crate::grid::{Elevation, TileCoord};
use crate::movement::is_access_tile_valid;
use crate::terrain::{StairFeature, TerrainQuery};

/// A stair resolved for one travel direction: the tile to walk to at the
/// agent's current elevation, and the tile it emerges on afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StairTransition {
    pub stair: StairFeature,
    pub entry: TileCoord,
    pub entry_elevation: Elevation,
    pub exit: TileCoord,
    pub exit_elevation: Elevation,
}

/// Scan the square window of `radius` tiles around `from` for the nearest
/// well-formed stair that carries an agent from `from_elevation` to
/// `to_elevation`.
///
/// Candidates are ranked by squared Euclidean distance of the stair tile to
/// `from`; ties keep the first candidate in row-major scan order, so results
/// are deterministic for identical terrain. Ill-formed stairs (missing,
/// walled, or mis-levelled access tiles) are never returned.
pub fn find_nearest_stair<T: TerrainQuery + ?Sized>(
    terrain: &T,
    from: TileCoord,
    from_elevation: Elevation,
    to_elevation: Elevation,
    radius: i32,
) -> Option<StairTransition> {
    let mut best: Option<(i64, StairTransition)> = None;

    for y in (from.y - radius)..=(from.y + radius) {
        for x in (from.x - radius)..=(from.x + radius) {
            let tile = TileCoord::new(x, y);
            if !terrain.in_bounds(tile) {
                continue;
            }
            let Some(stair) = terrain.stair_at(tile) else {
                continue;
            };
            if stair.tile != tile {
                // Access tiles may alias the feature in some terrain
                // encodings; only the feature tile itself is a candidate.
                continue;
            }
            if !stair.connects(from_elevation, to_elevation) {
                continue;
            }
            if !is_well_formed(terrain, &stair) {
                continue;
            }

            let distance = tile.squared_distance(from);
            if best.map(|(d, _)| distance < d).unwrap_or(true) {
                best = Some((
                    distance,
                    resolve_direction(&stair, from_elevation, to_elevation),
                ));
            }
        }
    }

    best.map(|(_, transition)| transition)
}

/// A stair is usable only when both of its access tiles exist at the
/// expected elevations with walkable ground, and the feature tile itself
/// carries ground-level data.
pub fn is_well_formed<T: TerrainQuery + ?Sized>(terrain: &T, stair: &StairFeature) -> bool {
    terrain.in_bounds(stair.tile)
        && !terrain.has_wall(stair.tile)
        && terrain.elevation_at(stair.tile) == 0
        && is_access_tile_valid(terrain, stair.low_access, 0)
        && is_access_tile_valid(terrain, stair.high_access, 1)
}

fn resolve_direction(
    stair: &StairFeature,
    from_elevation: Elevation,
    to_elevation: Elevation,
) -> StairTransition {
    if to_elevation > from_elevation {
        StairTransition {
            stair: *stair,
            entry: stair.low_access,
            entry_elevation: from_elevation,
            exit: stair.high_access,
            exit_elevation: to_elevation,
        }
    } else {
        StairTransition {
            stair: *stair,
            entry: stair.high_access,
            entry_elevation: from_elevation,
            exit: stair.low_access,
            exit_elevation: to_elevation,
        }
    }
}
