//! Single-step legality rules for agents moving on the tile grid.

use crate::grid::{Elevation, TileCoord};
use crate::terrain::TerrainQuery;

/// Decide whether an agent standing on `from` at `from_elevation` may step
/// onto the adjacent tile `to`, and at which elevation it would arrive.
///
/// `from` must already describe a walkable position; `to` is validated here.
/// Returns `None` when the step is illegal. Rules are evaluated in a fixed
/// order and the first match wins: bounds, walls, void tiles, stair ascent,
/// stair descent, bridges, level ground. Elevation changes without a stair
/// are cliffs and always rejected.
pub fn can_step<T: TerrainQuery + ?Sized>(
    terrain: &T,
    from: TileCoord,
    from_elevation: Elevation,
    to: TileCoord,
) -> Option<Elevation> {
    if !terrain.in_bounds(to) {
        return None;
    }

    // Walls block regardless of elevation.
    if terrain.has_wall(to) {
        return None;
    }

    let stair = terrain.stair_at(to);

    // Void: nothing to stand on at all.
    if !terrain.has_ground(to) && !terrain.has_bridge(to) && stair.is_none() {
        return None;
    }

    if let Some(feature) = stair {
        // Stair tiles carry ground-level data; a stair authored at plateau
        // elevation is decorative and falls through to the surface rules.
        if terrain.elevation_at(to) == 0 {
            if from_elevation == 0 && from == feature.low_access {
                // Ascent is only usable when the plateau side actually exists.
                if is_access_tile_valid(terrain, feature.high_access, 1) {
                    return Some(1);
                }
            } else if from_elevation == 1 && from == feature.high_access {
                return Some(0);
            }
        }
    }

    if terrain.has_bridge(to) {
        if from_elevation == 1 {
            return Some(1);
        }
        if from_elevation == 0 {
            // Walking under the bridge needs independent ground-level data;
            // there is no hopping up onto the deck from below.
            return if terrain.has_ground(to) && terrain.elevation_at(to) == 0 {
                Some(0)
            } else {
                None
            };
        }
        // Other layers fall through to the surface rules.
    }

    if terrain.elevation_at(to) == from_elevation && terrain.has_ground(to) {
        return Some(from_elevation);
    }

    // Cliff: elevation mismatch with no feature to scaffold it.
    None
}

/// An access tile is usable when it exists, sits at the expected elevation,
/// offers ground, and is not walled off.
pub(crate) fn is_access_tile_valid<T: TerrainQuery + ?Sized>(
    terrain: &T,
    tile: TileCoord,
    elevation: Elevation,
) -> bool {
    terrain.in_bounds(tile)
        && terrain.elevation_at(tile) == elevation
        && terrain.has_ground(tile)
        && !terrain.has_wall(tile)
}
