//! Placement search for dropping an agent onto a clear tile.

use crate::grid::{Elevation, TileCoord};
use crate::terrain::TerrainQuery;

/// Find a tile suitable for placing an agent, starting at `guess` and
/// scanning outward in expanding square rings up to `max_radius`.
///
/// A candidate must be in bounds with plain walkable ground: no wall, stair,
/// or bridge on it. Returns the tile together with its data elevation, which
/// becomes the agent's starting elevation. Ring order is fixed (top edge,
/// bottom edge, then side columns), so the result is deterministic.
pub fn find_spawn_tile<T: TerrainQuery + ?Sized>(
    terrain: &T,
    guess: TileCoord,
    max_radius: i32,
) -> Option<(TileCoord, Elevation)> {
    if let Some(found) = spawn_candidate(terrain, guess) {
        return Some(found);
    }

    for radius in 1..=max_radius {
        for i in -radius..=radius {
            let top = TileCoord::new(guess.x + i, guess.y + radius);
            if let Some(found) = spawn_candidate(terrain, top) {
                return Some(found);
            }
            let bottom = TileCoord::new(guess.x + i, guess.y - radius);
            if let Some(found) = spawn_candidate(terrain, bottom) {
                return Some(found);
            }
        }
        for i in (-radius + 1)..radius {
            let left = TileCoord::new(guess.x - radius, guess.y + i);
            if let Some(found) = spawn_candidate(terrain, left) {
                return Some(found);
            }
            let right = TileCoord::new(guess.x + radius, guess.y + i);
            if let Some(found) = spawn_candidate(terrain, right) {
                return Some(found);
            }
        }
    }

    tracing::debug!(guess = %guess, max_radius, "no valid spawn tile in range");
    None
}

fn spawn_candidate<T: TerrainQuery + ?Sized>(
    terrain: &T,
    tile: TileCoord,
) -> Option<(TileCoord, Elevation)> {
    if !terrain.in_bounds(tile) || !terrain.has_ground(tile) {
        return None;
    }
    if terrain.has_wall(tile) || terrain.has_bridge(tile) || terrain.stair_at(tile).is_some() {
        return None;
    }
    Some((tile, terrain.elevation_at(tile)))
}
