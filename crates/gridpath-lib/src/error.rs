use thiserror::Error;

use crate::grid::TileCoord;

/// Convenient result alias for the gridpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Raised when a requested route endpoint lies outside the terrain.
    #[error("tile {tile} is outside the terrain bounds")]
    EndpointOutOfBounds { tile: TileCoord },

    /// Raised when no route could be found between two tiles. Expected
    /// outcome, not a fault: callers pick a new behaviour and retry later.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: TileCoord, goal: TileCoord },
}
