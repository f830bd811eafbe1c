use serde::Serialize;

use crate::grid::{Elevation, TileCoord};

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteStep {
    pub tile: TileCoord,
    /// Elevation the agent occupies once it has stepped onto `tile`.
    /// Controllers replay this instead of re-deriving elevation from tile
    /// data, which drifts around stairs and bridges.
    pub elevation: Elevation,
}

impl RouteStep {
    pub const fn new(tile: TileCoord, elevation: Elevation) -> Self {
        Self { tile, elevation }
    }
}

/// Ordered tile sequence describing a legal step-by-step path.
///
/// A route is never empty: the first step is the start position and a
/// single-step route means start and goal coincide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    steps: Vec<RouteStep>,
}

impl Route {
    /// Route consisting of the start position alone.
    pub fn single(step: RouteStep) -> Self {
        Self { steps: vec![step] }
    }

    pub fn from_steps(steps: Vec<RouteStep>) -> Self {
        debug_assert!(!steps.is_empty(), "routes carry at least the start tile");
        Self { steps }
    }

    pub fn steps(&self) -> &[RouteStep] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<RouteStep> {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first(&self) -> RouteStep {
        self.steps[0]
    }

    pub fn last(&self) -> RouteStep {
        self.steps[self.steps.len() - 1]
    }

    /// The tiles visited, in order.
    pub fn tiles(&self) -> impl Iterator<Item = TileCoord> + '_ {
        self.steps.iter().map(|step| step.tile)
    }

    pub fn push_step(&mut self, step: RouteStep) {
        self.steps.push(step);
    }

    /// Append `other`, eliding its first step when it repeats this route's
    /// final tile.
    pub fn join(&mut self, other: Route) {
        let mut incoming = other.steps;
        if let (Some(last), Some(first)) = (self.steps.last(), incoming.first()) {
            if last.tile == first.tile {
                incoming.remove(0);
            }
        }
        self.steps.extend(incoming);
    }

    /// Collapse consecutive steps that land on the same tile, keeping the
    /// first occurrence.
    pub fn collapse_duplicates(&mut self) {
        self.steps.dedup_by(|next, previous| next.tile == previous.tile);
    }
}
