use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Anything usable as a path cost: integers, floats, [`FixedNum`](crate::spatial::fixed_math::FixedNum).
///
/// `Default` must be the additive zero; it seeds the start node.
pub trait PathCost: Copy + PartialOrd + Add<Output = Self> + Default {}

impl<C> PathCost for C where C: Copy + PartialOrd + Add<Output = C> + Default {}

/// Neighbor connectivity for grid searches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Connectivity {
    /// Cardinal moves only (dir4).
    Four,
    /// Cardinal and diagonal moves (dir8).
    #[default]
    Eight,
}

/// One partial path inside the search arena.
///
/// `parent` indexes the arena the node lives in; the start node has none.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PathNode<P, C> {
    pub position: P,
    pub cost: C,
    pub parent: Option<usize>,
}

/// Result of a successful search: positions from start to target inclusive,
/// with the cumulative cost at each step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridPath<P, C> {
    waypoints: Vec<P>,
    costs: Vec<C>,
}

impl<P, C: PathCost> GridPath<P, C> {
    /// Walk parent links from `last` back to the root and reverse.
    pub(crate) fn from_arena(arena: &[PathNode<P, C>], last: usize) -> Self
    where
        P: Copy,
    {
        let mut waypoints = Vec::new();
        let mut costs = Vec::new();
        let mut current = Some(last);

        while let Some(index) = current {
            let node = &arena[index];
            waypoints.push(node.position);
            costs.push(node.cost);
            current = node.parent;
        }

        waypoints.reverse();
        costs.reverse();
        Self { waypoints, costs }
    }

    pub fn positions(&self) -> &[P] {
        &self.waypoints
    }

    /// Cumulative cost from the start at each position.
    pub fn costs(&self) -> &[C] {
        &self.costs
    }

    /// Cost of the whole path; zero for a start == target path.
    pub fn total_cost(&self) -> C {
        self.costs.last().copied().unwrap_or_default()
    }

    pub fn start(&self) -> Option<&P> {
        self.waypoints.first()
    }

    pub fn target(&self) -> Option<&P> {
        self.waypoints.last()
    }

    /// Number of positions, start and target included.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn into_positions(self) -> Vec<P> {
        self.waypoints
    }
}
