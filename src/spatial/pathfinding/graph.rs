use bevy::prelude::*;
use smallvec::SmallVec;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::spatial::fixed_math::{FixedNum, SQRT_2};
use super::heuristics::{manhattan, octile};
use super::neighbors::grid_neighbors;
use super::types::{Connectivity, PathCost};

/// The graph a search runs over.
///
/// Methods take `&mut self` so closure-backed graphs may keep state
/// (caches, counters, an RNG for tie-breaks).
pub trait SearchGraph {
    type Position: Copy + Eq + Hash;
    type Cost: PathCost;
    type Neighbors: IntoIterator<Item = Self::Position>;

    /// Cost of stepping from `from` to its neighbor `to`.
    fn distance(&mut self, from: Self::Position, to: Self::Position) -> Self::Cost;

    /// Estimated remaining cost from `from` to `target`. Admissibility is the
    /// implementor's responsibility; nothing checks it.
    fn heuristic(&mut self, from: Self::Position, target: Self::Position) -> Self::Cost;

    fn neighbors(&mut self, position: Self::Position) -> Self::Neighbors;
}

/// [`SearchGraph`] assembled from three closures.
pub struct FnGraph<P, D, H, N> {
    distance: D,
    heuristic: H,
    neighbors: N,
    _position: PhantomData<fn(P) -> P>,
}

impl<P, D, H, N> FnGraph<P, D, H, N> {
    pub fn new(distance: D, heuristic: H, neighbors: N) -> Self {
        Self {
            distance,
            heuristic,
            neighbors,
            _position: PhantomData,
        }
    }
}

impl<P, C, D, H, N, I> SearchGraph for FnGraph<P, D, H, N>
where
    P: Copy + Eq + Hash,
    C: PathCost,
    D: FnMut(P, P) -> C,
    H: FnMut(P, P) -> C,
    N: FnMut(P) -> I,
    I: IntoIterator<Item = P>,
{
    type Position = P;
    type Cost = C;
    type Neighbors = I;

    fn distance(&mut self, from: P, to: P) -> C {
        (self.distance)(from, to)
    }

    fn heuristic(&mut self, from: P, target: P) -> C {
        (self.heuristic)(from, target)
    }

    fn neighbors(&mut self, position: P) -> I {
        (self.neighbors)(position)
    }
}

/// Tile-map search graph over `IVec2` positions.
///
/// Costs are deterministic [`FixedNum`]s. The heuristic follows the
/// connectivity: manhattan for dir4, octile for dir8, both admissible for the
/// configured step costs as long as `diagonal_cost <= 2 * cardinal_cost`.
///
/// # Example
///
/// ```rust
/// use bevy::prelude::IVec2;
/// use gridsight::spatial::pathfinding::{find_path_in, Connectivity, GridGraph};
///
/// let wall = |p: IVec2| p.x == 2 && p.y < 4;
/// let mut graph = GridGraph::new(wall, Connectivity::Four);
///
/// let path = find_path_in(&mut graph, IVec2::ZERO, IVec2::new(4, 0), 10_000)
///     .expect("wall has a gap at y = 4");
/// assert!(path.positions().iter().all(|p| !wall(*p)));
/// ```
pub struct GridGraph<B> {
    is_blocked: B,
    connectivity: Connectivity,
    cardinal_cost: FixedNum,
    diagonal_cost: FixedNum,
    allow_corner_cutting: bool,
}

impl<B> GridGraph<B>
where
    B: FnMut(IVec2) -> bool,
{
    /// Unit cardinal cost, √2 diagonal cost, no corner cutting.
    pub fn new(is_blocked: B, connectivity: Connectivity) -> Self {
        Self {
            is_blocked,
            connectivity,
            cardinal_cost: FixedNum::ONE,
            diagonal_cost: SQRT_2,
            allow_corner_cutting: false,
        }
    }

    pub fn with_costs(mut self, cardinal_cost: FixedNum, diagonal_cost: FixedNum) -> Self {
        self.cardinal_cost = cardinal_cost;
        self.diagonal_cost = diagonal_cost;
        self
    }

    /// Allow diagonal steps that squeeze between two blocked orthogonal cells.
    pub fn with_corner_cutting(mut self, allow: bool) -> Self {
        self.allow_corner_cutting = allow;
        self
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }
}

impl<B> SearchGraph for GridGraph<B>
where
    B: FnMut(IVec2) -> bool,
{
    type Position = IVec2;
    type Cost = FixedNum;
    type Neighbors = SmallVec<[IVec2; 8]>;

    fn distance(&mut self, from: IVec2, to: IVec2) -> FixedNum {
        if from.x != to.x && from.y != to.y {
            self.diagonal_cost
        } else {
            self.cardinal_cost
        }
    }

    fn heuristic(&mut self, from: IVec2, target: IVec2) -> FixedNum {
        match self.connectivity {
            Connectivity::Four => manhattan(from, target) * self.cardinal_cost,
            Connectivity::Eight => octile(from, target, self.cardinal_cost, self.diagonal_cost),
        }
    }

    fn neighbors(&mut self, position: IVec2) -> SmallVec<[IVec2; 8]> {
        grid_neighbors(
            position,
            self.connectivity,
            self.allow_corner_cutting,
            &mut self.is_blocked,
        )
    }
}
