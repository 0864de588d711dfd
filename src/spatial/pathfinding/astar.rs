use bevy::prelude::*;
use rustc_hash::FxHashSet;
use std::hash::Hash;

use crate::profile_log;
use crate::spatial::profiling::profile;
use super::graph::{FnGraph, SearchGraph};
use super::types::{GridPath, PathCost, PathNode};

/// Search with plain closures for distance, heuristic and neighbors.
///
/// See [`find_path_in`] for the search semantics.
pub fn find_path<P, C, D, H, N, I>(
    start: P,
    target: P,
    distance: D,
    heuristic: H,
    neighbors: N,
    max_iterations: usize,
) -> Option<GridPath<P, C>>
where
    P: Copy + Eq + Hash,
    C: PathCost,
    D: FnMut(P, P) -> C,
    H: FnMut(P, P) -> C,
    N: FnMut(P) -> I,
    I: IntoIterator<Item = P>,
{
    let mut graph = FnGraph::new(distance, heuristic, neighbors);
    find_path_in(&mut graph, start, target, max_iterations)
}

/// Best-first search from `start` to `target`, at most `max_iterations`
/// frontier selections.
///
/// Each iteration scans the whole frontier and takes the first node with the
/// lowest `cost + heuristic`. The frontier is not deduplicated: a position can
/// be queued once per parent that reached it before it was explored, and a
/// cheaper late arrival does not replace an earlier entry.
///
/// Returns `None` when the frontier runs dry or the budget runs out.
#[profile(250)]
pub fn find_path_in<G: SearchGraph>(
    graph: &mut G,
    start: G::Position,
    target: G::Position,
    max_iterations: usize,
) -> Option<GridPath<G::Position, G::Cost>> {
    let mut arena: Vec<PathNode<G::Position, G::Cost>> = vec![PathNode {
        position: start,
        cost: G::Cost::default(),
        parent: None,
    }];
    let mut frontier: Vec<usize> = vec![0];
    let mut explored: FxHashSet<G::Position> = FxHashSet::default();

    for iteration in 0..max_iterations {
        let Some(slot) = select_best(graph, &arena, &frontier, target) else {
            debug!("[PATHFINDING] Frontier exhausted after {} iterations - target unreachable", iteration);
            return None;
        };

        let current = frontier.remove(slot);
        let node = arena[current];

        if node.position == target {
            profile_log!("[PATHFINDING] Found path in {} iterations ({} nodes)", iteration + 1, arena.len());
            return Some(GridPath::from_arena(&arena, current));
        }

        explored.insert(node.position);

        for neighbor in graph.neighbors(node.position) {
            if explored.contains(&neighbor) {
                continue;
            }
            let cost = node.cost + graph.distance(node.position, neighbor);
            arena.push(PathNode {
                position: neighbor,
                cost,
                parent: Some(current),
            });
            frontier.push(arena.len() - 1);
        }
    }

    warn!("[PATHFINDING] A* exceeded max iterations ({}) with {} nodes still queued", max_iterations, frontier.len());
    None
}

/// Slot in `frontier` of the first node minimizing `cost + heuristic`.
fn select_best<G: SearchGraph>(
    graph: &mut G,
    arena: &[PathNode<G::Position, G::Cost>],
    frontier: &[usize],
    target: G::Position,
) -> Option<usize> {
    let mut best: Option<(usize, G::Cost)> = None;

    for (slot, &index) in frontier.iter().enumerate() {
        let node = &arena[index];
        let score = node.cost + graph.heuristic(node.position, target);
        let improves = match best {
            Some((_, best_score)) => score < best_score,
            None => true,
        };
        if improves {
            best = Some((slot, score));
        }
    }

    best.map(|(slot, _)| slot)
}
