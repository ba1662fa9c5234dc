use std::collections::{BinaryHeap, HashMap, HashSet};

use super::bfs::DistanceMap;
use super::queue::Entry;
use crate::traits::{AstarPather, WeightedPather};

/// A single cheapest route, endpoints included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath<S> {
    pub cost: u64,
    pub goal: S,
    pub path: Vec<S>,
}

/// Weighted shortest path using A* with the pather's estimate.
///
/// Returns `None` when no goal state is reachable.
#[tracing::instrument(level = "trace", skip_all)]
pub fn astar<P: AstarPather>(
    pather: &P,
    start: P::State,
    is_goal: impl Fn(P::State) -> bool,
) -> Option<ShortestPath<P::State>> {
    best_first(pather, start, is_goal, |s| pather.estimate(s))
}

/// Weighted shortest path without a heuristic.
#[tracing::instrument(level = "trace", skip_all)]
pub fn dijkstra<P: WeightedPather>(
    pather: &P,
    start: P::State,
    is_goal: impl Fn(P::State) -> bool,
) -> Option<ShortestPath<P::State>> {
    best_first(pather, start, is_goal, |_| 0)
}

/// Multi-source Dijkstra: final cost of every reachable state.
pub fn dijkstra_map<P: WeightedPather>(
    pather: &P,
    sources: impl IntoIterator<Item = P::State>,
) -> DistanceMap<P::State> {
    let mut best = DistanceMap::new();
    let mut open = BinaryHeap::new();
    for state in sources {
        best.insert(state, 0);
        open.push(Entry { f: 0, g: 0, state });
    }

    let mut closed = HashSet::new();
    let mut nbuf = Vec::new();
    while let Some(Entry { g, state, .. }) = open.pop() {
        if !closed.insert(state) {
            continue;
        }
        nbuf.clear();
        pather.neighbors(state, &mut nbuf);
        for &next in &nbuf {
            let tentative = g + pather.cost(state, next);
            if best.get(&next).is_some_and(|&known| known <= tentative) {
                continue;
            }
            best.insert(next, tentative);
            open.push(Entry {
                f: tentative,
                g: tentative,
                state: next,
            });
        }
    }
    best
}

fn best_first<P: WeightedPather>(
    pather: &P,
    start: P::State,
    is_goal: impl Fn(P::State) -> bool,
    estimate: impl Fn(P::State) -> u64,
) -> Option<ShortestPath<P::State>> {
    let mut best = DistanceMap::from([(start, 0)]);
    let mut parents: HashMap<P::State, P::State> = HashMap::new();
    let mut closed = HashSet::new();
    let mut open = BinaryHeap::from([Entry {
        f: estimate(start),
        g: 0,
        state: start,
    }]);

    let mut nbuf = Vec::new();
    let goal = loop {
        let Entry { g, state, .. } = open.pop()?;
        // Stale entry, or already finalized.
        if g > best[&state] || !closed.insert(state) {
            continue;
        }
        if is_goal(state) {
            break state;
        }

        nbuf.clear();
        pather.neighbors(state, &mut nbuf);
        for &next in &nbuf {
            let tentative = g + pather.cost(state, next);
            if best.get(&next).is_some_and(|&known| known <= tentative) {
                continue;
            }
            best.insert(next, tentative);
            parents.insert(next, state);
            open.push(Entry {
                f: tentative + estimate(next),
                g: tentative,
                state: next,
            });
        }
    };

    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&parent) = parents.get(&current) {
        path.push(parent);
        current = parent;
    }
    path.reverse();

    let cost = best[&goal];
    tracing::debug!(cost, steps = path.len(), "goal reached");
    Some(ShortestPath { cost, goal, path })
}
