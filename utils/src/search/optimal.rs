use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;

use itertools::Itertools;

use super::bfs::DistanceMap;
use super::queue::Entry;
use crate::error::SearchError;
use crate::traits::AstarPather;

/// Every minimal-cost route from a start state to the goal.
///
/// Routes are kept as a predecessor graph: each state on some optimal route
/// records every predecessor that reaches it at its optimal cost. Walking it
/// backwards from [`OptimalPaths::goals`] yields each optimal route exactly
/// once.
#[derive(Debug, Clone)]
pub struct OptimalPaths<S> {
    pub cost: u64,
    pub start: S,
    /// Goal states reached at `cost`, in the order they were finalized.
    pub goals: Vec<S>,
    costs: DistanceMap<S>,
    predecessors: HashMap<S, Vec<S>>,
}

impl<S: Copy + Eq + Hash> OptimalPaths<S> {
    /// States that lie on at least one optimal route.
    pub fn states(&self) -> HashSet<S> {
        let mut seen: HashSet<S> = self.goals.iter().copied().collect();
        let mut stack = self.goals.clone();
        while let Some(state) = stack.pop() {
            for &prev in self.predecessors.get(&state).into_iter().flatten() {
                if seen.insert(prev) {
                    stack.push(prev);
                }
            }
        }
        seen
    }

    /// Number of distinct optimal routes, or [`SearchError::Overflow`] if it
    /// does not fit in a `u128`.
    pub fn count(&self) -> Result<u128, SearchError> {
        let order = self
            .states()
            .into_iter()
            .sorted_by_key(|s| self.costs[s])
            .collect_vec();

        let add = |total: u128, n: u128| total.checked_add(n).ok_or(SearchError::Overflow);

        let mut ways: HashMap<S, u128> = HashMap::with_capacity(order.len());
        for state in order {
            let n = if state == self.start {
                1
            } else {
                self.predecessors
                    .get(&state)
                    .into_iter()
                    .flatten()
                    .try_fold(0, |total, p| add(total, ways.get(p).copied().unwrap_or(0)))?
            };
            ways.insert(state, n);
        }
        self.goals.iter().try_fold(0, |total, g| add(total, ways[g]))
    }

    /// Every optimal route, start to goal.
    ///
    /// The number of routes can grow exponentially with their length; prefer
    /// [`OptimalPaths::states`] or [`OptimalPaths::count`] when the routes
    /// themselves are not needed.
    pub fn paths(&self) -> Vec<Vec<S>> {
        let mut paths = Vec::new();
        let mut stack: Vec<Vec<S>> = self.goals.iter().map(|&g| vec![g]).collect();
        while let Some(suffix) = stack.pop() {
            let head = suffix[suffix.len() - 1];
            if head == self.start {
                paths.push(suffix.into_iter().rev().collect());
                continue;
            }
            for &prev in self.predecessors.get(&head).into_iter().flatten() {
                let mut branch = suffix.clone();
                branch.push(prev);
                stack.push(branch);
            }
        }
        paths
    }
}

/// A* search that keeps every tie at the optimal cost instead of the first
/// route found.
///
/// The estimate must be consistent (never drops by more than an edge's cost),
/// which holds for Manhattan distance on unit-step grids. Returns `None` when
/// no goal is reachable.
#[tracing::instrument(level = "trace", skip_all)]
pub fn all_optimal_paths<P: AstarPather>(
    pather: &P,
    start: P::State,
    is_goal: impl Fn(P::State) -> bool,
) -> Option<OptimalPaths<P::State>> {
    let mut costs = DistanceMap::from([(start, 0)]);
    let mut predecessors: HashMap<P::State, Vec<P::State>> = HashMap::new();
    let mut closed = HashSet::new();
    let mut open = BinaryHeap::from([Entry {
        f: pather.estimate(start),
        g: 0,
        state: start,
    }]);

    let mut optimum = None;
    let mut goals = Vec::new();
    let mut nbuf = Vec::new();

    while let Some(Entry { f, g, state }) = open.pop() {
        if optimum.is_some_and(|best| f > best) {
            break;
        }
        if g > costs[&state] || !closed.insert(state) {
            continue;
        }
        if is_goal(state) {
            optimum = Some(g);
            goals.push(state);
            continue;
        }

        nbuf.clear();
        pather.neighbors(state, &mut nbuf);
        for &next in &nbuf {
            let tentative = g + pather.cost(state, next);
            match costs.get(&next) {
                Some(&known) if tentative > known => {}
                Some(&known) if tentative == known => {
                    predecessors.entry(next).or_default().push(state);
                }
                _ => {
                    costs.insert(next, tentative);
                    predecessors.insert(next, vec![state]);
                    open.push(Entry {
                        f: tentative + pather.estimate(next),
                        g: tentative,
                        state: next,
                    });
                }
            }
        }
    }

    let cost = optimum?;
    tracing::debug!(cost, goals = goals.len(), "optimal routes collected");
    Some(OptimalPaths {
        cost,
        start,
        goals,
        costs,
        predecessors,
    })
}
