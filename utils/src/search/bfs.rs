use std::collections::{HashMap, VecDeque};

use crate::traits::Pather;

/// Best known cost per reached state.
pub type DistanceMap<S> = HashMap<S, u64>;

/// Outcome of a breadth-first search.
#[derive(Debug, Clone)]
pub struct Bfs<S> {
    /// Step count of every state dequeued or discovered before the search stopped.
    pub distances: DistanceMap<S>,
    /// The first goal state dequeued, if any.
    pub goal: Option<S>,
}

impl<S: Copy + Eq + std::hash::Hash> Bfs<S> {
    /// Length of the shortest path to the goal, or `None` when it is unreachable.
    pub fn distance_to_goal(&self) -> Option<u64> {
        self.goal.and_then(|g| self.distances.get(&g).copied())
    }

    pub fn visited(&self, state: S) -> bool {
        self.distances.contains_key(&state)
    }
}

/// Unweighted shortest path search from `start`.
///
/// Each state is visited at most once; the search stops at the first goal
/// dequeued, which is therefore a closest one.
#[tracing::instrument(level = "trace", skip_all)]
pub fn bfs<P: Pather>(
    pather: &P,
    start: P::State,
    is_goal: impl Fn(P::State) -> bool,
) -> Bfs<P::State> {
    let (distances, goal) = breadth_first(pather, [start], is_goal);
    if goal.is_none() {
        tracing::debug!(visited = distances.len(), "goal unreachable");
    }
    Bfs { distances, goal }
}

/// Multi-source flood fill: step distance to every state reachable from any source.
pub fn flood_fill<P: Pather>(
    pather: &P,
    sources: impl IntoIterator<Item = P::State>,
) -> DistanceMap<P::State> {
    breadth_first(pather, sources, |_| false).0
}

fn breadth_first<P: Pather>(
    pather: &P,
    sources: impl IntoIterator<Item = P::State>,
    is_goal: impl Fn(P::State) -> bool,
) -> (DistanceMap<P::State>, Option<P::State>) {
    let mut distances = DistanceMap::new();
    let mut queue = VecDeque::new();

    for source in sources {
        if distances.insert(source, 0).is_none() {
            queue.push_back(source);
        }
    }

    let mut nbuf = Vec::new();
    while let Some(current) = queue.pop_front() {
        if is_goal(current) {
            return (distances, Some(current));
        }
        let dist = distances[&current];

        nbuf.clear();
        pather.neighbors(current, &mut nbuf);
        for &next in &nbuf {
            if distances.contains_key(&next) {
                continue;
            }
            distances.insert(next, dist + 1);
            queue.push_back(next);
        }
    }

    (distances, None)
}
