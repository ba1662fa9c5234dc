//! Reductions from traversal output to puzzle answers.

use std::collections::HashSet;
use std::hash::Hash;

use crate::search::{DistanceMap, OptimalPaths};

/// Distinct keys (usually cells) touched by any optimal route.
pub fn covered<S, K>(routes: &OptimalPaths<S>, key: impl Fn(S) -> K) -> HashSet<K>
where
    S: Copy + Eq + Hash,
    K: Eq + Hash,
{
    routes.states().into_iter().map(key).collect()
}

/// Reached states satisfying `pred`.
pub fn count_matching<S: Copy>(map: &DistanceMap<S>, pred: impl Fn(S) -> bool) -> usize {
    map.keys().filter(|&&s| pred(s)).count()
}

/// Sums one independent traversal per start state.
pub fn sum_over_starts<S>(starts: impl IntoIterator<Item = S>, run: impl Fn(S) -> u64) -> u64 {
    starts.into_iter().map(run).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::fixtures::Walls;
    use crate::search::{all_optimal_paths, flood_fill};
    use crate::Point;

    #[test]
    fn covered_cells_include_both_endpoints() {
        let walls = Walls::open(3, 2);
        let end = walls.end;
        let routes = all_optimal_paths(&walls, walls.start, |p| p == end).unwrap();
        let cells = covered(&routes, |p| p);
        assert!(cells.contains(&walls.start) && cells.contains(&end));
        assert!(cells.len() as u64 >= routes.cost + 1);
    }

    #[test]
    fn reductions_over_a_flood_fill() {
        let walls = Walls::open(4, 4);
        let map = flood_fill(&walls, [Point::ZERO]);
        assert_eq!(count_matching(&map, |p| p.x == p.y), 4);

        let corners = [Point::ZERO, Point::new(3, 3)];
        let total = sum_over_starts(corners, |s| flood_fill(&walls, [s]).len() as u64);
        assert_eq!(total, 32);
    }
}
