use std::collections::{HashMap, HashSet};

use crate::error::SearchError;
use crate::traits::Pather;

/// Every simple path from `start` to a goal state.
///
/// A state may appear on many paths but never twice on the same one; this is
/// the path-local counterpart to the globally visited set used by [`bfs`].
/// Paths stop at the first goal they reach.
///
/// [`bfs`]: crate::search::bfs
pub fn enumerate_paths<P: Pather>(
    pather: &P,
    start: P::State,
    is_goal: impl Fn(P::State) -> bool,
) -> Vec<Vec<P::State>> {
    let mut found = Vec::new();
    let mut stack = vec![vec![start]];
    let mut nbuf = Vec::new();

    while let Some(path) = stack.pop() {
        let head = path[path.len() - 1];
        if is_goal(head) {
            found.push(path);
            continue;
        }

        nbuf.clear();
        pather.neighbors(head, &mut nbuf);
        // Reversed so the first neighbour is explored first.
        for &next in nbuf.iter().rev() {
            if path.contains(&next) {
                continue;
            }
            let mut branch = path.clone();
            branch.push(next);
            stack.push(branch);
        }
    }

    found
}

enum Frame<S> {
    Enter(S),
    Exit(S),
}

/// Number of distinct paths from `start` to a goal state in an acyclic graph.
///
/// Sub-results are memoised per state in a table that lives only for this
/// call. Paths stop at the first goal they reach. Fails with
/// [`SearchError::Cycle`] if a state can reach itself, and with
/// [`SearchError::Overflow`] if the count does not fit in a `u128`.
#[tracing::instrument(level = "trace", skip_all)]
pub fn count_paths<P: Pather>(
    pather: &P,
    start: P::State,
    is_goal: impl Fn(P::State) -> bool,
) -> Result<u128, SearchError> {
    let mut memo: HashMap<P::State, u128> = HashMap::new();
    let mut open: HashSet<P::State> = HashSet::new();
    let mut stack = vec![Frame::Enter(start)];
    let mut nbuf = Vec::new();

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(state) => {
                if memo.contains_key(&state) {
                    continue;
                }
                if is_goal(state) {
                    memo.insert(state, 1);
                    continue;
                }
                if !open.insert(state) {
                    return Err(SearchError::Cycle);
                }
                stack.push(Frame::Exit(state));

                nbuf.clear();
                pather.neighbors(state, &mut nbuf);
                for &next in &nbuf {
                    if open.contains(&next) {
                        return Err(SearchError::Cycle);
                    }
                    if !memo.contains_key(&next) {
                        stack.push(Frame::Enter(next));
                    }
                }
            }
            Frame::Exit(state) => {
                nbuf.clear();
                pather.neighbors(state, &mut nbuf);
                let total = nbuf.iter().try_fold(0u128, |total, next| {
                    total
                        .checked_add(memo.get(next).copied().unwrap_or(0))
                        .ok_or(SearchError::Overflow)
                })?;
                memo.insert(state, total);
                open.remove(&state);
            }
        }
    }

    tracing::trace!(states = memo.len(), "path counts memoised");
    Ok(memo.get(&start).copied().unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::fixtures::Walls;
    use crate::{Grid, Point};
    use rstest::rstest;

    /// Moves only right or down.
    struct Staircase(Grid<bool>);

    impl Pather for Staircase {
        type State = Point;

        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            for next in [p + Point::X, p + Point::Y] {
                if self.0.get(next) == Some(&false) {
                    buf.push(next);
                }
            }
        }
    }

    #[test]
    fn counts_lattice_paths_without_enumerating() {
        let stairs = Staircase(Grid::filled(11, 11, false));
        let corner = Point::new(10, 10);
        // C(20, 10)
        assert_eq!(count_paths(&stairs, Point::ZERO, |p| p == corner), Ok(184_756));
    }

    #[test]
    fn counting_agrees_with_enumeration() {
        let mut grid = Grid::filled(5, 4, false);
        grid.set(Point::new(2, 1), true).unwrap();
        grid.set(Point::new(1, 3), true).unwrap();
        let stairs = Staircase(grid);
        let corner = Point::new(4, 3);

        let paths = enumerate_paths(&stairs, Point::ZERO, |p| p == corner);
        let counted = count_paths(&stairs, Point::ZERO, |p| p == corner).unwrap();
        assert_eq!(paths.len() as u128, counted);
        assert!(paths.iter().all(|p| p[0] == Point::ZERO && p[p.len() - 1] == corner));
    }

    #[test]
    fn path_local_blocking_allows_shared_cells() {
        // Both simple routes around a 2x2 block share the corners.
        let walls = Walls::open(2, 2);
        let paths = enumerate_paths(&walls, Point::ZERO, |p| p == Point::ONE);
        assert_eq!(paths.len(), 2);
        assert!(paths.iter().all(|p| p.len() == 3));
    }

    #[test]
    fn cycles_are_rejected() {
        let walls = Walls::open(3, 1);
        assert_eq!(
            count_paths(&walls, Point::ZERO, |p| p == Point::new(2, 0)),
            Err(SearchError::Cycle)
        );
    }

    /// Two states per level, each linked to both states of the next level.
    struct Ladder {
        levels: u32,
    }

    impl Pather for Ladder {
        type State = (u32, bool);

        fn neighbors(&self, (level, _): (u32, bool), buf: &mut Vec<(u32, bool)>) {
            if level < self.levels {
                buf.extend([(level + 1, false), (level + 1, true)]);
            }
        }
    }

    #[rstest]
    #[case(64, Ok(1 << 64))]
    #[case(100, Ok(1 << 100))]
    #[case(127, Ok(1 << 127))]
    #[case(128, Err(SearchError::Overflow))]
    fn counts_beyond_u64(#[case] levels: u32, #[case] expected: Result<u128, SearchError>) {
        let ladder = Ladder { levels };
        let count = count_paths(&ladder, (0, false), |(level, _)| level == levels);
        assert_eq!(count, expected);
    }

    #[test]
    fn unreachable_goal_counts_zero() {
        let stairs = Staircase(Grid::filled(3, 3, false));
        assert_eq!(count_paths(&stairs, Point::ONE, |p| p == Point::ZERO), Ok(0));
        assert!(enumerate_paths(&stairs, Point::ONE, |p| p == Point::ZERO).is_empty());
    }
}
