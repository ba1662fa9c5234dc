use aoc_utils::{Connectivity, Grid, Point};
use itertools::Itertools;
use miette::*;

/// A forklift can reach a roll with fewer neighbouring rolls than this.
const CROWDED: usize = 4;

/// Rolls of paper on the department floor; `true` is a roll.
#[derive(Clone)]
pub struct Floor {
    rolls: Grid<bool>,
}

impl Floor {
    pub fn parse(input: &str) -> Result<Self> {
        let rolls = Grid::parse(input, |c| match c {
            '@' => Some(true),
            '.' => Some(false),
            _ => None,
        })?;
        Ok(Self { rolls })
    }

    fn neighbouring_rolls(&self, p: Point) -> usize {
        self.rolls
            .neighbors(p, Connectivity::Eight)
            .filter(|&n| self.rolls.get(n) == Some(&true))
            .count()
    }

    /// Rolls a forklift can currently reach.
    pub fn accessible(&self) -> Vec<Point> {
        self.rolls
            .iter()
            .filter(|&(_, &roll)| roll)
            .map(|(p, _)| p)
            .filter(|&p| self.neighbouring_rolls(p) < CROWDED)
            .collect_vec()
    }

    /// A copy of the floor with the given rolls taken away.
    fn without(&self, taken: &[Point]) -> Result<Self> {
        let mut rolls = self.rolls.clone();
        for &p in taken {
            rolls.set(p, false)?;
        }
        Ok(Self { rolls })
    }

    /// Removes every accessible roll in rounds until none is left to reach,
    /// returning how many were removed.
    ///
    /// Each round sees the floor as it was when the round began.
    pub fn clear(&self) -> Result<usize> {
        let mut floor = self.clone();
        let mut removed = 0;
        loop {
            let taken = floor.accessible();
            if taken.is_empty() {
                return Ok(removed);
            }
            tracing::trace!(round = taken.len(), "removing rolls");
            removed += taken.len();
            floor = floor.without(&taken)?;
        }
    }
}

#[cfg(test)]
pub(crate) const EXAMPLE: &str = "..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.
";

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("@", 1)]
    #[case("@@@\n@@@\n@@@", 4)]
    #[case("...\n...", 0)]
    fn counts_reachable_rolls(#[case] input: &str, #[case] expected: usize) -> Result<()> {
        assert_eq!(Floor::parse(input)?.accessible().len(), expected);
        Ok(())
    }

    #[test]
    fn first_round_matches_single_pass() -> Result<()> {
        let floor = Floor::parse(EXAMPLE)?;
        let taken = floor.accessible();
        assert_eq!(taken.len(), 13);
        assert_eq!(floor.without(&taken)?.accessible().len(), 12);
        Ok(())
    }

    #[test]
    fn full_block_clears_from_the_corners() -> Result<()> {
        // Corners first, then the edges, then the centre.
        assert_eq!(Floor::parse("@@@\n@@@\n@@@")?.clear()?, 9);
        Ok(())
    }

    #[test]
    fn rejects_unknown_cells() {
        assert!(Floor::parse("@x").is_err());
    }
}
