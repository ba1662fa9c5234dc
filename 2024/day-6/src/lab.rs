use std::collections::HashSet;

use aoc_utils::{bfs, flood_fill, Direction, Grid, Pather, Point};
use miette::*;

/// Where the guard stands and which way they face.
pub type Guard = (Point, Direction);

pub struct Lab {
    walls: Grid<bool>,
    start: Point,
}

impl Lab {
    pub fn parse(input: &str) -> Result<Self> {
        let chars = Grid::parse(input, |c| matches!(c, '.' | '#' | '^').then_some(c))?;
        let start = chars.require('^', |&c| c == '^')?;
        let walls = chars.map(|&c| c == '#');
        Ok(Self { walls, start })
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn patrol(&self) -> Patrol<'_> {
        Patrol {
            lab: self,
            obstruction: None,
        }
    }

    /// The same lab with one extra obstruction, without copying the grid.
    pub fn obstructed(&self, at: Point) -> Patrol<'_> {
        Patrol {
            lab: self,
            obstruction: Some(at),
        }
    }
}

/// The guard's route through a lab, optionally with an added obstruction.
pub struct Patrol<'a> {
    lab: &'a Lab,
    obstruction: Option<Point>,
}

impl Patrol<'_> {
    fn blocked(&self, p: Point) -> bool {
        self.obstruction == Some(p) || self.lab.walls.get(p) == Some(&true)
    }

    /// The guard's next state, or `None` once they step off the map.
    ///
    /// Turning in place is folded into the step. A guard boxed in on all four
    /// sides stays where they are, which reads as a loop.
    fn next(&self, (pos, mut facing): Guard) -> Option<Guard> {
        for _ in 0..4 {
            let ahead = pos + facing.offset();
            if !self.lab.walls.in_bounds(ahead) {
                return None;
            }
            if !self.blocked(ahead) {
                return Some((ahead, facing));
            }
            facing = facing.turn_right();
        }
        Some((pos, facing))
    }

    fn initial(&self) -> Guard {
        (self.lab.start, Direction::North)
    }

    /// Distinct cells the guard covers before leaving.
    pub fn visited(&self) -> HashSet<Point> {
        flood_fill(self, [self.initial()])
            .into_keys()
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Whether the guard walks forever.
    ///
    /// The walk is deterministic, so it loops exactly when no reachable state
    /// leads off the map.
    pub fn loops(&self) -> bool {
        bfs(self, self.initial(), |guard| self.next(guard).is_none())
            .goal
            .is_none()
    }
}

impl Pather for Patrol<'_> {
    type State = Guard;

    fn neighbors(&self, guard: Guard, buf: &mut Vec<Guard>) {
        buf.extend(self.next(guard));
    }
}

#[cfg(test)]
pub(crate) const EXAMPLE: &str = "....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn finds_the_guard() -> Result<()> {
        assert_eq!(Lab::parse(EXAMPLE)?.start(), Point::new(4, 6));
        assert!(Lab::parse("....\n.#..").is_err());
        Ok(())
    }

    #[test]
    fn unobstructed_patrol_leaves() -> Result<()> {
        let lab = Lab::parse(EXAMPLE)?;
        assert!(!lab.patrol().loops());
        assert_eq!(lab.patrol().visited().len(), 41);
        Ok(())
    }

    #[rstest]
    #[case(Point::new(3, 6))]
    #[case(Point::new(6, 7))]
    #[case(Point::new(7, 7))]
    #[case(Point::new(1, 8))]
    #[case(Point::new(3, 8))]
    #[case(Point::new(7, 9))]
    fn loop_obstructions(#[case] at: Point) -> Result<()> {
        assert!(Lab::parse(EXAMPLE)?.obstructed(at).loops());
        Ok(())
    }

    #[test]
    fn boxed_in_guard_never_leaves() -> Result<()> {
        let lab = Lab::parse(".#.\n#^#\n...")?;
        assert!(lab.obstructed(Point::new(1, 2)).loops());
        assert!(!lab.patrol().loops());
        Ok(())
    }
}
