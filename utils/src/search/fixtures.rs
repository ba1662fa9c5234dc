//! Small pathers shared by the engine tests.

use crate::distance::manhattan;
use crate::{AstarPather, Connectivity, Direction, Grid, Pather, Point, WeightedPather};

pub(crate) const REINDEER_MAZE: &str = "###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############";

/// `true` marks a wall.
pub(crate) struct Walls {
    pub grid: Grid<bool>,
    pub start: Point,
    pub end: Point,
}

impl Walls {
    pub fn parse(input: &str) -> Self {
        let chars = Grid::parse(input, Some).expect("fixture grid");
        let start = chars.require('S', |&c| c == 'S').expect("fixture start");
        let end = chars.require('E', |&c| c == 'E').expect("fixture end");
        let grid = Grid::parse(input, |c| Some(c == '#')).expect("fixture grid");
        Self { grid, start, end }
    }

    pub fn open(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::filled(width, height, false),
            start: Point::ZERO,
            end: Point::new(width as i32 - 1, height as i32 - 1),
        }
    }

    pub fn is_open(&self, p: Point) -> bool {
        self.grid.get(p) == Some(&false)
    }
}

impl Pather for Walls {
    type State = Point;

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(
            self.grid
                .neighbors(p, Connectivity::Four)
                .filter(|&n| self.is_open(n)),
        );
    }
}

impl WeightedPather for Walls {
    fn cost(&self, _: Point, _: Point) -> u64 {
        1
    }
}

impl AstarPather for Walls {
    fn estimate(&self, p: Point) -> u64 {
        manhattan(p, self.end) as u64
    }
}

/// Facing-aware walker: stepping costs 1, turning in place costs 1000.
pub(crate) struct Reindeer<'a>(pub &'a Walls);

impl Pather for Reindeer<'_> {
    type State = (Point, Direction);

    fn neighbors(&self, (p, facing): Self::State, buf: &mut Vec<Self::State>) {
        let ahead = p + facing.offset();
        if self.0.is_open(ahead) {
            buf.push((ahead, facing));
        }
        buf.push((p, facing.turn_left()));
        buf.push((p, facing.turn_right()));
    }
}

impl WeightedPather for Reindeer<'_> {
    fn cost(&self, (_, from): Self::State, (_, to): Self::State) -> u64 {
        if from == to {
            1
        } else {
            1000
        }
    }
}

impl AstarPather for Reindeer<'_> {
    fn estimate(&self, (p, _): Self::State) -> u64 {
        manhattan(p, self.0.end) as u64
    }
}
