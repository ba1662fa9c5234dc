use std::iter;

use aoc_utils::distance::manhattan;
use aoc_utils::{
    all_optimal_paths, AstarPather, Connectivity, Direction, Grid, Pather, Point, WeightedPather,
};
use itertools::Itertools;
use miette::*;

const NUMERIC: &str = "789
456
123
#0A";

const DIRECTIONAL: &str = "#^A
<v>";

/// A keypad layout; `None` is the gap the robot arm must never hover over.
pub struct Keypad {
    keys: Grid<Option<char>>,
}

impl Keypad {
    pub fn numeric() -> Result<Self> {
        Self::parse(NUMERIC)
    }

    pub fn directional() -> Result<Self> {
        Self::parse(DIRECTIONAL)
    }

    fn parse(layout: &str) -> Result<Self> {
        let keys = Grid::parse(layout, |c| Some((c != '#').then_some(c)))?;
        Ok(Self { keys })
    }

    fn locate(&self, key: char) -> Result<Point> {
        Ok(self.keys.require(key, |&k| k == Some(key))?)
    }

    /// Every shortest arrow sequence that moves the arm from `from` to `to`
    /// and presses it, sorted.
    pub fn routes(&self, from: char, to: char) -> Result<Vec<String>> {
        let start = self.locate(from)?;
        let target = self.locate(to)?;
        let arm = Arm { pad: self, target };

        let routes = all_optimal_paths(&arm, start, |p| p == target)
            .ok_or_else(|| miette!("Key {to:?} is unreachable from {from:?}"))?;

        Ok(routes
            .paths()
            .iter()
            .map(|path| {
                path.windows(2)
                    .filter_map(|step| Direction::from_offset(step[1] - step[0]))
                    .map(Direction::arrow)
                    .chain(iter::once('A'))
                    .collect::<String>()
            })
            .sorted()
            .collect())
    }
}

/// Arm movement towards one target key.
struct Arm<'a> {
    pad: &'a Keypad,
    target: Point,
}

impl Pather for Arm<'_> {
    type State = Point;

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(
            self.pad
                .keys
                .neighbors(p, Connectivity::Four)
                .filter(|&n| matches!(self.pad.keys.get(n), Some(Some(_)))),
        );
    }
}

impl WeightedPather for Arm<'_> {
    fn cost(&self, _: Point, _: Point) -> u64 {
        1
    }
}

impl AstarPather for Arm<'_> {
    fn estimate(&self, p: Point) -> u64 {
        manhattan(p, self.target) as u64
    }
}
