use aoc_utils::{Connectivity, Grid, Pather, Point};
use miette::*;

pub const TRAILHEAD: u32 = 0;
pub const PEAK: u32 = 9;

/// Height map where a trail climbs exactly one level per step.
pub struct TopoMap {
    heights: Grid<u32>,
}

impl TopoMap {
    pub fn parse(input: &str) -> Result<Self> {
        let heights = Grid::parse(input, |c| c.to_digit(10))?;
        Ok(Self { heights })
    }

    pub fn trailheads(&self) -> Vec<Point> {
        self.heights
            .iter()
            .filter(|&(_, &h)| h == TRAILHEAD)
            .map(|(p, _)| p)
            .collect()
    }

    pub fn is_peak(&self, p: Point) -> bool {
        self.heights.get(p) == Some(&PEAK)
    }
}

impl Pather for TopoMap {
    type State = Point;

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let Some(&height) = self.heights.get(p) else {
            return;
        };
        buf.extend(
            self.heights
                .neighbors(p, Connectivity::Four)
                .filter(|&n| self.heights.get(n) == Some(&(height + 1))),
        );
    }
}

#[cfg(test)]
pub(crate) const LARGER: &str = "89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732";
