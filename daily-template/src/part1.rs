use aoc_utils::{bfs, Connectivity, Grid, Pather, Point};
use miette::*;

struct Map {
    walls: Grid<bool>,
}

impl Pather for Map {
    type State = Point;

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(
            self.walls
                .neighbors(p, Connectivity::Four)
                .filter(|&n| self.walls.get(n) == Some(&false)),
        );
    }
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let chars = Grid::parse(input, Some)?;
    let start = chars.require('S', |&c| c == 'S')?;
    let end = chars.require('E', |&c| c == 'E')?;
    let map = Map {
        walls: chars.map(|&c| c == '#'),
    };

    let steps = bfs(&map, start, |p| p == end)
        .distance_to_goal()
        .ok_or_else(|| miette!("The end is unreachable"))?;
    Ok(steps.to_string())
}
