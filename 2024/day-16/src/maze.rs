use aoc_utils::distance::manhattan;
use aoc_utils::{AstarPather, Direction, Grid, Pather, Point, WeightedPather};
use miette::*;

const STEP_COST: u64 = 1;
const TURN_COST: u64 = 1000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Tile {
    Wall,
    Open,
}

/// Position plus facing: turning in place is a move of its own.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Reindeer {
    pub pos: Point,
    pub facing: Direction,
}

pub struct Maze {
    tiles: Grid<Tile>,
    start: Point,
    end: Point,
}

impl Maze {
    pub fn parse(input: &str) -> Result<Self> {
        let chars = Grid::parse(input, |c| matches!(c, '#' | '.' | 'S' | 'E').then_some(c))?;
        let start = chars.require('S', |&c| c == 'S')?;
        let end = chars.require('E', |&c| c == 'E')?;
        let tiles = chars.map(|&c| if c == '#' { Tile::Wall } else { Tile::Open });

        Ok(Self { tiles, start, end })
    }

    /// The reindeer always starts facing East.
    pub fn start(&self) -> Reindeer {
        Reindeer {
            pos: self.start,
            facing: Direction::East,
        }
    }

    pub fn is_end(&self, r: Reindeer) -> bool {
        r.pos == self.end
    }
}

impl Pather for Maze {
    type State = Reindeer;

    fn neighbors(&self, r: Reindeer, buf: &mut Vec<Reindeer>) {
        let ahead = r.pos + r.facing.offset();
        if self.tiles.get(ahead) == Some(&Tile::Open) {
            buf.push(Reindeer { pos: ahead, ..r });
        }
        for facing in [r.facing.turn_left(), r.facing.turn_right()] {
            buf.push(Reindeer { facing, ..r });
        }
    }
}

impl WeightedPather for Maze {
    fn cost(&self, from: Reindeer, to: Reindeer) -> u64 {
        if from.facing == to.facing {
            STEP_COST
        } else {
            TURN_COST
        }
    }
}

impl AstarPather for Maze {
    fn estimate(&self, r: Reindeer) -> u64 {
        manhattan(r.pos, self.end) as u64 * STEP_COST
    }
}

#[cfg(test)]
pub(crate) const SMALL: &str = "###############
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_end_is_rejected() {
        let input = "#####\n#S..#\n#####";
        assert!(Maze::parse(input).is_err());
    }

    #[test]
    fn turning_is_always_possible() -> Result<()> {
        let maze = Maze::parse(SMALL)?;
        let mut buf = Vec::new();
        maze.neighbors(maze.start(), &mut buf);
        assert_eq!(buf.len(), 3);
        assert_eq!(maze.cost(maze.start(), buf[0]), STEP_COST);
        assert_eq!(maze.cost(maze.start(), buf[1]), TURN_COST);
        Ok(())
    }
}
