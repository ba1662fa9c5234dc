use aoc_utils::{bfs, Connectivity, Grid, Pather, Point};
use miette::*;
use nom::{
    character::complete::{char, i32, line_ending},
    combinator::{all_consuming, map},
    multi::separated_list1,
    sequence::separated_pair,
    Finish, IResult,
};

/// Side length of the real memory space.
pub const SIZE: usize = 71;
/// Bytes that have fallen before the Part 1 walk.
pub const FALLEN: usize = 1024;

fn byte(input: &str) -> IResult<&str, Point> {
    map(separated_pair(i32, char(','), i32), |(x, y)| Point::new(x, y))(input)
}

/// Parses the `x,y` list of falling bytes, in falling order.
pub fn parse(input: &str) -> Result<Vec<Point>> {
    let (_, bytes) = all_consuming(separated_list1(line_ending, byte))(input.trim())
        .finish()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;
    Ok(bytes)
}

/// The memory space with some bytes corrupted.
pub struct MemorySpace {
    corrupted: Grid<bool>,
}

impl MemorySpace {
    pub fn new(size: usize, bytes: &[Point]) -> Result<Self> {
        let mut corrupted = Grid::filled(size, size, false);
        for &b in bytes {
            corrupted.set(b, true)?;
        }
        Ok(Self { corrupted })
    }

    pub fn exit(&self) -> Point {
        Point::new(
            self.corrupted.width() as i32 - 1,
            self.corrupted.height() as i32 - 1,
        )
    }

    /// Fewest steps from the top-left corner to the exit.
    pub fn shortest_exit(&self) -> Option<u64> {
        let exit = self.exit();
        if self.corrupted.get(Point::ZERO) != Some(&false) {
            return None;
        }
        bfs(self, Point::ZERO, |p| p == exit).distance_to_goal()
    }
}

impl Pather for MemorySpace {
    type State = Point;

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(
            self.corrupted
                .neighbors(p, Connectivity::Four)
                .filter(|&n| self.corrupted.get(n) == Some(&false)),
        );
    }
}

#[cfg(test)]
pub(crate) const EXAMPLE: &str = "5,4
4,2
4,5
3,0
2,1
6,3
2,4
1,5
0,6
3,3
2,6
5,1
1,2
5,5
2,5
6,5
1,4
0,4
6,4
1,1
6,1
1,0
0,5
1,6
2,0";
