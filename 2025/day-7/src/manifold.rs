use aoc_utils::{count_paths, flood_fill, Grid, Pather, Point};
use miette::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Tile {
    Empty,
    Splitter,
}

/// A tachyon manifold: beams enter at `S` and fall straight down.
pub struct Manifold {
    tiles: Grid<Tile>,
    source: Point,
}

impl Manifold {
    pub fn parse(input: &str) -> Result<Self> {
        let chars = Grid::parse(input, |c| matches!(c, '.' | '^' | 'S').then_some(c))?;
        let source = chars.require('S', |&c| c == 'S')?;
        let tiles = chars.map(|&c| {
            if c == '^' {
                Tile::Splitter
            } else {
                Tile::Empty
            }
        });
        Ok(Self { tiles, source })
    }

    fn splitter(&self, p: Point) -> bool {
        self.tiles.get(p) == Some(&Tile::Splitter)
    }

    fn bottom(&self, p: Point) -> bool {
        p.y as usize + 1 == self.tiles.height()
    }

    /// Splitters at least one beam runs into.
    pub fn splits(&self) -> usize {
        let lit = flood_fill(self, [self.source]);
        self.tiles
            .positions()
            .filter(|&p| self.splitter(p) && lit.contains_key(&(p - Point::Y)))
            .count()
    }

    /// Distinct routes a single particle can take from the source to the
    /// bottom row.
    pub fn timelines(&self) -> Result<u128> {
        Ok(count_paths(self, self.source, |p| self.bottom(p))?)
    }
}

impl Pather for Manifold {
    type State = Point;

    /// One row down, or both sides of a splitter directly below. Sides that
    /// fall off the grid are dropped.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let below = p + Point::Y;
        if !self.tiles.in_bounds(below) {
            return;
        }
        if self.splitter(below) {
            for side in [below - Point::X, below + Point::X] {
                if self.tiles.in_bounds(side) {
                    buf.push(side);
                }
            }
        } else {
            buf.push(below);
        }
    }
}

#[cfg(test)]
pub(crate) const EXAMPLE: &str = ".......S.......
...............
.......^.......
...............
......^.^......
...............
.....^.^.^.....
...............
....^.^...^....
...............
...^.^...^.^...
...............
..^...^.....^..
...............
.^.^.^.^.^...^.
...............
";

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("..S..\n.....\n..^..\n.....", 1, 2)]
    #[case("..S..\n.....\n.....", 0, 1)]
    // The left branch leaves through the side and is lost.
    #[case("S..\n^..\n...", 1, 1)]
    fn small_manifolds(
        #[case] input: &str,
        #[case] splits: usize,
        #[case] timelines: u128,
    ) -> Result<()> {
        let manifold = Manifold::parse(input)?;
        assert_eq!(manifold.splits(), splits);
        assert_eq!(manifold.timelines()?, timelines);
        Ok(())
    }

    #[test]
    fn merged_beams_split_once() -> Result<()> {
        // The inner branches meet above the bottom splitter.
        let manifold = Manifold::parse("..S..\n..^..\n.^.^.\n..^..\n.....")?;
        assert_eq!(manifold.splits(), 4);
        assert_eq!(manifold.timelines()?, 6);
        Ok(())
    }

    /// `levels` rows of splitters forming a full triangle under the source.
    fn triangle(levels: usize) -> String {
        let width = 2 * levels + 3;
        let centre = width / 2;
        let blank = ".".repeat(width);
        let mut rows = vec![];
        let mut source = blank.clone().into_bytes();
        source[centre] = b'S';
        rows.push(String::from_utf8(source).unwrap());
        for level in 0..levels {
            let mut row = blank.clone().into_bytes();
            for k in 0..=level {
                row[centre - level + 2 * k] = b'^';
            }
            rows.push(blank.clone());
            rows.push(String::from_utf8(row).unwrap());
        }
        rows.push(blank);
        rows.join("\n")
    }

    #[rstest]
    #[case(3, 6, 8)]
    #[case(66, 66 * 67 / 2, 1 << 66)]
    fn full_splitter_triangle_doubles_every_level(
        #[case] levels: usize,
        #[case] splits: usize,
        #[case] timelines: u128,
    ) -> Result<()> {
        let manifold = Manifold::parse(&triangle(levels))?;
        assert_eq!(manifold.splits(), splits);
        assert_eq!(manifold.timelines()?, timelines);
        Ok(())
    }

    #[test]
    fn needs_a_source() {
        assert!(Manifold::parse("...\n.^.").is_err());
    }
}
