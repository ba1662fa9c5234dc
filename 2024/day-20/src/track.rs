use aoc_utils::distance::manhattan;
use aoc_utils::{flood_fill, Connectivity, DistanceMap, Grid, Pather, Point};
use miette::*;

/// Picoseconds a cheat has to save to be worth counting.
pub const MIN_SAVING: u64 = 100;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Tile {
    Wall,
    Track,
}

pub struct RaceTrack {
    tiles: Grid<Tile>,
    start: Point,
    end: Point,
}

impl RaceTrack {
    pub fn parse(input: &str) -> Result<Self> {
        let chars = Grid::parse(input, |c| matches!(c, '#' | '.' | 'S' | 'E').then_some(c))?;
        let start = chars.require('S', |&c| c == 'S')?;
        let end = chars.require('E', |&c| c == 'E')?;
        let tiles = chars.map(|&c| if c == '#' { Tile::Wall } else { Tile::Track });

        Ok(Self { tiles, start, end })
    }

    /// Counts cheats of at most `max_cheat` steps that save at least `min_saving`.
    ///
    /// A cheat is identified by its start and end track cells; walls in between
    /// are ignored, so its length is the Manhattan distance between the two.
    pub fn count_cheats(&self, max_cheat: u32, min_saving: u64) -> Result<usize> {
        let from_start = flood_fill(self, [self.start]);
        let to_end = flood_fill(self, [self.end]);
        let honest = *to_end
            .get(&self.start)
            .ok_or_else(|| miette!("The end is unreachable from the start"))?;

        let count = from_start
            .iter()
            .map(|(&from, &elapsed)| {
                self.cheat_targets(from, max_cheat, &to_end)
                    .filter(|&(len, remaining)| {
                        let total = elapsed + len as u64 + remaining;
                        total < honest && honest - total >= min_saving
                    })
                    .count()
            })
            .sum();

        Ok(count)
    }

    /// `(cheat length, remaining distance)` for every track cell within
    /// `max_cheat` of `from` that can still reach the end.
    fn cheat_targets<'a>(
        &'a self,
        from: Point,
        max_cheat: u32,
        to_end: &'a DistanceMap<Point>,
    ) -> impl Iterator<Item = (u32, u64)> + 'a {
        let r = max_cheat as i32;
        (-r..=r)
            .flat_map(move |dy| (-r..=r).map(move |dx| from + Point::new(dx, dy)))
            .filter_map(move |to| {
                let len = manhattan(from, to);
                if len == 0 || len > max_cheat {
                    return None;
                }
                to_end.get(&to).map(|&remaining| (len, remaining))
            })
    }
}

impl Pather for RaceTrack {
    type State = Point;

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(
            self.tiles
                .neighbors(p, Connectivity::Four)
                .filter(|&n| self.tiles.get(n) == Some(&Tile::Track)),
        );
    }
}

#[cfg(test)]
pub(crate) const EXAMPLE: &str = "###############
#...#...#.....#
#.#.#.#.#.###.#
#S#...#.#.#...#
#######.#.#.###
#######.#.#...#
#######.#.###.#
###..E#...#...#
###.#######.###
#...###...#...#
#.#####.#.###.#
#.#...#.#.#...#
#.#.#.#.#.#.###
#...#...#...###
###############";

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn honest_race_takes_84() -> Result<()> {
        let track = RaceTrack::parse(EXAMPLE)?;
        let from_start = flood_fill(&track, [track.start]);
        assert_eq!(from_start[&track.end], 84);
        assert_eq!((track.start, track.end), (Point::new(1, 3), Point::new(5, 7)));
        Ok(())
    }

    #[rstest]
    #[case(2, 2, 44)]
    #[case(2, 20, 5)]
    #[case(2, 64, 1)]
    #[case(2, 65, 0)]
    #[case(20, 50, 285)]
    #[case(20, 74, 7)]
    #[case(20, 76, 3)]
    fn cheat_histogram(
        #[case] max_cheat: u32,
        #[case] min_saving: u64,
        #[case] expected: usize,
    ) -> Result<()> {
        let track = RaceTrack::parse(EXAMPLE)?;
        assert_eq!(track.count_cheats(max_cheat, min_saving)?, expected);
        Ok(())
    }
}
