use aoc_utils::astar;
use miette::*;

use crate::maze::Maze;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let maze = Maze::parse(input)?;

    let route = astar(&maze, maze.start(), |r| maze.is_end(r))
        .ok_or_else(|| miette!("No route from 'S' to 'E'"))?;

    Ok(route.cost.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::SMALL;

    #[test]
    fn it_works() -> Result<()> {
        assert_eq!("7036", process(SMALL)?);
        Ok(())
    }

    #[test]
    fn walled_in_start_has_no_route() {
        let input = "#####\n#S#E#\n#####";
        assert!(process(input).is_err());
    }
}
