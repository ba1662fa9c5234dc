use aoc_utils::aggregate::covered;
use aoc_utils::all_optimal_paths;
use miette::*;

use crate::maze::Maze;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let maze = Maze::parse(input)?;

    let routes = all_optimal_paths(&maze, maze.start(), |r| maze.is_end(r))
        .ok_or_else(|| miette!("No route from 'S' to 'E'"))?;

    // Turning in place revisits a tile, so count positions rather than states.
    let tiles = covered(&routes, |r| r.pos);
    tracing::debug!(cost = routes.cost, tiles = tiles.len(), "best seats found");

    Ok(tiles.len().to_string())
}
