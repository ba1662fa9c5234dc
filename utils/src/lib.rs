//! Shared helpers for grid puzzles.
//!
//! The crate is split the same way every grid solution is: a [`Grid`] holds
//! the parsed map, a [`Pather`] implementation describes which moves are
//! legal from a search state, one of the traversal functions in [`search`]
//! walks the resulting graph, and [`aggregate`] reduces what it found to the
//! number the puzzle asks for.
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | [`bfs`], [`flood_fill`], [`enumerate_paths`], [`count_paths`] |
//! | [`WeightedPather`] : [`Pather`] | [`dijkstra`], [`dijkstra_map`] |
//! | [`AstarPather`] : [`WeightedPather`] | [`astar`], [`all_optimal_paths`] |

pub mod aggregate;
mod direction;
pub mod distance;
mod error;
mod grid;
pub mod search;
pub mod telemetry;
mod traits;

pub use direction::{Connectivity, Direction};
pub use error::{GridError, SearchError};
pub use grid::{Grid, Point};
pub use search::{
    all_optimal_paths, astar, bfs, count_paths, dijkstra, dijkstra_map, enumerate_paths,
    flood_fill, Bfs, DistanceMap, OptimalPaths, ShortestPath,
};
pub use traits::{AstarPather, Pather, WeightedPather};
