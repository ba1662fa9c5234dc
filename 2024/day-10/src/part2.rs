use aoc_utils::enumerate_paths;
use miette::*;
use rayon::prelude::*;

use crate::topo::TopoMap;

/// Sum of trailhead ratings: the number of distinct hiking trails from each
/// trailhead to any peak.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let map = TopoMap::parse(input)?;

    let total: usize = map
        .trailheads()
        .par_iter()
        .map(|&head| enumerate_paths(&map, head, |p| map.is_peak(p)).len())
        .sum();

    Ok(total.to_string())
}
