use aoc_utils::aggregate::{count_matching, sum_over_starts};
use aoc_utils::flood_fill;
use miette::*;

use crate::topo::TopoMap;

/// Sum of trailhead scores: the number of distinct peaks each trailhead reaches.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let map = TopoMap::parse(input)?;
    let trailheads = map.trailheads();
    tracing::debug!(count = trailheads.len(), "trailheads found");

    let total = sum_over_starts(trailheads, |head| {
        let reached = flood_fill(&map, [head]);
        count_matching(&reached, |p| map.is_peak(p)) as u64
    });

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topo::LARGER;
    use rstest::rstest;

    #[rstest]
    #[case(
        "0123
1234
8765
9876",
        "1"
    )]
    #[case(LARGER, "36")]
    fn it_works(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }
}
