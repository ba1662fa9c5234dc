use indicatif::ParallelProgressIterator;
use itertools::Itertools;
use miette::*;
use rayon::prelude::*;

use crate::lab::Lab;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let lab = Lab::parse(input)?;

    // An obstruction off the unobstructed route never changes it.
    let candidates = lab
        .patrol()
        .visited()
        .into_iter()
        .filter(|&p| p != lab.start())
        .collect_vec();
    tracing::debug!(candidates = candidates.len(), "checking obstructions");

    let loops = candidates
        .par_iter()
        .progress_count(candidates.len() as u64)
        .filter(|&&at| lab.obstructed(at).loops())
        .count();

    Ok(loops.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lab::EXAMPLE;

    #[test]
    fn it_works() -> Result<()> {
        assert_eq!("6", process(EXAMPLE)?);
        Ok(())
    }
}
