use miette::*;
use rayon::prelude::*;

use crate::presents::{parse, Packer};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let (shapes, regions) = parse(input)?;

    let fits = regions
        .par_iter()
        .map(|region| Ok(Packer::new(&shapes, region)?.is_some_and(|packer| packer.fits())))
        .collect::<Result<Vec<bool>>>()?;

    Ok(fits.into_iter().filter(|&f| f).count().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presents::EXAMPLE;

    #[test]
    fn it_works() -> Result<()> {
        assert_eq!("2", process(EXAMPLE)?);
        Ok(())
    }
}
