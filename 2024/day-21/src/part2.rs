use miette::*;

use crate::robots::{parse, Chain};

const ROBOTS: usize = 25;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let codes = parse(input)?;
    let mut chain = Chain::new(ROBOTS)?;
    Ok(chain.total_complexity(&codes)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robots::EXAMPLE;

    #[test]
    fn it_works() -> Result<()> {
        assert_eq!("154115708116294", process(EXAMPLE)?);
        Ok(())
    }
}
