use miette::*;

use crate::robots::{parse, Chain};

const ROBOTS: usize = 2;

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
        assert_eq!("126384", process(EXAMPLE)?);
        Ok(())
    }
}
