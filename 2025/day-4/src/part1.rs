use miette::*;

use crate::rolls::Floor;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let floor = Floor::parse(input)?;
    Ok(floor.accessible().len().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rolls::EXAMPLE;

    #[test]
    fn it_works() -> Result<()> {
        assert_eq!("13", process(EXAMPLE)?);
        Ok(())
    }
}
