use miette::*;

use crate::rolls::Floor;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let floor = Floor::parse(input)?;
    Ok(floor.clear()?.to_string())
}
