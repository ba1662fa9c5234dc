use miette::*;

use crate::manifold::Manifold;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let manifold = Manifold::parse(input)?;
    Ok(manifold.timelines()?.to_string())
}
