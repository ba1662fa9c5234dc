use miette::*;

use crate::lab::Lab;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let lab = Lab::parse(input)?;
    Ok(lab.patrol().visited().len().to_string())
}
