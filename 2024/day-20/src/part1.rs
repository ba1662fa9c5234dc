use miette::*;

use crate::track::{RaceTrack, MIN_SAVING};

const MAX_CHEAT: u32 = 2;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let track = RaceTrack::parse(input)?;
    Ok(track.count_cheats(MAX_CHEAT, MIN_SAVING)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::EXAMPLE;

    #[test]
    fn it_works() -> Result<()> {
        // No cheat on the example saves 100 picoseconds.
        assert_eq!("0", process(EXAMPLE)?);
        Ok(())
    }
}
