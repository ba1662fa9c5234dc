use miette::*;

use crate::memory::{parse, MemorySpace, FALLEN, SIZE};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    process_with(input, SIZE, FALLEN)
}

pub fn process_with(input: &str, size: usize, fallen: usize) -> Result<String> {
    let bytes = parse(input)?;
    let fallen = &bytes[..fallen.min(bytes.len())];

    let steps = MemorySpace::new(size, fallen)?
        .shortest_exit()
        .ok_or_else(|| miette!("Exit is unreachable after {} bytes", fallen.len()))?;

    Ok(steps.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::EXAMPLE;

    #[test]
    fn it_works() -> Result<()> {
        assert_eq!("22", process_with(EXAMPLE, 7, 12)?);
        Ok(())
    }

    #[test]
    fn shipped_input_runs_at_its_own_size() -> Result<()> {
        assert_eq!("22", process_with(include_str!("../input1.txt"), 7, 12)?);
        Ok(())
    }
}
