use miette::*;

use crate::memory::{parse, MemorySpace, SIZE};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    process_with(input, SIZE)
}

/// Coordinates of the first byte whose fall cuts the exit off.
///
/// Corrupting more memory never shortens the route, so reachability is
/// monotone in the number of fallen bytes and a binary search over the
/// prefix length finds the first blocking byte.
pub fn process_with(input: &str, size: usize) -> Result<String> {
    let bytes = parse(input)?;

    let reachable = |fallen: usize| -> Result<bool> {
        Ok(MemorySpace::new(size, &bytes[..fallen])?
            .shortest_exit()
            .is_some())
    };

    if reachable(bytes.len())? {
        return Err(miette!("Exit stays reachable after all {} bytes", bytes.len()));
    }

    // Invariant: reachable(lo) && !reachable(hi)
    let (mut lo, mut hi) = (0, bytes.len());
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if reachable(mid)? {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    tracing::debug!(fallen = hi, "exit cut off");

    let blocker = bytes[hi - 1];
    Ok(format!("{},{}", blocker.x, blocker.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::EXAMPLE;

    #[test]
    fn it_works() -> Result<()> {
        assert_eq!("6,1", process_with(EXAMPLE, 7)?);
        Ok(())
    }

    #[test]
    fn shipped_input_runs_at_its_own_size() -> Result<()> {
        assert_eq!("6,1", process_with(include_str!("../input2.txt"), 7)?);
        Ok(())
    }

    #[test]
    fn never_blocked() {
        assert!(process_with("1,1\n2,2", 7).is_err());
    }
}
