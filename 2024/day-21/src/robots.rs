use std::collections::HashMap;

use chumsky::prelude::*;
use miette::*;

use crate::keypad::Keypad;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum Pad {
    Numeric,
    Directional,
}

fn codes<'a>() -> impl Parser<'a, &'a str, Vec<&'a str>, extra::Err<Rich<'a, char>>> {
    one_of("0123456789A")
        .repeated()
        .at_least(1)
        .to_slice()
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

/// Parses one door code per line.
pub fn parse(input: &str) -> Result<Vec<&str>> {
    codes()
        .parse(input.trim())
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}

/// A numeric keypad operated through `depth` directional-keypad robots, the
/// last of which is driven by a human.
///
/// Both memo tables are owned by the chain and reused across codes.
pub struct Chain {
    depth: usize,
    numeric: Keypad,
    directional: Keypad,
    routes: HashMap<(Pad, char, char), Vec<String>>,
    presses: HashMap<(char, char, usize), u64>,
}

impl Chain {
    pub fn new(depth: usize) -> Result<Self> {
        Ok(Self {
            depth,
            numeric: Keypad::numeric()?,
            directional: Keypad::directional()?,
            routes: HashMap::new(),
            presses: HashMap::new(),
        })
    }

    fn routes(&mut self, pad: Pad, from: char, to: char) -> Result<Vec<String>> {
        if let Some(routes) = self.routes.get(&(pad, from, to)) {
            return Ok(routes.clone());
        }
        let routes = match pad {
            Pad::Numeric => self.numeric.routes(from, to)?,
            Pad::Directional => self.directional.routes(from, to)?,
        };
        self.routes.insert((pad, from, to), routes.clone());
        Ok(routes)
    }

    /// Human presses needed for the robot `depth` levels down to type
    /// `sequence` on its directional keypad, starting from `A`.
    fn sequence_cost(&mut self, sequence: &str, depth: usize) -> Result<u64> {
        if depth == 0 {
            return Ok(sequence.len() as u64);
        }
        let mut total = 0;
        let mut current = 'A';
        for key in sequence.chars() {
            total += self.press_cost(current, key, depth)?;
            current = key;
        }
        Ok(total)
    }

    fn press_cost(&mut self, from: char, to: char, depth: usize) -> Result<u64> {
        if let Some(&cost) = self.presses.get(&(from, to, depth)) {
            return Ok(cost);
        }
        let mut best = u64::MAX;
        for route in self.routes(Pad::Directional, from, to)? {
            best = best.min(self.sequence_cost(&route, depth - 1)?);
        }
        self.presses.insert((from, to, depth), best);
        Ok(best)
    }

    /// Fewest human presses that make the numeric keypad robot type `code`.
    pub fn code_length(&mut self, code: &str) -> Result<u64> {
        let mut total = 0;
        let mut current = 'A';
        for key in code.chars() {
            let mut best = u64::MAX;
            for route in self.routes(Pad::Numeric, current, key)? {
                best = best.min(self.sequence_cost(&route, self.depth)?);
            }
            total += best;
            current = key;
        }
        Ok(total)
    }

    /// Sequence length times the numeric part of the code.
    pub fn complexity(&mut self, code: &str) -> Result<u64> {
        let value: u64 = code
            .chars()
            .filter(char::is_ascii_digit)
            .collect::<String>()
            .parse()
            .into_diagnostic()?;
        Ok(self.code_length(code)? * value)
    }

    /// Sum of complexities over every code.
    pub fn total_complexity(&mut self, codes: &[&str]) -> Result<u64> {
        codes.iter().map(|code| self.complexity(code)).sum()
    }
}

#[cfg(test)]
pub(crate) const EXAMPLE: &str = "029A
980A
179A
456A
379A
";

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_codes() -> Result<()> {
        assert_eq!(parse(EXAMPLE)?, vec!["029A", "980A", "179A", "456A", "379A"]);
        assert!(parse("02xA").is_err());
        Ok(())
    }

    #[rstest]
    #[case("029A", 68, 1972)]
    #[case("980A", 60, 58800)]
    #[case("179A", 68, 12172)]
    #[case("456A", 64, 29184)]
    #[case("379A", 64, 24256)]
    fn example_complexities(
        #[case] code: &str,
        #[case] length: u64,
        #[case] complexity: u64,
    ) -> Result<()> {
        let mut chain = Chain::new(2)?;
        assert_eq!(chain.code_length(code)?, length);
        assert_eq!(chain.complexity(code)?, complexity);
        Ok(())
    }

    #[rstest]
    #[case(0, 12)]
    #[case(1, 28)]
    fn shallower_chains(#[case] depth: usize, #[case] length: u64) -> Result<()> {
        // "<A^A>^^AvvvA" is typed directly at depth zero.
        assert_eq!(Chain::new(depth)?.code_length("029A")?, length);
        Ok(())
    }
}
