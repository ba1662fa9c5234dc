use miette::*;

use aoc2024_day_20::part1;

fn main() -> Result<()> {
    aoc_utils::telemetry::init();
    let input = include_str!("../../input1.txt");
    let result = part1::process(input)?;
    println!("Result: {}", result);
    Ok(())
}
