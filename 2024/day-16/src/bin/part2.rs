use miette::*;

use aoc2024_day_16::part2;

fn main() -> Result<()> {
    aoc_utils::telemetry::init();
    let input = include_str!("../../input2.txt");
    let result = part2::process(input)?;
    println!("Result: {}", result);
    Ok(())
}
