mod keypad;
mod robots;

pub mod part1;
pub mod part2;
