mod presents;

pub mod part1;
