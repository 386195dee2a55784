aoc_launcher::register_year!(2025);

pub mod day_01;
