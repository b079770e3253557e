//! Advent of Code puzzle solutions with automatic registration
//!
//! Each day lives in `src/dayNN/` and registers itself with
//! `#[derive(AutoRegisterSolver)]`. The module declarations are generated by
//! the build script from the directories present, so `aoc scaffold <day>` is
//! all it takes to add a new day.

include!(concat!(env!("OUT_DIR"), "/days.rs"));
