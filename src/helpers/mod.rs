//! Formatting helpers shared by the generator and commands

mod date;

pub use date::*;
