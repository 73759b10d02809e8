//! Move notation parsing and resolution

pub mod parser;
mod resolver;

pub use parser::{parse_notation, MoveIntent};
