//! Configuration types
//!
//! Display settings and a parser for the `[display]` section of a
//! TOML-style configuration file.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ParseError};
pub use types::*;
