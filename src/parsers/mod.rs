//! Go source parsing

pub mod go_parser;

pub use go_parser::{GoParser, ParserPool};
