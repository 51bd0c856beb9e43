#![doc = include_str!("../README.md")]
#![warn(clippy::all, missing_docs)]
#![allow(clippy::module_name_repetitions)]

/// Request/response surface consumed by the front end.
pub mod api;
/// Error taxonomy of the engine.
pub mod errors;
/// Types and functions to represent and print formulas.
pub mod formulas;
/// Functions, predicates, and transformations for formulas.
pub mod operations;
/// Lexer and parser for formula text.
pub mod parser;
/// Additional utility.
pub mod util;
