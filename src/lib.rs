//! # probscript
//!
//! probscript is a small interpreted language for probabilistic simulation
//! scripts. A script draws random numbers, collects them into named samples
//! and asks for descriptive statistics over those samples.
//!
//! ```
//! let mut out = Vec::new();
//! probscript::run_source("repeat 3 { collect s uniform() }\nprint get_stat(\"count\", s)\n",
//!                        123,
//!                        &mut out).unwrap();
//!
//! assert_eq!(String::from_utf8(out).unwrap(), "3\n");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    ast::Program,
    error::Error,
    interpreter::{evaluator::core::Interpreter, parser::core::Parser},
};

/// Defines the structure of parsed code.
///
/// Expressions, statements, blocks and operators as produced by the parser
/// and walked by the evaluator. Every node records the line it started on.
pub mod ast;
/// Provides unified error types for every phase.
///
/// One module per phase (lexing, parsing, execution, statistics) plus the
/// top-level [`Error`](error::Error) returned by the public entry points.
pub mod error;
/// Lexer, parser, environment, values and evaluator.
pub mod interpreter;
/// Built-in scenario suite run by the command line driver.
pub mod selftest;
/// Pure descriptive statistics over slices of numbers.
pub mod statistics;
/// General utilities for safe numeric conversion.
pub mod util;

/// Parses a whole script.
///
/// # Errors
/// Returns [`Error::Lex`] for malformed tokens and [`Error::Parse`] for
/// syntax errors. No partial program is returned.
///
/// # Examples
/// ```
/// use probscript::{error::Error, parse_program};
///
/// let program = parse_program("x = 1 + 2 * 3\nprint x\n").unwrap();
/// assert_eq!(program.statements.len(), 2);
///
/// assert!(matches!(parse_program("x = 1 @ 2"), Err(Error::Lex(_))));
/// assert!(matches!(parse_program("x 1"), Err(Error::Parse(_))));
/// ```
pub fn parse_program(source: &str) -> Result<Program, Error> {
    Ok(Parser::new(source)?.parse_program()?)
}

/// Parses `source` and executes it on a fresh interpreter seeded with
/// `seed`, writing `print` output to `out`.
///
/// Nothing is executed unless the whole script parses.
///
/// # Errors
/// Returns the first lexical, syntax or runtime error.
///
/// # Examples
/// ```
/// use probscript::{error::Error, run_source};
///
/// let mut out = Vec::new();
/// run_source("x = 3\ny = x * 2\nprint y\n", 123, &mut out).unwrap();
/// assert_eq!(out, b"6\n");
///
/// let err = run_source("x = 1 / 0", 123, &mut std::io::sink()).unwrap_err();
/// assert!(matches!(err, Error::Runtime(_)));
/// ```
pub fn run_source<W: Write>(source: &str, seed: u64, out: &mut W) -> Result<(), Error> {
    let program = parse_program(source)?;
    Interpreter::new(seed).execute_program(&program, out)?;
    Ok(())
}
