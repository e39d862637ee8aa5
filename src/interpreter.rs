/// Holds the state a script mutates while it runs.
///
/// A single flat namespace of variables plus the named, append-only sample
/// collections that `collect` fills and `get_stat` reads.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the tree produced by the parser, evaluating
/// expressions and executing statements against the environment. Random
/// built-ins draw from the interpreter's own seeded generator.
///
/// # Responsibilities
/// - Evaluates expressions and runs statements in source order.
/// - Dispatches built-in calls, including the `get_stat` query.
/// - Reports runtime errors with the line they occurred on.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and hands out tokens one at a time,
/// each tagged with its line and column. Whitespace and `//` comments are
/// skipped.
///
/// # Responsibilities
/// - Recognizes numbers, string literals, identifiers, keywords and
///   operators.
/// - Decodes string escapes.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser that pulls tokens from the lexer and builds a
/// [`Program`](crate::ast::Program). Parsing stops at the first error.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
pub mod value;
