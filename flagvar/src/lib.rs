//! flagvar, a typed flag registry for command-line programs.
//!
//! Declare named options bound to your own variables, run one parse pass over
//! the argument vector, and read the results straight from your storage:
//!
//! ```
//! use flagvar::Parser;
//!
//! let mut count = 0;
//! let mut parser = Parser::new();
//! parser.int_var(&mut count, "count", 42, "number of things");
//!
//! let outcome = parser.parse(&["--count", "5"]);
//! drop(parser);
//!
//! assert!(outcome.should_continue());
//! assert_eq!(count, 5);
//! ```
#![deny(missing_docs)]

pub use flagvar_parser as parser;

pub use parser::{Help, Kind, Outcome, Parser, Value, ValueError};

/// Defines the possible errors that may occur during usage of the crate.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An option value failed to convert to its declared kind.
    #[error(transparent)]
    Value(#[from] parser::ValueError),
}
