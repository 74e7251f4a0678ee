//! Registry-first command-line parsing: declare typed options bound to
//! caller-owned destinations, then run a single parse pass over the raw
//! argument vector.

pub mod lexer;
pub mod option;
pub mod parser;

pub use lexer::{Token, Tokens};
pub use option::{Kind, Value};
pub use parser::{Help, Outcome, Parser, ValueError};
