//! The option registry and the single-pass parser over the argument vector.

use std::fmt;

use log::debug;

use crate::lexer::{Token, Tokens};
use crate::option::{Dest, Kind, TypedOpt, Value};

/// A raw token that could not be converted to its option's declared kind.
///
/// The destination keeps its pre-parse value; failures never abort the pass
/// and are aggregated into [`Outcome::Continue`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for option --{name}: expected {kind}")]
pub struct ValueError {
    /// Name the token was resolved under, without dashes.
    pub name: String,

    /// The raw value exactly as it appeared in the argument vector.
    pub value: String,

    /// The kind the value was expected to convert to.
    pub kind: Kind,
}

/// What the caller should do after a parse pass.
#[derive(Debug, PartialEq)]
#[must_use]
pub enum Outcome {
    /// Destinations are populated; the program proceeds.
    Continue {
        /// One entry per option whose raw token failed to convert.
        errors: Vec<ValueError>,

        /// Tokens consumed neither as an option name nor as a value, in
        /// encounter order.
        leftovers: Vec<String>,
    },

    /// A help listing was printed; the caller exits without reading
    /// destinations beyond their defaults.
    Help,
}

impl Outcome {
    /// True unless a help listing short-circuited the pass.
    pub fn should_continue(&self) -> bool {
        matches!(self, Outcome::Continue { .. })
    }
}

#[derive(Debug)]
struct Entry<'a> {
    name: &'a str,
    help: &'a str,
    opt: TypedOpt<'a>,
}

/// A registry of typed options, built once and consumed by a single
/// [`Parser::parse`] call.
///
/// Each registration binds a name (given without dashes) to a destination and
/// writes the default into it immediately. `*_var` methods borrow a
/// caller-owned slot for the registry's lifetime; `*_cell` methods let the
/// registry own the storage, read back with [`Parser::value_of`]. Registering
/// a name twice replaces the earlier entry.
#[derive(Debug, Default)]
pub struct Parser<'a> {
    entries: Vec<Entry<'a>>,
}

/// Registration methods for one scalar kind.
macro_rules! make_scalar_registration {
    ($var:ident, $cell:ident, $variant:ident, $ty:ty) => {
        impl<'a> Parser<'a> {
            #[doc = concat!("Register a caller-owned `", stringify!($ty), "` destination under `name`.")]
            ///
            /// The default is written into the destination immediately.
            pub fn $var(&mut self, dest: &'a mut $ty, name: &'a str, default: $ty, help: &'a str) {
                *dest = default;
                self.insert(name, help, TypedOpt::$variant { dest: Dest::Borrowed(dest), default });
            }

            #[doc = concat!("Register a registry-owned `", stringify!($ty), "` cell under `name`.")]
            ///
            /// The cell starts at `default` and is read back with [`Parser::value_of`].
            pub fn $cell(&mut self, name: &'a str, default: $ty, help: &'a str) {
                self.insert(name, help, TypedOpt::$variant { dest: Dest::Owned(default), default });
            }
        }
    };
}

make_scalar_registration!(int_var, int_cell, Int, i32);
make_scalar_registration!(uint_var, uint_cell, Uint, u32);
make_scalar_registration!(longlong_var, longlong_cell, Longlong, i64);
make_scalar_registration!(float_var, float_cell, Float, f32);
make_scalar_registration!(bool_var, bool_cell, Bool, bool);

impl<'a> Parser<'a> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a caller-owned text destination under `name`.
    ///
    /// Text conversion never fails; the raw token is written verbatim.
    pub fn string_var(&mut self, dest: &'a mut String, name: &'a str, default: &str, help: &'a str) {
        *dest = default.to_owned();
        self.insert(
            name,
            help,
            TypedOpt::Text {
                dest: Dest::Borrowed(dest),
                default: default.to_owned(),
            },
        );
    }

    /// Register a registry-owned text cell under `name`.
    pub fn string_cell(&mut self, name: &'a str, default: &str, help: &'a str) {
        self.insert(
            name,
            help,
            TypedOpt::Text {
                dest: Dest::Owned(default.to_owned()),
                default: default.to_owned(),
            },
        );
    }

    fn insert(&mut self, name: &'a str, help: &'a str, opt: TypedOpt<'a>) {
        debug_assert!(!name.starts_with('-'), "option names carry no dashes");

        // Last registration wins, keeping the original listing position.
        match self.entries.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => {
                entry.help = help;
                entry.opt = opt;
            }
            None => self.entries.push(Entry { name, help, opt }),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }

    /// Run one parse pass over the argument vector (program name excluded).
    ///
    /// Tokenizes the whole vector first; a later occurrence of a name
    /// overwrites the earlier one. If a `help` or `h` pair is present, the
    /// help listing goes to standard output and the pass stops with
    /// [`Outcome::Help`] before any conversion runs. Otherwise every pair is
    /// resolved against the registry, falling back to a lookup with the first
    /// two bytes stripped so negated spellings reach their option. Pairs that
    /// match nothing are ignored.
    pub fn parse(&mut self, argv: &[&str]) -> Outcome {
        let mut pairs: Vec<(&str, &str)> = Vec::new();
        let mut leftovers = Vec::new();

        for token in Tokens::new(argv) {
            match token {
                Token::Pair { name, value } => {
                    match pairs.iter_mut().find(|(seen, _)| *seen == name) {
                        Some(pair) => pair.1 = value,
                        None => pairs.push((name, value)),
                    }
                }
                Token::Leftover(arg) => leftovers.push(arg.to_owned()),
            }
        }

        if pairs.iter().any(|(name, _)| matches!(*name, "help" | "h")) {
            print!("{}", self.help());
            return Outcome::Help;
        }

        let mut errors = Vec::new();

        for (name, value) in pairs {
            // The fallback strips two bytes whether or not they spell "no";
            // the unstripped name reaches the converter so the boolean rules
            // can see the prefix. A strip that would split a multibyte
            // character skips the fallback.
            let found = self.position(name).or_else(|| {
                if name.len() > 2 {
                    name.get(2..).and_then(|stripped| self.position(stripped))
                } else {
                    None
                }
            });

            match found {
                Some(index) => {
                    let entry = &mut self.entries[index];

                    if !entry.opt.convert(name, value) {
                        errors.push(ValueError {
                            name: name.to_owned(),
                            value: value.to_owned(),
                            kind: entry.opt.kind(),
                        });
                    }
                }
                None => debug!("ignoring unknown option --{name}"),
            }
        }

        Outcome::Continue { errors, leftovers }
    }

    /// Copy out the current value of the named option, if registered.
    pub fn value_of(&self, name: &str) -> Option<Value> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.opt.snapshot())
    }

    /// The help listing as a lazily formatted value.
    ///
    /// One line per registered option, in registration order. Rendering is
    /// pure; formatting it twice yields identical output.
    pub fn help(&self) -> Help<'_, 'a> {
        Help {
            entries: &self.entries,
        }
    }
}

/// Lazily formatted help listing returned by [`Parser::help`].
#[derive(Debug)]
pub struct Help<'p, 'a> {
    entries: &'p [Entry<'a>],
}

impl fmt::Display for Help<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.entries {
            writeln!(
                f,
                "--{}\t\t{} [default={}]",
                entry.name,
                entry.help,
                entry.opt.render_default()
            )?;
        }

        Ok(())
    }
}
