//! A lexer for pairing option names with their values on the command line.

/// One unit consumed from the argument vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'v> {
    /// A dashed token resolved to an option name, together with the raw
    /// value that travels with it. The value is empty when the name stands
    /// alone or is followed by another dashed token.
    Pair {
        /// Option name with its dash prefix stripped.
        name: &'v str,
        /// Raw value, exactly as it appeared.
        value: &'v str,
    },

    /// A token consumed neither as a name nor as a value.
    Leftover(&'v str),
}

/// Streams [`Token`]s out of an argument vector.
///
/// The vector excludes the program name; callers hand over
/// `std::env::args().skip(1)` collected into strings. One leading dash strips
/// one character, two or more strip exactly two. A token with no dash prefix
/// is a [`Token::Leftover`] and is never taken as a value for a name it does
/// not follow.
#[derive(Clone, Debug)]
pub struct Tokens<'v> {
    argv: &'v [&'v str],
    cursor: usize,
}

impl<'v> Tokens<'v> {
    /// Create a lexer over the given argument vector.
    pub fn new(argv: &'v [&'v str]) -> Self {
        Tokens { argv, cursor: 0 }
    }
}

impl<'v> Iterator for Tokens<'v> {
    type Item = Token<'v>;

    fn next(&mut self) -> Option<Self::Item> {
        let arg = *self.argv.get(self.cursor)?;
        self.cursor += 1;

        let name = if let Some(rest) = arg.strip_prefix("--") {
            rest
        } else if let Some(rest) = arg.strip_prefix('-') {
            rest
        } else {
            return Some(Token::Leftover(arg));
        };

        // A following dashed token is the next name, not this name's value.
        match self.argv.get(self.cursor) {
            Some(&next) if !next.starts_with('-') => {
                self.cursor += 1;
                Some(Token::Pair { name, value: next })
            }
            _ => Some(Token::Pair { name, value: "" }),
        }
    }
}
