//! Typed option slots: destination storage, defaults, and value conversion.

use std::fmt;
use std::str::FromStr;

/// The declared kind of a registered option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// Signed 32-bit integer.
    Int,
    /// Unsigned 32-bit integer.
    Uint,
    /// Signed 64-bit integer.
    Longlong,
    /// 32-bit floating point.
    Float,
    /// Boolean flag.
    Bool,
    /// Verbatim text.
    Text,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Longlong => "longlong",
            Kind::Float => "float",
            Kind::Bool => "bool",
            Kind::Text => "text",
        };

        f.write_str(label)
    }
}

/// A point-in-time copy of an option's current value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Signed 32-bit integer.
    Int(i32),
    /// Unsigned 32-bit integer.
    Uint(u32),
    /// Signed 64-bit integer.
    Longlong(i64),
    /// 32-bit floating point.
    Float(f32),
    /// Boolean flag.
    Bool(bool),
    /// Verbatim text.
    Text(String),
}

/// Where an option writes its parsed value. Either the caller's slot is
/// borrowed for the registry's lifetime, or the registry owns the cell
/// outright; never both.
#[derive(Debug)]
pub(crate) enum Dest<'a, T> {
    Borrowed(&'a mut T),
    Owned(T),
}

impl<T> Dest<'_, T> {
    pub(crate) fn set(&mut self, value: T) {
        match self {
            Dest::Borrowed(slot) => **slot = value,
            Dest::Owned(slot) => *slot = value,
        }
    }

    pub(crate) fn get(&self) -> &T {
        match self {
            Dest::Borrowed(slot) => slot,
            Dest::Owned(slot) => slot,
        }
    }
}

/// A typed destination slot together with its registration default.
#[derive(Debug)]
pub(crate) enum TypedOpt<'a> {
    Int { dest: Dest<'a, i32>, default: i32 },
    Uint { dest: Dest<'a, u32>, default: u32 },
    Longlong { dest: Dest<'a, i64>, default: i64 },
    Float { dest: Dest<'a, f32>, default: f32 },
    Bool { dest: Dest<'a, bool>, default: bool },
    Text { dest: Dest<'a, String>, default: String },
}

impl TypedOpt<'_> {
    pub(crate) fn kind(&self) -> Kind {
        match self {
            TypedOpt::Int { .. } => Kind::Int,
            TypedOpt::Uint { .. } => Kind::Uint,
            TypedOpt::Longlong { .. } => Kind::Longlong,
            TypedOpt::Float { .. } => Kind::Float,
            TypedOpt::Bool { .. } => Kind::Bool,
            TypedOpt::Text { .. } => Kind::Text,
        }
    }

    /// Render the default in its canonical textual form: decimal for the
    /// numeric kinds, `1`/`0` for booleans, verbatim for text.
    pub(crate) fn render_default(&self) -> String {
        match self {
            TypedOpt::Int { default, .. } => default.to_string(),
            TypedOpt::Uint { default, .. } => default.to_string(),
            TypedOpt::Longlong { default, .. } => default.to_string(),
            TypedOpt::Float { default, .. } => default.to_string(),
            TypedOpt::Bool { default, .. } => u8::from(*default).to_string(),
            TypedOpt::Text { default, .. } => default.clone(),
        }
    }

    /// Convert `value` and write it through the destination. Returns false
    /// and leaves the destination untouched when the token does not convert.
    ///
    /// The numeric kinds accept only a whole token in their own format. Text
    /// always succeeds, verbatim including the empty string. The boolean
    /// rules also read `name`, so a negated spelling converts to false.
    pub(crate) fn convert(&mut self, name: &str, value: &str) -> bool {
        match self {
            TypedOpt::Int { dest, .. } => convert_with(dest, value),
            TypedOpt::Uint { dest, .. } => convert_with(dest, value),
            TypedOpt::Longlong { dest, .. } => convert_with(dest, value),
            TypedOpt::Float { dest, .. } => convert_with(dest, value),
            TypedOpt::Bool { dest, .. } => match parse_bool(name, value) {
                Some(flag) => {
                    dest.set(flag);
                    true
                }
                None => false,
            },
            TypedOpt::Text { dest, .. } => {
                dest.set(value.to_owned());
                true
            }
        }
    }

    /// Copy the destination's current content out as a [`Value`].
    pub(crate) fn snapshot(&self) -> Value {
        match self {
            TypedOpt::Int { dest, .. } => Value::Int(*dest.get()),
            TypedOpt::Uint { dest, .. } => Value::Uint(*dest.get()),
            TypedOpt::Longlong { dest, .. } => Value::Longlong(*dest.get()),
            TypedOpt::Float { dest, .. } => Value::Float(*dest.get()),
            TypedOpt::Bool { dest, .. } => Value::Bool(*dest.get()),
            TypedOpt::Text { dest, .. } => Value::Text(dest.get().clone()),
        }
    }
}

fn convert_with<T: FromStr>(dest: &mut Dest<'_, T>, value: &str) -> bool {
    match value.parse::<T>() {
        Ok(parsed) => {
            dest.set(parsed);
            true
        }
        Err(_) => false,
    }
}

/// A name carrying the negation prefix forces false before the value is even
/// looked at.
fn parse_bool(name: &str, value: &str) -> Option<bool> {
    if matches!(value, "false" | "0" | "f") || name.starts_with("no") {
        Some(false)
    } else if matches!(value, "true" | "1" | "t" | "") {
        Some(true)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    fn int_opt(current: i32) -> TypedOpt<'static> {
        TypedOpt::Int {
            dest: Dest::Owned(current),
            default: current,
        }
    }

    #[test]
    fn it_should_convert_a_whole_numeric_token() {
        let mut opt = int_opt(0);

        assert_that!(opt.convert("count", "42"), eq(true));
        assert_that!(opt.snapshot(), eq(&Value::Int(42)));
    }

    #[test]
    fn it_should_reject_a_partially_numeric_token() {
        let mut opt = int_opt(7);

        assert_that!(opt.convert("count", "42x"), eq(false));
        assert_that!(opt.snapshot(), eq(&Value::Int(7)));
    }

    #[test]
    fn it_should_reject_a_negative_token_for_an_unsigned_option() {
        let mut opt = TypedOpt::Uint {
            dest: Dest::Owned(3),
            default: 3,
        };

        assert_that!(opt.convert("count", "-1"), eq(false));
        assert_that!(opt.snapshot(), eq(&Value::Uint(3)));
    }

    #[test]
    fn it_should_convert_a_float_token() {
        let mut opt = TypedOpt::Float {
            dest: Dest::Owned(0.0),
            default: 0.0,
        };

        assert_that!(opt.convert("ratio", "2.5"), eq(true));
        assert_that!(opt.snapshot(), eq(&Value::Float(2.5)));
    }

    #[test]
    fn it_should_write_text_verbatim_including_empty() {
        let mut opt = TypedOpt::Text {
            dest: Dest::Owned(String::from("abc")),
            default: String::from("abc"),
        };

        assert_that!(opt.convert("label", ""), eq(true));
        assert_that!(opt.snapshot(), eq(&Value::Text(String::new())));
    }

    #[test]
    fn it_should_apply_the_boolean_truth_table() {
        let cases = [
            ("flag", "", Some(true)),
            ("flag", "true", Some(true)),
            ("flag", "1", Some(true)),
            ("flag", "t", Some(true)),
            ("flag", "false", Some(false)),
            ("flag", "0", Some(false)),
            ("flag", "f", Some(false)),
            ("noflag", "", Some(false)),
            ("noflag", "true", Some(false)),
            ("flag", "maybe", None),
        ];

        for (name, value, expected) in cases {
            assert_that!(parse_bool(name, value), eq(expected));
        }
    }

    #[test]
    fn it_should_keep_the_prior_value_on_a_rejected_boolean_token() {
        let mut opt = TypedOpt::Bool {
            dest: Dest::Owned(true),
            default: true,
        };

        assert_that!(opt.convert("flag", "maybe"), eq(false));
        assert_that!(opt.snapshot(), eq(&Value::Bool(true)));
    }

    #[test]
    fn it_should_render_boolean_defaults_numerically() {
        let on = TypedOpt::Bool {
            dest: Dest::Owned(true),
            default: true,
        };
        let off = TypedOpt::Bool {
            dest: Dest::Owned(false),
            default: false,
        };

        assert_that!(on.render_default(), eq("1"));
        assert_that!(off.render_default(), eq("0"));
    }

    #[test]
    fn it_should_round_trip_rendered_defaults_through_convert() {
        let mut opts = [
            int_opt(-42),
            TypedOpt::Uint {
                dest: Dest::Owned(9),
                default: 9,
            },
            TypedOpt::Longlong {
                dest: Dest::Owned(1 << 40),
                default: 1 << 40,
            },
            TypedOpt::Float {
                dest: Dest::Owned(2.5),
                default: 2.5,
            },
            TypedOpt::Bool {
                dest: Dest::Owned(true),
                default: true,
            },
            TypedOpt::Text {
                dest: Dest::Owned(String::from("abc")),
                default: String::from("abc"),
            },
        ];

        for opt in &mut opts {
            let before = opt.snapshot();
            let rendered = opt.render_default();

            assert_that!(opt.convert("name", &rendered), eq(true));
            assert_that!(opt.snapshot(), eq(&before));
        }
    }
}
