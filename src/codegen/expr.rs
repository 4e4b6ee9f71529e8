//! Generated-variable expressions and emitted statements
//!
//! Statements are kept as typed values rather than formatted strings, so
//! callers can inspect what a generation run produced; `Display` renders
//! the source line handed to the host build.

use std::fmt;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Name of a generated variable.
///
/// Restricted to C-like identifiers so every rendered statement is a
/// valid source line.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ident(String);

#[derive(Error, Debug)]
#[error("'{0}' is not a valid identifier")]
pub struct InvalidIdent(String);

impl Ident {
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidIdent> {
        let name = name.into();
        let mut chars = name.chars();
        let valid = match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        };
        if valid {
            Ok(Ident(name))
        } else {
            Err(InvalidIdent(name))
        }
    }

    /// Build an identifier from a trusted name, mapping any character
    /// that is not valid in an identifier to '_'.
    pub fn sanitized(name: &str) -> Self {
        let mut out = String::with_capacity(name.len());
        for c in name.chars() {
            if c.is_ascii_alphanumeric() || c == '_' {
                out.push(c);
            } else {
                out.push('_');
            }
        }
        if !out.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
            out.insert(0, '_');
        }
        Ident(out)
    }

    /// Identifier for an auto-allocated variable, e.g. `text_sensor_2`.
    pub(crate) fn generated(prefix: &str, seq: u32) -> Self {
        let Ident(prefix) = Ident::sanitized(prefix);
        Ident(format!("{}_{}", prefix, seq))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Ident {
    type Err = InvalidIdent;

    fn from_str(value: &str) -> Result<Self, InvalidIdent> {
        Ident::new(value)
    }
}

impl<'de> Deserialize<'de> for Ident {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ident::new(String::deserialize(deserializer)?)
            .map_err(|e| <D::Error as serde::de::Error>::custom(e.to_string()))
    }
}

/// Class of a registered object, as exposed by the firmware component
/// headers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectClass {
    WeatherStation,
    TextSensor,
}

impl ObjectClass {
    pub fn class_name(self) -> &'static str {
        match self {
            ObjectClass::WeatherStation => "WeatherStation",
            ObjectClass::TextSensor => "TextSensor",
        }
    }
}

impl fmt::Display for ObjectClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Reference to a declared and defined generated variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expr {
    ident: Ident,
    class: ObjectClass,
}

impl Expr {
    pub(crate) fn new(ident: Ident, class: ObjectClass) -> Self {
        Expr { ident, class }
    }

    pub fn ident(&self) -> &Ident {
        &self.ident
    }

    pub fn class(&self) -> ObjectClass {
        self.class
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.ident, f)
    }
}

/// Literal argument of an emitted call.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    Int(i64),
    Bool(bool),
    Str(String),
    Var(Ident),
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Int(n) => write!(f, "{}", n),
            Arg::Bool(b) => write!(f, "{}", b),
            Arg::Str(s) => {
                f.write_str("\"")?;
                for c in s.chars() {
                    match c {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        c => write!(f, "{}", c)?,
                    }
                }
                f.write_str("\"")
            }
            Arg::Var(ident) => fmt::Display::fmt(ident, f),
        }
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Arg::Int(value)
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Str(value.to_string())
    }
}

impl From<&Expr> for Arg {
    fn from(value: &Expr) -> Self {
        Arg::Var(value.ident().clone())
    }
}

/// One emitted statement.
///
/// Method names are `&'static str` on purpose: every call site goes
/// through a fixed table, never through a name assembled at runtime.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// `auto <ident> = new <class>();`
    New { ident: Ident, class: ObjectClass },
    /// `<target>-><method>(<args>);`
    MethodCall {
        target: Ident,
        method: &'static str,
        args: Vec<Arg>,
    },
}

impl Stmt {
    pub fn new_object(object: &Expr) -> Self {
        Stmt::New {
            ident: object.ident().clone(),
            class: object.class(),
        }
    }

    pub fn method_call(target: &Expr, method: &'static str, args: Vec<Arg>) -> Self {
        Stmt::method_call_on(target.ident().clone(), method, args)
    }

    pub fn method_call_on(target: Ident, method: &'static str, args: Vec<Arg>) -> Self {
        Stmt::MethodCall {
            target,
            method,
            args,
        }
    }

    /// True if this statement is a call to `method`, on any target.
    pub fn calls(&self, method: &str) -> bool {
        matches!(self, Stmt::MethodCall { method: m, .. } if *m == method)
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::New { ident, class } => {
                write!(f, "auto {} = new {}();", ident, class.class_name())
            }
            Stmt::MethodCall {
                target,
                method,
                args,
            } => {
                write!(f, "{}->{}(", target, method)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(arg, f)?;
                }
                f.write_str(");")
            }
        }
    }
}
