//! A minimal typed model of GraphQL query documents.
//!
//! Values are rendered as GraphQL literals rather than spliced into a template, so a
//! zone identifier or timestamp containing quotes or backslashes stays inside its
//! string literal.

use super::FetchOptions;
use crate::Result;
use core::fmt::{self, Display, Formatter, Write as _};
use ohno::IntoAppError;
use serde::Serialize;

/// A GraphQL input value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(u64),
    String(String),
    /// A bare enum value such as `count_DESC`
    Enum(&'static str),
    List(Vec<Self>),
    /// An input object, rendered with fields in insertion order
    Object(Vec<(&'static str, Self)>),
}

impl Value {
    /// Build an input object from `(name, value)` pairs
    #[must_use]
    pub fn object(fields: impl IntoIterator<Item = (&'static str, Self)>) -> Self {
        Self::Object(fields.into_iter().collect())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Int(n.into())
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::String(s) => write_string_literal(f, s),
            Self::Enum(name) => f.write_str(name),
            Self::List(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_char(']')
            }
            Self::Object(fields) => {
                f.write_char('{')?;
                write_arguments(f, fields)?;
                f.write_char('}')
            }
        }
    }
}

fn write_string_literal(f: &mut Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\u{:04X}", u32::from(c))?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

fn write_arguments(f: &mut Formatter<'_>, args: &[(&'static str, Value)]) -> fmt::Result {
    for (i, (name, value)) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{name}: {value}")?;
    }
    Ok(())
}

/// A field selection with optional arguments and sub-selections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: &'static str,
    args: Vec<(&'static str, Value)>,
    selection: Vec<Self>,
}

impl Field {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            args: Vec::new(),
            selection: Vec::new(),
        }
    }

    /// Add an argument to this field
    #[must_use]
    pub fn arg(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        self.args.push((name, value.into()));
        self
    }

    /// Add a sub-field to this field's selection set
    #[must_use]
    pub fn select(mut self, field: Self) -> Self {
        self.selection.push(field);
        self
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)?;

        if !self.args.is_empty() {
            f.write_char('(')?;
            write_arguments(f, &self.args)?;
            f.write_char(')')?;
        }

        if !self.selection.is_empty() {
            f.write_str(" {")?;
            for field in &self.selection {
                write!(f, " {field}")?;
            }
            f.write_str(" }")?;
        }

        Ok(())
    }
}

/// An anonymous query operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    selection: Vec<Field>,
}

impl Query {
    #[must_use]
    pub const fn new() -> Self {
        Self { selection: Vec::new() }
    }

    #[must_use]
    pub fn select(mut self, field: Field) -> Self {
        self.selection.push(field);
        self
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for field in &self.selection {
            write!(f, " {field}")?;
        }
        f.write_str(" }")
    }
}

/// Body of a GraphQL POST request
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
}

/// Build the query counting requests per edge response status for one zone and window
#[must_use]
pub fn status_groups_query(options: &FetchOptions) -> Query {
    let groups = Field::new("httpRequestsAdaptiveGroups")
        .arg("limit", options.limit().get())
        .arg(
            "filter",
            Value::object([
                ("datetime_geq", Value::from(options.start())),
                ("datetime_leq", Value::from(options.end())),
            ]),
        )
        .arg("orderBy", Value::List(vec![Value::Enum("count_DESC")]))
        .select(Field::new("count"))
        .select(Field::new("dimensions").select(Field::new("edgeResponseStatus")));

    let zones = Field::new("zones")
        .arg("filter", Value::object([("zoneTag", Value::from(options.zone_id()))]))
        .select(groups);

    Query::new().select(Field::new("viewer").select(zones))
}

/// Serialize the request body that fetching with `options` would send
///
/// # Errors
///
/// Returns an error if the body cannot be serialized
pub fn request_body(options: &FetchOptions) -> Result<String> {
    let query = status_groups_query(options).to_string();
    serde_json::to_string(&GraphQlRequest { query: &query }).into_app_err("serializing GraphQL request body")
}
