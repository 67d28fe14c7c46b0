//! Module: jsonc
//! Responsibility: structural JSON rendering of records with field directives.
//! Does not own: decoding; response bodies are decoded with `serde`.
//! Boundary: request bodies built by resource APIs.
//!
//! Records describe themselves through [`Record`] (usually generated by
//! `#[derive(JsonObject)]`), and every value exposes a borrowed structural
//! view through [`Encode`]. The encoder walks those views, so directive
//! checks happen against the *runtime* kind of each field value.

mod encoder;
mod error;
mod field;
mod impls;
mod validate;


pub use encoder::{to_string, to_value, to_vec};
pub use error::SchemaError;
pub use field::{FieldDescriptor, FieldMeta, resolve, resolve_fields};
pub use validate::validate_field;

use serde_json::Number;
use std::{borrow::Cow, fmt};

///
/// Encode
///
/// Structural view over a value. Implementations must not allocate more
/// than the view needs; nested values are handed out by reference.
///

pub trait Encode {
    fn node(&self) -> Node<'_>;

    /// Runtime kind of this value. Must agree with `node().kind()`;
    /// containers override it so resolution does not build their node.
    fn kind(&self) -> Kind {
        self.node().kind()
    }
}

///
/// Record
///
/// A structured record: a fixed, ordered set of named fields with static
/// directives. `field_value(i)` must return `Some` for every `i` below
/// `field_meta().len()`.
///

pub trait Record {
    /// Type name used in error messages.
    fn record_name(&self) -> &'static str;

    /// Field directives in declaration order.
    fn field_meta(&self) -> &'static [FieldMeta];

    fn field_value(&self, index: usize) -> Option<&dyn Encode>;
}

///
/// Node
///

pub enum Node<'a> {
    Null,
    Bool(bool),
    Number(Number),
    String(Cow<'a, str>),
    Sequence(Vec<&'a dyn Encode>),
    Mapping(Vec<(Cow<'a, str>, &'a dyn Encode)>),
    Record(&'a dyn Record),
    Pointer(Option<&'a dyn Encode>),
}

impl Node<'_> {
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Null => Kind::Null,
            Self::Bool(_) => Kind::Bool,
            Self::Number(_) => Kind::Number,
            Self::String(_) => Kind::String,
            Self::Sequence(_) => Kind::Sequence,
            Self::Mapping(_) => Kind::Mapping,
            Self::Record(_) => Kind::Record,
            Self::Pointer(_) => Kind::Pointer,
        }
    }

    /// True when this is the zero value of its kind.
    /// Records are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null | Self::Pointer(None) => true,
            Self::Bool(b) => !b,
            Self::Number(n) => is_zero(n),
            Self::String(s) => s.is_empty(),
            Self::Sequence(items) => items.is_empty(),
            Self::Mapping(entries) => entries.is_empty(),
            Self::Record(_) | Self::Pointer(Some(_)) => false,
        }
    }
}

#[allow(clippy::float_cmp)]
fn is_zero(n: &Number) -> bool {
    if let Some(v) = n.as_u64() {
        v == 0
    } else if let Some(v) = n.as_i64() {
        v == 0
    } else {
        n.as_f64().is_some_and(|v| v == 0.0)
    }
}

///
/// Kind
///
/// Runtime kind of a field value, as reported in schema errors.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Sequence,
    Mapping,
    Record,
    Pointer,
}

impl Kind {
    /// Kinds whose contents may be spliced into the enclosing object.
    #[must_use]
    pub const fn is_flattenable(self) -> bool {
        matches!(self, Self::Mapping | Self::Record)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
            Self::Record => "record",
            Self::Pointer => "pointer",
        };

        f.write_str(label)
    }
}
