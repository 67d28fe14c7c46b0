use crate::jsonc::Kind;
use thiserror::Error as ThisError;

///
/// SchemaError
///
/// Directive misuse or a non-record input detected while encoding.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SchemaError {
    #[error("only structured records may be serialized, got a {kind}")]
    NotARecord { kind: Kind },

    #[error(
        "field '{record}.{field}' is tagged flat but holds a {kind}; only mappings and records can be flattened"
    )]
    FlattenKind {
        record: &'static str,
        field: &'static str,
        kind: Kind,
    },

    #[error("field '{record}.{field}' is tagged collection but holds a {kind}; expected a sequence")]
    CollectionKind {
        record: &'static str,
        field: &'static str,
        kind: Kind,
    },

    #[error("record '{record}' declares field '{field}' but does not expose its value")]
    MissingValue {
        record: &'static str,
        field: &'static str,
    },
}

impl SchemaError {
    /// Name of the offending field, when the error concerns one.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::NotARecord { .. } => None,
            Self::FlattenKind { field, .. }
            | Self::CollectionKind { field, .. }
            | Self::MissingValue { field, .. } => Some(*field),
        }
    }
}
