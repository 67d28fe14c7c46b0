use crate::jsonc::{FieldDescriptor, Kind, SchemaError};

/// Check a resolved field's directives against its runtime kind.
///
/// `flat` needs a mapping or a record; `collection` needs a sequence.
/// Nothing else is rejected.
pub fn validate_field(record: &'static str, field: &FieldDescriptor<'_>) -> Result<(), SchemaError> {
    if field.flatten && !field.kind.is_flattenable() {
        return Err(SchemaError::FlattenKind {
            record,
            field: field.ident,
            kind: field.kind,
        });
    }

    if field.sequence_marker && field.kind != Kind::Sequence {
        return Err(SchemaError::CollectionKind {
            record,
            field: field.ident,
            kind: field.kind,
        });
    }

    Ok(())
}
