use crate::jsonc::{Encode, Kind, Record, SchemaError};

///
/// FieldMeta
///
/// Static directives declared on one record field.
/// Built with `const` builders so derived records can keep their field
/// table in a `const` slice.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldMeta {
    pub ident: &'static str,
    pub rename: Option<&'static str>,
    pub skip: bool,
    pub omit_empty: bool,
    pub flat: bool,
    pub collection: bool,
}

impl FieldMeta {
    #[must_use]
    pub const fn new(ident: &'static str) -> Self {
        Self {
            ident,
            rename: None,
            skip: false,
            omit_empty: false,
            flat: false,
            collection: false,
        }
    }

    /// Output key override. An empty name leaves the identifier in place.
    #[must_use]
    pub const fn rename(mut self, name: &'static str) -> Self {
        self.rename = if name.is_empty() { None } else { Some(name) };
        self
    }

    #[must_use]
    pub const fn skip(mut self) -> Self {
        self.skip = true;
        self
    }

    #[must_use]
    pub const fn omit_empty(mut self) -> Self {
        self.omit_empty = true;
        self
    }

    #[must_use]
    pub const fn flat(mut self) -> Self {
        self.flat = true;
        self
    }

    #[must_use]
    pub const fn collection(mut self) -> Self {
        self.collection = true;
        self
    }
}

///
/// FieldDescriptor
///
/// Effective encoding decision for one field of one record value.
/// Derived fresh on every encode call.
///

#[derive(Clone, Copy)]
pub struct FieldDescriptor<'a> {
    pub ident: &'static str,
    pub kind: Kind,
    pub name: &'static str,
    pub omitted: bool,
    pub omit_if_empty: bool,
    pub flatten: bool,
    pub sequence_marker: bool,
    pub value: &'a dyn Encode,
}

impl std::fmt::Debug for FieldDescriptor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("ident", &self.ident)
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("omitted", &self.omitted)
            .field("omit_if_empty", &self.omit_if_empty)
            .field("flatten", &self.flatten)
            .field("sequence_marker", &self.sequence_marker)
            .finish_non_exhaustive()
    }
}

/// Resolve one field.
///
/// Precedence: `skip` beats everything (including `flat` and `collection`),
/// then `flat`, then `rename`, then the declared identifier.
#[must_use]
pub fn resolve<'a>(meta: &FieldMeta, value: &'a dyn Encode) -> FieldDescriptor<'a> {
    let omitted = meta.skip;
    let flatten = !omitted && meta.flat;

    FieldDescriptor {
        ident: meta.ident,
        kind: value.kind(),
        name: meta.rename.unwrap_or(meta.ident),
        omitted,
        omit_if_empty: !omitted && !flatten && meta.omit_empty,
        flatten,
        sequence_marker: !omitted && meta.collection,
        value,
    }
}

/// Resolve every field of a record, in declaration order.
pub fn resolve_fields(record: &dyn Record) -> Result<Vec<FieldDescriptor<'_>>, SchemaError> {
    record
        .field_meta()
        .iter()
        .enumerate()
        .map(|(index, meta)| {
            let value = record
                .field_value(index)
                .ok_or_else(|| SchemaError::MissingValue {
                    record: record.record_name(),
                    field: meta.ident,
                })?;

            Ok(resolve(meta, value))
        })
        .collect()
}
