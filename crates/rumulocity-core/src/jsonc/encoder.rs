use crate::jsonc::{Encode, Node, Record, SchemaError, resolve_fields, validate_field};
use serde_json::{Map, Value};

/// Encode a record into a JSON value whose objects keep emission order.
pub fn to_value<T>(value: &T) -> Result<Value, SchemaError>
where
    T: Encode + ?Sized,
{
    let record = top_level_record(value.node())?;

    encode_record(record).map(Value::Object)
}

/// Encode a record into JSON text.
pub fn to_string<T>(value: &T) -> Result<String, SchemaError>
where
    T: Encode + ?Sized,
{
    let value = to_value(value)?;

    Ok(value.to_string())
}

/// Encode a record into JSON bytes, ready to be used as a request body.
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>, SchemaError>
where
    T: Encode + ?Sized,
{
    to_string(value).map(String::into_bytes)
}

// a top-level `Some(record)` is accepted the same way a reference is
fn top_level_record(node: Node<'_>) -> Result<&dyn Record, SchemaError> {
    match node {
        Node::Record(record) => Ok(record),
        Node::Pointer(Some(inner)) => top_level_record(inner.node()),
        other => Err(SchemaError::NotARecord { kind: other.kind() }),
    }
}

fn encode_record(record: &dyn Record) -> Result<Map<String, Value>, SchemaError> {
    let name = record.record_name();
    let fields = resolve_fields(record)?;

    for field in &fields {
        validate_field(name, field)?;
    }

    let mut out = Map::new();

    // flattened contributions come first, in declaration order
    for field in fields.iter().filter(|f| f.flatten) {
        match field.value.node() {
            Node::Mapping(entries) => {
                for (key, value) in entries {
                    let value = encode_node(value.node())?;
                    insert(&mut out, name, key.into_owned(), value);
                }
            }
            Node::Record(nested) => {
                for (key, value) in encode_record(nested)? {
                    insert(&mut out, name, key, value);
                }
            }
            other => {
                return Err(SchemaError::FlattenKind {
                    record: name,
                    field: field.ident,
                    kind: other.kind(),
                });
            }
        }
    }

    for field in fields.iter().filter(|f| !f.flatten && !f.omitted) {
        let node = field.value.node();
        if field.omit_if_empty && node.is_empty() {
            continue;
        }

        let value = encode_node(node)?;
        insert(&mut out, name, field.name.to_string(), value);
    }

    Ok(out)
}

fn encode_node(node: Node<'_>) -> Result<Value, SchemaError> {
    let value = match node {
        Node::Null | Node::Pointer(None) => Value::Null,
        Node::Bool(b) => Value::Bool(b),
        Node::Number(n) => Value::Number(n),
        Node::String(s) => Value::String(s.into_owned()),
        Node::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(|item| encode_node(item.node()))
                .collect::<Result<_, _>>()?,
        ),
        Node::Mapping(entries) => {
            let mut map = Map::new();
            for (key, value) in entries {
                map.insert(key.into_owned(), encode_node(value.node())?);
            }

            Value::Object(map)
        }
        Node::Record(record) => Value::Object(encode_record(record)?),
        Node::Pointer(Some(inner)) => encode_node(inner.node())?,
    };

    Ok(value)
}

// last writer wins; the key keeps the slot of its first emission
fn insert(out: &mut Map<String, Value>, record: &str, key: String, value: Value) {
    if out.contains_key(&key) {
        tracing::debug!(record, key = %key, "jsonc key collision, overwriting earlier value");
    }

    out.insert(key, value);
}
