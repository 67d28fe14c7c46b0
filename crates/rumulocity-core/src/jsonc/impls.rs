use crate::jsonc::{Encode, Kind, Node};
use serde_json::{Map, Number, Value};
use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
    rc::Rc,
    sync::Arc,
};

// impl_encode_number
macro_rules! impl_encode_number {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl Encode for $type {
                fn node(&self) -> Node<'_> {
                    Node::Number(Number::from(*self))
                }
            }
        )*
    };
}

impl_encode_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// non-finite floats have no JSON form and render as null
impl Encode for f64 {
    fn node(&self) -> Node<'_> {
        Number::from_f64(*self).map_or(Node::Null, Node::Number)
    }
}

// widened through the shortest decimal form, so 0.1f32 stays 0.1
impl Encode for f32 {
    fn node(&self) -> Node<'_> {
        self.to_string()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map_or(Node::Null, Node::Number)
    }
}

impl Encode for bool {
    fn node(&self) -> Node<'_> {
        Node::Bool(*self)
    }
}

impl Encode for () {
    fn node(&self) -> Node<'_> {
        Node::Null
    }
}

impl Encode for str {
    fn node(&self) -> Node<'_> {
        Node::String(Cow::Borrowed(self))
    }
}

impl Encode for String {
    fn node(&self) -> Node<'_> {
        Node::String(Cow::Borrowed(self.as_str()))
    }
}

impl Encode for Cow<'_, str> {
    fn node(&self) -> Node<'_> {
        Node::String(Cow::Borrowed(self.as_ref()))
    }
}

impl Encode for char {
    fn node(&self) -> Node<'_> {
        Node::String(Cow::Owned(self.to_string()))
    }
}

///
/// Pointer-like
///
/// `Option` is the only pointer that can be absent; owning and shared
/// pointers are transparent.
///

impl<T: Encode> Encode for Option<T> {
    fn node(&self) -> Node<'_> {
        Node::Pointer(self.as_ref().map(|v| v as &dyn Encode))
    }

    fn kind(&self) -> Kind {
        Kind::Pointer
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn node(&self) -> Node<'_> {
        (**self).node()
    }

    fn kind(&self) -> Kind {
        (**self).kind()
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn node(&self) -> Node<'_> {
        (**self).node()
    }

    fn kind(&self) -> Kind {
        (**self).kind()
    }
}

impl<T: Encode + ?Sized> Encode for Rc<T> {
    fn node(&self) -> Node<'_> {
        (**self).node()
    }

    fn kind(&self) -> Kind {
        (**self).kind()
    }
}

impl<T: Encode + ?Sized> Encode for Arc<T> {
    fn node(&self) -> Node<'_> {
        (**self).node()
    }

    fn kind(&self) -> Kind {
        (**self).kind()
    }
}

///
/// Sequences
///

impl<T: Encode> Encode for [T] {
    fn node(&self) -> Node<'_> {
        Node::Sequence(self.iter().map(|v| v as &dyn Encode).collect())
    }

    fn kind(&self) -> Kind {
        Kind::Sequence
    }
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn node(&self) -> Node<'_> {
        self.as_slice().node()
    }

    fn kind(&self) -> Kind {
        Kind::Sequence
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn node(&self) -> Node<'_> {
        self.as_slice().node()
    }

    fn kind(&self) -> Kind {
        Kind::Sequence
    }
}

///
/// Mappings
///

impl<K, V> Encode for BTreeMap<K, V>
where
    K: AsRef<str>,
    V: Encode,
{
    fn node(&self) -> Node<'_> {
        Node::Mapping(
            self.iter()
                .map(|(k, v)| (Cow::Borrowed(k.as_ref()), v as &dyn Encode))
                .collect(),
        )
    }

    fn kind(&self) -> Kind {
        Kind::Mapping
    }
}

// hash order is arbitrary, so entries are emitted sorted by key
impl<K, V, S> Encode for HashMap<K, V, S>
where
    K: AsRef<str>,
    V: Encode,
    S: BuildHasher,
{
    fn node(&self) -> Node<'_> {
        let mut entries: Vec<(Cow<'_, str>, &dyn Encode)> = self
            .iter()
            .map(|(k, v)| (Cow::Borrowed(k.as_ref()), v as &dyn Encode))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        Node::Mapping(entries)
    }

    fn kind(&self) -> Kind {
        Kind::Mapping
    }
}

///
/// serde_json
///

impl Encode for Value {
    fn node(&self) -> Node<'_> {
        match self {
            Self::Null => Node::Null,
            Self::Bool(b) => Node::Bool(*b),
            Self::Number(n) => Node::Number(n.clone()),
            Self::String(s) => Node::String(Cow::Borrowed(s.as_str())),
            Self::Array(items) => items.as_slice().node(),
            Self::Object(map) => map.node(),
        }
    }

    fn kind(&self) -> Kind {
        match self {
            Self::Null => Kind::Null,
            Self::Bool(_) => Kind::Bool,
            Self::Number(_) => Kind::Number,
            Self::String(_) => Kind::String,
            Self::Array(_) => Kind::Sequence,
            Self::Object(_) => Kind::Mapping,
        }
    }
}

impl Encode for Map<String, Value> {
    fn node(&self) -> Node<'_> {
        Node::Mapping(
            self.iter()
                .map(|(k, v)| (Cow::Borrowed(k.as_str()), v as &dyn Encode))
                .collect(),
        )
    }

    fn kind(&self) -> Kind {
        Kind::Mapping
    }
}

///
/// chrono
///

#[cfg(feature = "chrono")]
impl<Tz> Encode for chrono::DateTime<Tz>
where
    Tz: chrono::TimeZone,
    Tz::Offset: std::fmt::Display,
{
    fn node(&self) -> Node<'_> {
        Node::String(Cow::Owned(
            self.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true),
        ))
    }
}
