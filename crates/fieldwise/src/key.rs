//! Owned mapping keys.
//!
//! [`Key`] is the hashable counterpart of the scalar [`Value`] variants. It
//! keys the groups built by [`index_by_field`](crate::index_by_field) and
//! names the steps of a [`dig`](crate::dig) path.

use std::fmt;

use crate::value::{Kind, Value};

/// Hashable key taken from, or matched against, a reflected value.
///
/// # Example
///
/// ```
/// use fieldwise::{Key, Value};
///
/// assert_eq!(Key::from_value(&Value::Str("a")), Some(Key::from("a")));
/// assert_eq!(Key::from_value(&Value::Float(1.0)), None);
///
/// // Integer keys match across signedness
/// assert!(Key::from(3).matches(&Value::Uint(3)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Str(String),
}

impl Key {
    /// Builds a key from a scalar value.
    ///
    /// Returns `None` for floats and composite values, which have no
    /// usable equality for keying.
    pub fn from_value(value: &Value<'_>) -> Option<Key> {
        match value {
            Value::Null => Some(Key::Null),
            Value::Bool(b) => Some(Key::Bool(*b)),
            Value::Int(n) => Some(Key::Int(*n)),
            Value::Uint(n) => Some(Key::Uint(*n)),
            Value::Str(s) => Some(Key::Str((*s).to_string())),
            _ => None,
        }
    }

    /// Returns the kind of value this key was built from.
    pub fn kind(&self) -> Kind {
        match self {
            Key::Null => Kind::Null,
            Key::Bool(_) => Kind::Bool,
            Key::Int(_) => Kind::Int,
            Key::Uint(_) => Kind::Uint,
            Key::Str(_) => Kind::Str,
        }
    }

    /// Tests this key against a reflected map key.
    ///
    /// Integers compare by numeric value regardless of signedness; every
    /// other kind must match exactly.
    pub fn matches(&self, value: &Value<'_>) -> bool {
        match (self, value) {
            (Key::Null, Value::Null) => true,
            (Key::Bool(a), Value::Bool(b)) => a == b,
            (Key::Int(a), Value::Int(b)) => a == b,
            (Key::Uint(a), Value::Uint(b)) => a == b,
            (Key::Int(a), Value::Uint(b)) => u64::try_from(*a).is_ok_and(|a| a == *b),
            (Key::Uint(a), Value::Int(b)) => u64::try_from(*b).is_ok_and(|b| *a == b),
            (Key::Str(a), Value::Str(b)) => a == b,
            _ => false,
        }
    }

    /// Interprets this key as a list index.
    ///
    /// Negative integers and non-integer keys yield `None`.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Int(n) => usize::try_from(*n).ok(),
            Key::Uint(n) => usize::try_from(*n).ok(),
            _ => None,
        }
    }

    /// Returns the string, if this is a `Str` key.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Null => f.write_str("null"),
            Key::Bool(b) => write!(f, "{b}"),
            Key::Int(n) => write!(f, "{n}"),
            Key::Uint(n) => write!(f, "{n}"),
            Key::Str(s) => write!(f, "{s:?}"),
        }
    }
}

macro_rules! key_from {
    ($variant:ident as $wide:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Key {
                fn from(n: $t) -> Self {
                    Key::$variant(n as $wide)
                }
            }
        )*
    };
}

key_from!(Int as i64: i8, i16, i32, i64, isize);
key_from!(Uint as u64: u8, u16, u32, u64, usize);

impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Key::Bool(b)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<()> for Key {
    fn from(_: ()) -> Self {
        Key::Null
    }
}
