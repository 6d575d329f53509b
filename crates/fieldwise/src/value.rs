//! Runtime value types for reflective field access.
//!
//! The [`Value`] enum is what a [`Reflect`](crate::Reflect) implementation
//! hands out: a borrowed, copyable view of a value's dynamic shape. Scalars
//! are widened to one variant per family, composites are trait objects that
//! can be walked further.

use std::cmp::Ordering;
use std::fmt;

use crate::traits::{List, Map, Record};

/// Dynamic kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Int,
    Uint,
    Float,
    Str,
    List,
    Map,
    Struct,
    Opaque,
}

impl Kind {
    /// Returns the display name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::Str => "string",
            Kind::List => "list",
            Kind::Map => "map",
            Kind::Struct => "struct",
            Kind::Opaque => "opaque",
        }
    }

    /// Returns `true` for the kinds the sorter knows how to order.
    pub fn is_orderable(self) -> bool {
        matches!(self, Kind::Int | Kind::Uint | Kind::Float | Kind::Str)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime value, borrowed from the reflected source.
///
/// # Example
///
/// ```
/// use fieldwise::{Reflect, Value};
///
/// assert_eq!(7u8.reflect(), Value::Uint(7));
/// assert_eq!((-7i16).reflect(), Value::Int(-7));
/// assert_eq!("x".reflect(), Value::Str("x"));
/// assert_eq!(None::<i32>.reflect(), Value::Null);
/// ```
#[derive(Clone, Copy)]
pub enum Value<'a> {
    /// Absent value (`None`, `()`).
    Null,
    /// Boolean value.
    Bool(bool),
    /// Any signed integer, widened.
    Int(i64),
    /// Any unsigned integer, widened.
    Uint(u64),
    /// `f32` or `f64`, widened.
    Float(f64),
    /// String value (borrowed).
    Str(&'a str),
    /// Indexable sequence.
    List(&'a dyn List),
    /// Key-value mapping.
    Map(&'a dyn Map),
    /// Struct with named fields.
    Struct(&'a dyn Record),
    /// Value with no reflected structure; carries its type name.
    Opaque(&'static str),
}

impl<'a> Value<'a> {
    /// Returns the dynamic kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Uint(_) => Kind::Uint,
            Value::Float(_) => Kind::Float,
            Value::Str(_) => Kind::Str,
            Value::List(_) => Kind::List,
            Value::Map(_) => Kind::Map,
            Value::Struct(_) => Kind::Struct,
            Value::Opaque(_) => Kind::Opaque,
        }
    }

    /// Returns `true` if this is a `Null` value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Uint(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&'a dyn List> {
        match self {
            Value::List(list) => Some(*list),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&'a dyn Map> {
        match self {
            Value::Map(map) => Some(*map),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&'a dyn Record> {
        match self {
            Value::Struct(record) => Some(*record),
            _ => None,
        }
    }
}

/// Compares two values of the same orderable kind.
///
/// Returns `None` if the kinds differ or either kind has no ordering.
/// Floats compare numerically, so `-0.0` and `0.0` are equal; NaN sorts
/// above every number and equal to any other NaN.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Option<Ordering> {
    match (a, b) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Uint(a), Value::Uint(b)) => Some(a.cmp(b)),
        (Value::Float(a), Value::Float(b)) => Some(compare_floats(*a, *b)),
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

fn compare_floats(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

impl PartialEq for Value<'_> {
    /// Structural equality; composites compare element by element.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Uint(a), Value::Uint(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Opaque(a), Value::Opaque(b)) => a == b,
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && (0..a.len()).all(|i| a.get(i) == b.get(i))
            }
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len()
                    && a.entries()
                        .all(|(key, value)| b.entries().any(|(k, v)| k == key && v == value))
            }
            (Value::Struct(a), Value::Struct(b)) => {
                a.type_name() == b.type_name()
                    && a.field_names() == b.field_names()
                    && a
                        .field_names()
                        .iter()
                        .all(|name| a.field(name).map(|f| f.value) == b.field(name).map(|f| f.value))
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Value::Uint(n) => f.debug_tuple("Uint").field(n).finish(),
            Value::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Opaque(name) => f.debug_tuple("Opaque").field(name).finish(),
            Value::List(list) => f
                .debug_list()
                .entries((0..list.len()).filter_map(|i| list.get(i)))
                .finish(),
            Value::Map(map) => f.debug_map().entries(map.entries()).finish(),
            Value::Struct(record) => {
                let mut out = f.debug_struct(record.type_name());
                for name in record.field_names() {
                    if let Some(field) = record.field(name) {
                        out.field(name, &field.value);
                    }
                }
                out.finish()
            }
        }
    }
}

/// A struct field looked up by name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field<'a> {
    /// The name the field is looked up by.
    pub name: &'static str,
    /// The field's current value.
    pub value: Value<'a>,
    /// Whether the field is declared `pub` (in any form).
    pub exported: bool,
}

impl<'a> Field<'a> {
    /// Creates a `pub` field.
    pub fn exported(name: &'static str, value: Value<'a>) -> Self {
        Field {
            name,
            value,
            exported: true,
        }
    }

    /// Creates a field that is not `pub`.
    pub fn private(name: &'static str, value: Value<'a>) -> Self {
        Field {
            name,
            value,
            exported: false,
        }
    }
}
