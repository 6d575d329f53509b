//! Reflection traits.
//!
//! [`Reflect`] is the entry point: anything that can describe its own shape
//! as a [`Value`]. Composite shapes are exposed through [`Record`] (structs),
//! [`List`] (indexable sequences) and [`Map`] (key-value mappings).

use crate::key::Key;
use crate::value::{Field, Value};

/// Trait for types whose value can be inspected at runtime.
///
/// Implementations exist for the primitive types, strings, `Option`, smart
/// pointers, the standard sequences and maps. Structs get one from
/// `#[derive(Record)]`.
///
/// # Manual Implementation
///
/// ```
/// use fieldwise::{Reflect, Value};
///
/// struct Celsius(f32);
///
/// impl Reflect for Celsius {
///     fn reflect(&self) -> Value<'_> {
///         Value::Float(self.0 as f64)
///     }
/// }
///
/// assert_eq!(Celsius(21.5).reflect(), Value::Float(21.5));
/// ```
pub trait Reflect {
    /// Returns the runtime view of this value.
    fn reflect(&self) -> Value<'_>;
}

/// Trait for structs whose fields can be looked up by name.
///
/// This trait is typically derived using `#[derive(Record)]`, but can also be
/// implemented manually.
///
/// # Derive Usage
///
/// ```
/// # #[cfg(feature = "derive")] {
/// use fieldwise::{Record, Value};
///
/// #[derive(Record)]
/// pub struct User {
///     pub id: u32,
///     pub name: String,
///     email: String,
/// }
///
/// let user = User { id: 1, name: "kato".into(), email: "k@example.com".into() };
///
/// assert_eq!(user.field_names(), &["id", "name", "email"]);
/// assert_eq!(user.field(User::NAME).map(|f| f.value), Some(Value::Str("kato")));
/// assert_eq!(user.field("email").map(|f| f.exported), Some(false));
/// # }
/// ```
///
/// # Manual Implementation
///
/// ```
/// use fieldwise::{Field, Record, Reflect, Value};
///
/// struct Point {
///     pub x: i32,
///     pub y: i32,
/// }
///
/// impl Record for Point {
///     fn type_name(&self) -> &'static str {
///         "Point"
///     }
///
///     fn field_names(&self) -> &'static [&'static str] {
///         &["x", "y"]
///     }
///
///     fn field(&self, name: &str) -> Option<Field<'_>> {
///         match name {
///             "x" => Some(Field::exported("x", self.x.reflect())),
///             "y" => Some(Field::exported("y", self.y.reflect())),
///             _ => None,
///         }
///     }
/// }
///
/// impl Reflect for Point {
///     fn reflect(&self) -> Value<'_> {
///         Value::Struct(self)
///     }
/// }
/// ```
pub trait Record {
    /// Returns the struct's type name, used in fault messages.
    fn type_name(&self) -> &'static str;

    /// Returns every field name in declaration order, `pub` or not.
    fn field_names(&self) -> &'static [&'static str];

    /// Looks up a field by name.
    ///
    /// Returns `None` if no field has that name. Fields that are not `pub`
    /// are returned with [`Field::exported`] set to `false`.
    fn field(&self, name: &str) -> Option<Field<'_>>;
}

/// Indexable sequence of reflected values.
pub trait List {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Element at `index`, or `None` if out of range.
    fn get(&self, index: usize) -> Option<Value<'_>>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Key-value mapping of reflected values.
pub trait Map {
    /// Number of entries.
    fn len(&self) -> usize;

    /// Iterates over all entries, in the map's own order.
    fn entries(&self) -> Box<dyn Iterator<Item = (Value<'_>, Value<'_>)> + '_>;

    /// Looks up the entry whose key matches `key`.
    ///
    /// The default implementation scans [`entries`](Map::entries) and
    /// compares with [`Key::matches`].
    fn get(&self, key: &Key) -> Option<Value<'_>> {
        self.entries()
            .find(|(k, _)| key.matches(k))
            .map(|(_, v)| v)
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
