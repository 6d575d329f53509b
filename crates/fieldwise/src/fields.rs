//! Struct field listing.

use crate::error::{fault, FieldwiseError, Result};
use crate::traits::Reflect;
use crate::value::Value;

/// Lists a struct's field names in declaration order.
///
/// Fields that are not `pub` are listed too, even though
/// [`index_by_field`](crate::index_by_field) refuses them. Reference and
/// pointer wrappers are looked through, nested ones included.
///
/// # Panics
///
/// Panics if `value` is not a struct. See [`try_struct_fields`].
///
/// # Example
///
/// ```
/// # #[cfg(feature = "derive")] {
/// use fieldwise::{struct_fields, Record};
///
/// #[derive(Record)]
/// struct Pair {
///     pub hoge: String,
///     huga: String,
/// }
///
/// let pair = Pair { hoge: String::new(), huga: String::new() };
/// assert_eq!(struct_fields(&pair), ["hoge", "huga"]);
/// assert_eq!(struct_fields(&Box::new(&pair)), ["hoge", "huga"]);
/// # }
/// ```
#[track_caller]
pub fn struct_fields(value: &dyn Reflect) -> Vec<&'static str> {
    match try_struct_fields(value) {
        Ok(names) => names,
        Err(err) => fault(err),
    }
}

/// Lists a struct's field names, reporting a non-struct value as an error.
pub fn try_struct_fields(value: &dyn Reflect) -> Result<Vec<&'static str>> {
    match value.reflect() {
        Value::Struct(record) => Ok(record.field_names().to_vec()),
        other => Err(FieldwiseError::NotStruct { kind: other.kind() }),
    }
}
