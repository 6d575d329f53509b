//! Nested lookup through lists, maps and struct fields.

use crate::error::{fault, FieldwiseError, Result};
use crate::key::Key;
use crate::traits::Reflect;
use crate::value::Value;

/// Walks `root` through `keys` and returns the value at the end of the path.
///
/// Each key is applied to the current value according to its kind:
///
/// - **list**: the key must be a non-negative integer below the length;
/// - **map**: the key must match one of the map's keys;
/// - **struct**: the key must be a string naming a field, `pub` or not.
///
/// Any other value, or a key that does not fit, ends the walk with `None`.
/// Remaining keys are not looked at. An empty path returns `root` itself.
///
/// # Panics
///
/// Panics if the path ends on a value reached through a field that is not
/// `pub`: the field is listed, but its value cannot be handed out. See
/// [`try_dig`].
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use fieldwise::{dig, Key, Value};
///
/// let numbers = vec![1, 2, 3];
/// assert_eq!(dig(&numbers, &[Key::from(1)]), Some(Value::Int(2)));
/// assert_eq!(dig(&numbers, &[Key::from(3)]), None);
///
/// let nested = HashMap::from([("a", HashMap::from([("b", 5)]))]);
/// assert_eq!(dig(&nested, &["a".into(), "b".into()]), Some(Value::Int(5)));
/// assert_eq!(dig(&nested, &["a".into(), "c".into()]), None);
/// ```
#[track_caller]
pub fn dig<'a>(root: &'a dyn Reflect, keys: &[Key]) -> Option<Value<'a>> {
    match try_dig(root, keys) {
        Ok(found) => found,
        Err(err) => fault(err),
    }
}

/// Walks `root` through `keys`, reporting an unreadable result as an error.
///
/// `Ok(None)` is the not-found outcome; `Err` is only returned when the path
/// resolves through a field that is not `pub`.
pub fn try_dig<'a>(root: &'a dyn Reflect, keys: &[Key]) -> Result<Option<Value<'a>>> {
    let mut current = root.reflect();
    let mut unexported: Option<(String, &'static str)> = None;

    for key in keys {
        let next = match current {
            Value::List(list) => key.as_index().and_then(|index| list.get(index)),
            Value::Map(map) => map.get(key),
            Value::Struct(record) => key
                .as_str()
                .filter(|name| record.field_names().iter().any(|listed| listed == name))
                .and_then(|name| record.field(name))
                .map(|field| {
                    if !field.exported && unexported.is_none() {
                        unexported = Some((field.name.to_string(), record.type_name()));
                    }
                    field.value
                }),
            _ => None,
        };

        match next {
            Some(value) => current = value,
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(%key, kind = %current.kind(), "dig stopped");
                return Ok(None);
            }
        }
    }

    match unexported {
        Some((field, type_name)) => Err(FieldwiseError::UnexportedField { field, type_name }),
        None => Ok(Some(current)),
    }
}
