//! Indexing and grouping.
//!
//! [`index_by_field`] groups by a field looked up by name. [`index_by`] and
//! [`group_by`] take a key function instead and cannot fault.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{fault, FieldwiseError, Result};
use crate::key::Key;
use crate::traits::Record;

/// Groups elements by the value of a named field.
///
/// Each group lists its elements in input order.
///
/// # Panics
///
/// Panics if the field does not exist or is not `pub`, or if its value
/// cannot be used as a key. See [`try_index_by_field`] for the non-panicking
/// form.
///
/// The element type must implement [`Record`], so a slice of non-structs is
/// rejected even when it is empty:
///
/// ```compile_fail
/// use fieldwise::index_by_field;
///
/// let numbers: Vec<i32> = Vec::new();
/// index_by_field(&numbers, "id");
/// ```
///
/// # Example
///
/// ```
/// # #[cfg(feature = "derive")] {
/// use fieldwise::{index_by_field, Key, Record};
///
/// #[derive(Debug, PartialEq, Record)]
/// pub struct Person {
///     pub name: String,
///     pub age: u32,
/// }
///
/// let people = vec![
///     Person { name: "Alice".into(), age: 30 },
///     Person { name: "Bob".into(), age: 25 },
///     Person { name: "Alice".into(), age: 28 },
/// ];
///
/// let by_name = index_by_field(&people, Person::NAME);
/// assert_eq!(by_name[&Key::from("Alice")], vec![&people[0], &people[2]]);
/// assert_eq!(by_name[&Key::from("Bob")], vec![&people[1]]);
/// # }
/// ```
#[track_caller]
pub fn index_by_field<'a, T: Record>(items: &'a [T], field: &str) -> HashMap<Key, Vec<&'a T>> {
    match try_index_by_field(items, field) {
        Ok(groups) => groups,
        Err(err) => fault(err),
    }
}

/// Groups elements by the value of a named field, reporting misuse as an
/// error.
///
/// An empty slice yields an empty map.
pub fn try_index_by_field<'a, T: Record>(
    items: &'a [T],
    field: &str,
) -> Result<HashMap<Key, Vec<&'a T>>> {
    let mut result: HashMap<Key, Vec<&'a T>> = HashMap::new();

    for item in items {
        let key = field_key(item, field)?;
        result.entry(key).or_default().push(item);
    }

    Ok(result)
}

fn field_key<T: Record + ?Sized>(record: &T, field: &str) -> Result<Key> {
    let found = record
        .field(field)
        .ok_or_else(|| FieldwiseError::NoSuchField {
            field: field.to_string(),
            type_name: record.type_name(),
        })?;

    if !found.exported {
        return Err(FieldwiseError::UnexportedField {
            field: field.to_string(),
            type_name: record.type_name(),
        });
    }

    Key::from_value(&found.value).ok_or_else(|| FieldwiseError::UnhashableField {
        field: field.to_string(),
        kind: found.value.kind(),
    })
}

/// Maps each element to the key computed by `key_fn`.
///
/// When several elements produce the same key, the last one wins.
///
/// # Example
///
/// ```
/// use fieldwise::index_by;
///
/// let words = ["apple", "avocado", "banana"];
/// let by_initial = index_by(&words, |w| w.chars().next());
///
/// assert_eq!(by_initial[&Some('a')], &"avocado");
/// assert_eq!(by_initial[&Some('b')], &"banana");
/// ```
pub fn index_by<'a, T, K, F>(items: &'a [T], mut key_fn: F) -> HashMap<K, &'a T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut result = HashMap::with_capacity(items.len());
    for item in items {
        result.insert(key_fn(item), item);
    }
    result
}

/// Groups elements by the key computed by `key_fn`.
///
/// Every element is kept; each group lists its elements in input order.
///
/// # Example
///
/// ```
/// use fieldwise::group_by;
///
/// let numbers = [1, 2, 3, 4, 5];
/// let by_parity = group_by(&numbers, |n| n % 2 == 0);
///
/// assert_eq!(by_parity[&true], vec![&2, &4]);
/// assert_eq!(by_parity[&false], vec![&1, &3, &5]);
/// ```
pub fn group_by<'a, T, K, F>(items: &'a [T], mut key_fn: F) -> HashMap<K, Vec<&'a T>>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut result: HashMap<K, Vec<&'a T>> = HashMap::new();
    for item in items {
        result.entry(key_fn(item)).or_default().push(item);
    }
    result
}
