//! Sorting by field.
//!
//! Provides [`Dir`] for sort direction, [`order_by`] for sorting by a field
//! looked up by name and [`order_by_key`] for sorting by a key function.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::{fault, FieldwiseError, Result};
use crate::traits::Reflect;
use crate::value::{compare_values, Value};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering. Equal stays equal, which is what
    /// keeps a stable sort stable in both directions.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dir {
    type Err = FieldwiseError;

    /// Parses exactly `"asc"` or `"desc"`.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(Dir::Asc),
            "desc" => Ok(Dir::Desc),
            other => Err(FieldwiseError::InvalidDirection(other.to_string())),
        }
    }
}

/// Sorts elements in place by a named field and returns the same slice.
///
/// The sort is stable in both directions: elements whose fields compare
/// equal keep their input order, for `"desc"` as well as `"asc"`.
///
/// Fields are compared by kind: signed integers as `i64`, unsigned integers
/// as `u64`, floats as `f64` and strings byte-wise. Fields that are not `pub`
/// can be sorted on.
///
/// # Panics
///
/// Panics if `direction` is not `"asc"` or `"desc"`, and, when there are at
/// least two elements to compare, if the field is missing, has a kind with no
/// ordering, or differs in kind between elements. See [`try_order_by`].
///
/// # Example
///
/// ```
/// # #[cfg(feature = "derive")] {
/// use fieldwise::{order_by, Record};
///
/// #[derive(Debug, PartialEq, Record)]
/// pub struct Row {
///     pub id: u32,
///     pub name: &'static str,
/// }
///
/// let mut rows = vec![
///     Row { id: 1, name: "b" },
///     Row { id: 1, name: "a" },
///     Row { id: 2, name: "c" },
/// ];
///
/// order_by(&mut rows, Row::ID, "desc");
///
/// let names: Vec<_> = rows.iter().map(|r| r.name).collect();
/// assert_eq!(names, ["c", "b", "a"]);
/// # }
/// ```
#[track_caller]
pub fn order_by<'s, T: Reflect>(items: &'s mut [T], field: &str, direction: &str) -> &'s mut [T] {
    if let Err(err) = try_order_by(&mut *items, field, direction) {
        fault(err);
    }
    items
}

/// Sorts elements in place by a named field, reporting misuse as an error.
///
/// The field is read once per element before any element moves, so on error
/// the slice is left in its input order. With fewer than two elements
/// nothing is compared and only the direction is checked.
pub fn try_order_by<'s, T: Reflect>(
    items: &'s mut [T],
    field: &str,
    direction: &str,
) -> Result<&'s mut [T]> {
    let dir: Dir = direction.parse()?;

    #[cfg(feature = "tracing")]
    tracing::trace!(field, %dir, len = items.len(), "order_by");

    if items.len() < 2 {
        return Ok(items);
    }

    let order = sorted_positions(items, field, dir)?;
    apply_permutation(items, &order);
    Ok(items)
}

/// Computes the stable sorted order of `items` as a list of input positions.
fn sorted_positions<T: Reflect>(items: &[T], field: &str, dir: Dir) -> Result<Vec<usize>> {
    let values = items
        .iter()
        .map(|item| field_value(item, field))
        .collect::<Result<Vec<_>>>()?;

    let Some(first) = values.first().map(Value::kind) else {
        return Ok(Vec::new());
    };
    for value in &values {
        let kind = value.kind();
        if !kind.is_orderable() {
            return Err(FieldwiseError::UnsupportedFieldType {
                field: field.to_string(),
                kind,
            });
        }
        if kind != first {
            return Err(FieldwiseError::MismatchedFieldTypes {
                field: field.to_string(),
                left: first,
                right: kind,
            });
        }
    }

    let mut order: Vec<usize> = (0..values.len()).collect();
    // Kinds are uniform and orderable here, so every comparison is defined.
    order.sort_by(|&a, &b| {
        dir.apply(compare_values(&values[a], &values[b]).unwrap_or(Ordering::Equal))
    });
    Ok(order)
}

/// Reads a field for ordering. Unlike indexing, non-`pub` fields are allowed.
fn field_value<'a, T: Reflect + ?Sized>(item: &'a T, field: &str) -> Result<Value<'a>> {
    let record = match item.reflect() {
        Value::Struct(record) => record,
        other => return Err(FieldwiseError::NotStruct { kind: other.kind() }),
    };

    record
        .field(field)
        .map(|found| found.value)
        .ok_or_else(|| FieldwiseError::NoSuchField {
            field: field.to_string(),
            type_name: record.type_name(),
        })
}

/// Rearranges `items` so that position `i` holds the element that was at
/// `order[i]`.
fn apply_permutation<T>(items: &mut [T], order: &[usize]) {
    for i in 0..items.len() {
        // Elements before `i` are already placed; follow the swaps made so
        // far to find where the wanted element currently sits.
        let mut source = order[i];
        while source < i {
            source = order[source];
        }
        items.swap(i, source);
    }
}

/// Sorts elements in place by the key computed by `key_fn`.
///
/// Stable in both directions, like [`order_by`], with no fault cases.
///
/// # Example
///
/// ```
/// use fieldwise::{order_by_key, Dir};
///
/// let mut words = ["bb", "a", "cc", "d"];
/// order_by_key(&mut words, Dir::Desc, |w| w.len());
///
/// assert_eq!(words, ["bb", "cc", "a", "d"]);
/// ```
pub fn order_by_key<T, K, F>(items: &mut [T], dir: Dir, mut key_fn: F) -> &mut [T]
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    items.sort_by(|a, b| dir.apply(key_fn(a).cmp(&key_fn(b))));
    items
}
