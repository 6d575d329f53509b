//! Fieldwise - index, group, sort and dig through collections by field.
//!
//! Fieldwise provides a handful of collection helpers that work on any
//! element type describing itself through the [`Reflect`] trait. It
//! supports:
//!
//! - Grouping elements by a field looked up by name, or by a key function
//! - Indexing elements by a key function, last element wins
//! - Stable sorting by a field looked up by name, ascending or descending
//! - Nested lookup through lists, maps and struct fields
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(feature = "derive")] {
//! use fieldwise::{dig, index_by_field, order_by, Key, Record, Value};
//!
//! #[derive(Debug, PartialEq, Record)]
//! pub struct Task {
//!     pub name: String,
//!     pub priority: u8,
//!     pub tags: Vec<String>,
//! }
//!
//! let mut tasks = vec![
//!     Task { name: "Write docs".into(), priority: 3, tags: vec!["docs".into()] },
//!     Task { name: "Fix bug".into(), priority: 5, tags: vec!["bug".into()] },
//!     Task { name: "Triage".into(), priority: 3, tags: vec![] },
//! ];
//!
//! order_by(&mut tasks, Task::PRIORITY, "desc");
//! assert_eq!(tasks[0].name, "Fix bug");
//!
//! let by_priority = index_by_field(&tasks, Task::PRIORITY);
//! assert_eq!(by_priority[&Key::Uint(3)].len(), 2);
//!
//! assert_eq!(
//!     dig(&tasks, &[0.into(), "tags".into(), 0.into()]),
//!     Some(Value::Str("bug"))
//! );
//! # }
//! ```
//!
//! # Faults
//!
//! The name-based operations ([`index_by_field`], [`order_by`], [`dig`],
//! [`struct_fields`]) treat a wrong field name, an element type without the
//! field, or a bad direction as a programming error and panic. Each one has
//! a `try_` twin returning [`Result`] for callers that want to recover.
//! The key-function operations ([`index_by`], [`group_by`],
//! [`order_by_key`]) cannot fail.
//!
//! # Field Kinds
//!
//! | Kind | Key for indexing | Sortable |
//! |------|------------------|----------|
//! | `Int` (signed integers) | yes | yes |
//! | `Uint` (unsigned integers) | yes | yes |
//! | `Float` | no | yes |
//! | `Str` | yes | yes |
//! | `Bool` | yes | no |
//! | `Null` | yes | no |
//! | `List`, `Map`, `Struct`, `Opaque` | no | no |
//!
//! # Features
//!
//! - `derive` (default): re-exports `#[derive(Record)]`.
//! - `tracing`: reports faults and early `dig` exits through `tracing`.

// Lets the derive's `::fieldwise::` paths resolve inside this crate's tests.
extern crate self as fieldwise;

mod dig;
mod error;
mod fields;
mod impls;
mod index;
mod key;
mod ordering;
mod traits;
mod value;

// Re-export public API
pub use dig::{dig, try_dig};
pub use error::{FieldwiseError, Result};
pub use fields::{struct_fields, try_struct_fields};
pub use index::{group_by, index_by, index_by_field, try_index_by_field};
pub use key::Key;
pub use ordering::{order_by, order_by_key, try_order_by, Dir};
pub use traits::{List, Map, Record, Reflect};
pub use value::{compare_values, Field, Kind, Value};

#[cfg(feature = "derive")]
pub use fieldwise_macros::Record;
