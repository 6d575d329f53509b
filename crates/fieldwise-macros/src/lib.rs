//! Proc macros for Fieldwise.
//!
//! This crate provides the [`Record`] derive, which implements fieldwise's
//! `Reflect` and `Record` traits so that a struct's fields can be looked up
//! by name at runtime.
//!
//! It is re-exported from `fieldwise` under the default `derive` feature;
//! depend on `fieldwise` rather than on this crate directly.

mod record;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives `fieldwise::Record` and `fieldwise::Reflect` for a struct.
///
/// Every field is listed, in declaration order. Fields declared with any
/// `pub` visibility are *exported*: they can be used as grouping keys. The
/// other fields are still listed and can be sorted on or dug into, but their
/// values cannot be handed out.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `skip` | Leave this field out of the record |
/// | `rename = "..."` | Look the field up by a custom name |
///
/// # Generated Code
///
/// The macro generates:
///
/// 1. Field name constants for exported fields (e.g., `User::ID`, `User::NAME`)
/// 2. Implementation of `Record` (`type_name`, `field_names`, `field`)
/// 3. Implementation of `Reflect` returning `Value::Struct(self)`
///
/// Every field type must implement `fieldwise::Reflect`. For generic structs
/// the bounds are added to the generated impls.
///
/// # Example
///
/// ```ignore
/// use fieldwise::{index_by_field, order_by, Record};
///
/// #[derive(Record)]
/// pub struct User {
///     #[record(rename = "ID")]
///     pub id: u32,
///     pub name: String,
///     email: String,
///     #[record(skip)]
///     session: Option<Box<dyn std::any::Any>>,
/// }
///
/// let mut users = load_users();
/// order_by(&mut users, User::NAME, "asc");
/// let by_id = index_by_field(&users, User::ID);
/// ```
#[proc_macro_derive(Record, attributes(record))]
pub fn record_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::record_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
