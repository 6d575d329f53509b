//! Implementation of the `#[derive(Record)]` macro.
//!
//! This module provides derive macro support for fieldwise's reflection
//! traits, generating field lookups and field constants from a struct
//! definition.

mod attrs;
mod derive;

pub use derive::record_derive_impl;
