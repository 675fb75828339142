//! Data models and serialization helpers.
//!
//! This module contains the member record read from the roster file, its
//! derived age, and the custom deserializers used while parsing the CSV.
pub mod member;
pub mod serde_helpers;
