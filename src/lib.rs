//! Gender balance analysis of parliament members.
//!
//! Loads a roster of members from a semicolon separated file into a
//! [`collection::MemberCollection`] and reports on it: gender charts, party
//! breakdowns, age splits and lookups by name or position.

pub mod analysis;
pub mod charts;
pub mod collection;
pub mod error;
pub mod models;
pub mod parser;
pub mod registry;
pub mod ui;
