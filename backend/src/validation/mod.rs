//! Request payload validation.
//!
//! Payload structs derive `Validate` for field-level constraints; rules that
//! several payloads share live in [`rules`].

pub mod rules;

pub use validator::Validate;
