//! # brewrec API
//!
//! REST boundary for the brewrec recommendation service.
//!
//! Translates `GET /recommend?drink=<name>` into an engine call and the
//! engine's result into a JSON response:
//!
//! - missing or empty `drink` parameter -> 400 with an `error` field
//! - unknown drink -> 404 with an `error` field
//! - success -> 200 with the serialized recommendation
//!
//! The engine is immutable shared state; handlers read it concurrently
//! with no locking.

pub mod rest;

pub use rest::RestApi;
