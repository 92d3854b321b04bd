//! FFI surface for the Rollbook form UI.

pub mod api;
