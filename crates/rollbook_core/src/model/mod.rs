//! Domain model for the student roster.
//!
//! # Responsibility
//! - Define the canonical record used by store and presentation layers.
//! - Own field-level validation for write paths.
//!
//! # Invariants
//! - Roll numbers are NOT unique; duplicates are a supported state.
//! - Records are set once at construction and never mutated in place.

pub mod student;
