//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into form-level entry points.
//! - Keep presentation layers decoupled from storage details.

pub mod student_service;
