//! The stratus CLI client library.
//!
//! This crate provides the core functionality for the stratus CLI
//! client: the control API client and its repository traits, the
//! persistent session, command definitions and the handlers that
//! execute them.
//!
//! # Modules
//!
//! - `actions`: Command handlers, one module per resource family
//! - `api`: Control API client and repository traits
//! - `commands`: CLI command and argument definitions
//! - `error`: Top-level error type with exit code mapping
//! - `exit_codes`: Process exit codes
//! - `model`: Data models for platform entities
//! - `requirements`: Session preconditions checked before handlers run
//! - `session`: Persistent session state
//! - `terminal`: User-facing input and output

pub mod actions;
pub mod api;
pub mod commands;
pub mod error;
pub mod exit_codes;
pub mod model;
pub mod requirements;
pub mod session;
pub mod terminal;
