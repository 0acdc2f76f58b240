//! Error types and error handling for the front end.
//!
//! This module defines the diagnostics the parser collects while it
//! works. It includes:
//!
//! - Error structures with source location information
//! - Specific error variants for each recoverable failure
//! - Error names and suggestions for display

pub mod errors;
