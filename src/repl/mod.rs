//! Interactive read-print loop.
//!
//! Reads one line at a time and prints either the tokens scanned from it
//! or the program parsed from it.

pub mod repl;
