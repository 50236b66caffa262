//! Common utilities for the bilby markup libraries.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - colored terminal output for markup constructs
//!   that are accepted but not tracked in detail

pub mod warning;
