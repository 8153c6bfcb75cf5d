//! Command implementations for the `colgen` CLI.
//!
//! Each command module loads what it needs, performs the operation, and
//! prints its result in the requested output format.

pub mod check;
pub mod common;
pub mod completions;
pub mod generate;
pub mod list;
pub mod render;
