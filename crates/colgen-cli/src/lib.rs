//! Collection generator CLI library.
//!
//! Exposes the command implementations and output formatters used by the
//! `colgen` binary so they can be tested directly.

#![allow(clippy::missing_errors_doc)]

pub mod commands;
pub mod formatters;
