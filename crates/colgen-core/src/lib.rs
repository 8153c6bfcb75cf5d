//! Core types, configuration and errors for the collection generator.
//!
//! This crate provides the foundational types shared by the codegen engine
//! and the command-line driver.
//!
//! # Architecture
//!
//! The core consists of:
//! - The endpoint descriptor model (`Descriptor`, `TypeTag`)
//! - The descriptor table loaded from TOML (`DescriptorTable`)
//! - The error hierarchy (`Error`, `Result`)
//! - CLI value types (`cli::OutputFormat`, `cli::ExitCode`)

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod descriptor;
mod error;

pub mod cli;

pub use config::{DescriptorTable, TableEntry};
pub use descriptor::{Descriptor, DescriptorBuilder, TypeTag};
pub use error::{Error, Result};
