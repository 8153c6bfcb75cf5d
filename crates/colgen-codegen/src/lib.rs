//! Code generation for paginated collection clients.
//!
//! Turns collection descriptors into Go source files using a Handlebars
//! template. Generation is a pure function of the descriptor: rendering
//! the same descriptor twice produces byte-identical output.
//!
//! # Architecture
//!
//! - [`naming`]: identifier transformation (`camelize`, `uncapitalize`,
//!   reserved words)
//! - [`template_engine`]: Handlebars wrapper with the built-in template
//! - [`generator`]: per-descriptor binding derivation and rendering
//! - [`batch`]: table-wide generation loop

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod batch;
pub mod generator;
pub mod naming;
pub mod template_engine;
pub mod types;

pub use batch::{BatchOptions, BatchReport, generate_table};
pub use generator::CollectionGenerator;
pub use naming::ReservedWords;
pub use template_engine::TemplateEngine;
pub use types::{CollectionArg, CollectionContext, DerivedParam};
