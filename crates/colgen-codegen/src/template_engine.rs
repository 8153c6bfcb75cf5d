//! Template engine for collection source generation using Handlebars.
//!
//! Provides a wrapper around Handlebars with the built-in collection
//! template pre-registered under [`COLLECTION_TEMPLATE`].
//!
//! # Examples
//!
//! ```
//! use colgen_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let mut engine = TemplateEngine::new().unwrap();
//! engine.register_template_string("greeting", "// {{name}}").unwrap();
//!
//! let out = engine.render("greeting", &json!({"name": "Hosts"})).unwrap();
//! assert_eq!(out, "// Hosts");
//! ```

use colgen_core::{Error, Result};
use handlebars::Handlebars;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Name under which the collection template is registered.
pub const COLLECTION_TEMPLATE: &str = "collection";

const BUILTIN_COLLECTION_TEMPLATE: &str = include_str!("../templates/collection.go.hbs");

/// Template engine for code generation.
///
/// Strict mode is enabled: a template referencing a binding the context
/// does not provide fails instead of rendering an empty string. HTML
/// escaping is disabled since the output is source code.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`; one engine can serve any number of
/// generators.
#[derive(Debug)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Creates a new engine with the built-in collection template.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with the valid built-in template).
    ///
    /// # Examples
    ///
    /// ```
    /// use colgen_codegen::template_engine::{TemplateEngine, COLLECTION_TEMPLATE};
    ///
    /// let engine = TemplateEngine::new().unwrap();
    /// assert!(engine.has_template(COLLECTION_TEMPLATE));
    /// ```
    pub fn new() -> Result<Self> {
        Self::with_template(BUILTIN_COLLECTION_TEMPLATE)
    }

    /// Creates an engine whose collection template is `template` instead
    /// of the built-in one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if `template` does not parse.
    pub fn with_template(template: &str) -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        let mut engine = Self { handlebars };
        engine.register_template_string(COLLECTION_TEMPLATE, template)?;

        Ok(engine)
    }

    /// Creates an engine whose collection template is read from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or
    /// [`Error::TemplateError`] if it does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let template = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Using collection template from {}", path.display());

        Self::with_template(&template)
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if:
    /// - Template name is not registered
    /// - Context cannot be serialized
    /// - A binding referenced by the template is missing
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::TemplateError {
                template: template_name.to_string(),
                message: format!("rendering failed: {e}"),
            })
    }

    /// Registers a custom template, replacing any template of the same name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if the template string is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use colgen_codegen::template_engine::TemplateEngine;
    ///
    /// let mut engine = TemplateEngine::new().unwrap();
    /// assert!(engine.register_template_string("broken", "{{#each items}}").is_err());
    /// ```
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::TemplateError {
                template: name.to_string(),
                message: format!("failed to register template: {e}"),
            })
    }

    /// Returns `true` if a template named `name` is registered.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}
