//! Collection generator.
//!
//! Derives every template binding from one [`Descriptor`] and renders the
//! collection template with them.
//!
//! # Examples
//!
//! ```
//! use colgen_codegen::{CollectionGenerator, TemplateEngine};
//! use colgen_core::Descriptor;
//!
//! let engine = TemplateEngine::new().unwrap();
//! let descriptor = Descriptor::builder("Location", "Location")
//!     .path("/locations")
//!     .build()
//!     .unwrap();
//!
//! let generator = CollectionGenerator::new(&engine, descriptor);
//! assert_eq!(generator.collection_type_name_plural(), "Locations");
//!
//! let source = generator.render().unwrap();
//! assert!(source.contains("type LocationsCollection interface"));
//! ```

use crate::naming::{ReservedWords, field_name, method_name, uncapitalize};
use crate::template_engine::{COLLECTION_TEMPLATE, TemplateEngine};
use crate::types::{CollectionArg, CollectionContext, DerivedParam};
use colgen_core::{Descriptor, Error, Result, TypeTag};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Generator for a single paginated collection.
///
/// Borrows the shared [`TemplateEngine`] and owns its descriptor. Every
/// derived value is a pure function of the descriptor, so repeated calls
/// and repeated renders produce identical results.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing safe use across threads.
#[derive(Debug)]
pub struct CollectionGenerator<'e> {
    engine: &'e TemplateEngine,
    descriptor: Descriptor,
    reserved_words: ReservedWords,
    element_uncapitalized: OnceLock<String>,
}

impl<'e> CollectionGenerator<'e> {
    /// Creates a generator using the default reserved-word table.
    #[must_use]
    pub fn new(engine: &'e TemplateEngine, descriptor: Descriptor) -> Self {
        Self {
            engine,
            descriptor,
            reserved_words: ReservedWords::default(),
            element_uncapitalized: OnceLock::new(),
        }
    }

    /// Replaces the reserved-word table used for parameter field names.
    #[must_use]
    pub fn with_reserved_words(mut self, reserved_words: ReservedWords) -> Self {
        self.reserved_words = reserved_words;
        self
    }

    /// The descriptor this generator renders.
    #[must_use]
    pub const fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// Singular collection type name, as declared.
    #[must_use]
    pub fn collection_type_name(&self) -> &str {
        self.descriptor.name()
    }

    /// Explicit plural name, or the singular name with `s` appended.
    ///
    /// No inflection rules are applied: `Policy` becomes `Policys` unless
    /// a plural is declared.
    #[must_use]
    pub fn collection_type_name_plural(&self) -> String {
        self.descriptor
            .plural_name()
            .map_or_else(|| format!("{}s", self.descriptor.name()), str::to_string)
    }

    /// Element type returned by the collection.
    #[must_use]
    pub fn collection_element_type(&self) -> &str {
        self.descriptor.entity()
    }

    /// Element type with its first character lower-cased.
    #[must_use]
    pub fn collection_element_uncapitalized(&self) -> &str {
        self.element_uncapitalized
            .get_or_init(|| uncapitalize(self.descriptor.entity()))
    }

    /// Explicit variable prefix. The template falls back to
    /// [`Self::collection_element_uncapitalized`] when absent.
    #[must_use]
    pub fn collection_var_prefix(&self) -> Option<&str> {
        self.descriptor.var_prefix()
    }

    /// Documentation URL, if declared.
    #[must_use]
    pub fn collection_api_url(&self) -> Option<&str> {
        self.descriptor.api_url()
    }

    /// Path template with placeholders left unresolved.
    #[must_use]
    pub fn resource_path(&self) -> &str {
        self.descriptor.path()
    }

    /// `"<name> <type>"` fragments for a constructor signature, in
    /// declaration order.
    #[must_use]
    pub fn collection_args_prepared(&self) -> Vec<String> {
        self.descriptor
            .args()
            .iter()
            .map(|(name, tag)| format!("{name} {tag}"))
            .collect()
    }

    /// Positional arguments in declaration order.
    #[must_use]
    pub const fn collection_args(&self) -> &IndexMap<String, TypeTag> {
        self.descriptor.args()
    }

    /// Query parameters with their derived method and field names.
    ///
    /// Built fresh on each call; the list is equal every time.
    #[must_use]
    pub fn collection_params(&self) -> Vec<DerivedParam> {
        self.descriptor
            .params()
            .iter()
            .map(|(wire_name, tag)| DerivedParam {
                method_name: method_name(wire_name),
                variable_name: field_name(wire_name, &self.reserved_words),
                param_type: *tag,
                param_name: wire_name.clone(),
            })
            .collect()
    }

    /// Assembles every binding into the template context.
    #[must_use]
    pub fn context(&self) -> CollectionContext {
        CollectionContext {
            collection_type_name: self.collection_type_name().to_string(),
            collection_type_name_plural: self.collection_type_name_plural(),
            collection_element_type: self.collection_element_type().to_string(),
            collection_element_uncapitalized: self.collection_element_uncapitalized().to_string(),
            collection_var_prefix: self.collection_var_prefix().map(str::to_string),
            collection_api_url: self.collection_api_url().map(str::to_string),
            resource_path: self.resource_path().to_string(),
            collection_args_prepared: self.collection_args_prepared(),
            collection_args: self
                .collection_args()
                .iter()
                .map(|(name, tag)| CollectionArg {
                    name: name.clone(),
                    type_tag: *tag,
                })
                .collect(),
            collection_params: self.collection_params(),
        }
    }

    /// Renders the collection template.
    ///
    /// A placeholder/argument mismatch is logged as a warning but does not
    /// stop rendering.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if the template fails to render.
    pub fn render(&self) -> Result<String> {
        if let Err(e) = self.descriptor.check_placeholders() {
            tracing::warn!("{e}");
        }

        tracing::debug!(
            "Rendering collection {} ({} args, {} params)",
            self.collection_type_name(),
            self.descriptor.args().len(),
            self.descriptor.params().len()
        );

        self.engine.render(COLLECTION_TEMPLATE, &self.context())
    }

    /// Renders and writes the result to `path`, replacing any existing file.
    ///
    /// Parent directories are not created.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if rendering fails, or [`Error::Io`]
    /// if the file cannot be written. Nothing is written when rendering fails.
    pub fn render_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let source = self.render()?;

        fs::write(path, source).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(
            "Generated {} -> {}",
            self.collection_type_name(),
            path.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> TemplateEngine {
        TemplateEngine::new().unwrap()
    }

    fn location() -> Descriptor {
        Descriptor::builder("Location", "Location")
            .path("/locations")
            .build()
            .unwrap()
    }

    fn ssl_certificates() -> Descriptor {
        Descriptor::builder("SSLCertificate", "SSLCertificate")
            .path("/ssl_certificates")
            .param("search_pattern", TypeTag::String)
            .param("type", TypeTag::String)
            .build()
            .unwrap()
    }

    fn host_networks() -> Descriptor {
        Descriptor::builder("HostNetwork", "Network")
            .path("/hosts/%s/%s/networks")
            .var_prefix("hostNetworks")
            .api_url("https://developers.servers.com/api-documentation/v1/#operation/ListAllNetworksForAnExistingDedicatedServer")
            .arg("hostType", TypeTag::String)
            .arg("hostID", TypeTag::String)
            .build()
            .unwrap()
    }

    // ========================================================================
    // Derived Name Tests
    // ========================================================================

    #[test]
    fn test_location_derived_names() {
        let engine = engine();
        let generator = CollectionGenerator::new(&engine, location());

        assert_eq!(generator.collection_type_name(), "Location");
        assert_eq!(generator.collection_type_name_plural(), "Locations");
        assert_eq!(generator.collection_element_type(), "Location");
        assert_eq!(generator.collection_element_uncapitalized(), "location");
        assert_eq!(generator.collection_var_prefix(), None);
        assert_eq!(generator.collection_api_url(), None);
        assert_eq!(generator.resource_path(), "/locations");
        assert!(generator.collection_args_prepared().is_empty());
        assert!(generator.collection_args().is_empty());
        assert!(generator.collection_params().is_empty());
    }

    #[test]
    fn test_explicit_plural_name() {
        let engine = engine();
        let descriptor = Descriptor::builder("CloudComputingInstancePTRRecord", "PTRRecord")
            .plural_name("CloudComputingInstancePTRRecords")
            .path("/cloud_computing/instances/%s/ptr_records")
            .arg("cloudInstanceID", TypeTag::String)
            .build()
            .unwrap();
        let generator = CollectionGenerator::new(&engine, descriptor);

        assert_eq!(
            generator.collection_type_name_plural(),
            "CloudComputingInstancePTRRecords"
        );
        assert_eq!(generator.collection_element_uncapitalized(), "pTRRecord");
    }

    #[test]
    fn test_naive_plural() {
        let engine = engine();
        let host = Descriptor::builder("Host", "Host").path("/hosts").build().unwrap();
        let generator = CollectionGenerator::new(&engine, host);
        assert_eq!(generator.collection_type_name_plural(), "Hosts");

        let policy = Descriptor::builder("Policy", "Policy").build().unwrap();
        let generator = CollectionGenerator::new(&engine, policy);
        assert_eq!(generator.collection_type_name_plural(), "Policys");
    }

    #[test]
    fn test_acronym_uncapitalized() {
        let engine = engine();
        let generator = CollectionGenerator::new(&engine, ssl_certificates());
        assert_eq!(generator.collection_element_uncapitalized(), "sSLCertificate");
    }

    #[test]
    fn test_uncapitalized_is_memoized() {
        let engine = engine();
        let generator = CollectionGenerator::new(&engine, location());
        let first = generator.collection_element_uncapitalized();
        let second = generator.collection_element_uncapitalized();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_args_prepared_in_declaration_order() {
        let engine = engine();
        let descriptor = Descriptor::builder("DriveModelOption", "DriveModel")
            .path("/locations/%d/order_options/server_models/%d/drive_models")
            .arg("LocationID", TypeTag::Int64)
            .arg("ServerModelID", TypeTag::Int64)
            .build()
            .unwrap();
        let generator = CollectionGenerator::new(&engine, descriptor);

        assert_eq!(
            generator.collection_args_prepared(),
            vec!["LocationID int64", "ServerModelID int64"]
        );

        let names: Vec<&str> = generator.collection_args().keys().map(String::as_str).collect();
        assert_eq!(names, ["LocationID", "ServerModelID"]);
    }

    #[test]
    fn test_params_with_reserved_word() {
        let engine = engine();
        let generator = CollectionGenerator::new(&engine, ssl_certificates());
        let params = generator.collection_params();

        assert_eq!(
            params,
            vec![
                DerivedParam {
                    method_name: "SearchPattern".to_string(),
                    variable_name: "searchPattern".to_string(),
                    param_type: TypeTag::String,
                    param_name: "search_pattern".to_string(),
                },
                DerivedParam {
                    method_name: "Type".to_string(),
                    variable_name: "t".to_string(),
                    param_type: TypeTag::String,
                    param_name: "type".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_custom_reserved_words() {
        let engine = engine();
        let descriptor = Descriptor::builder("Rack", "Rack")
            .path("/racks")
            .param("range", TypeTag::String)
            .param("type", TypeTag::String)
            .build()
            .unwrap();

        let mut words = ReservedWords::empty();
        words.insert("range", "rng");
        let generator = CollectionGenerator::new(&engine, descriptor).with_reserved_words(words);
        let params = generator.collection_params();

        assert_eq!(params[0].variable_name, "rng");
        assert_eq!(params[0].method_name, "Range");
        assert_eq!(params[1].variable_name, "type");
    }

    #[test]
    fn test_params_recomputed_equal() {
        let engine = engine();
        let generator = CollectionGenerator::new(&engine, ssl_certificates());
        assert_eq!(generator.collection_params(), generator.collection_params());
    }

    // ========================================================================
    // Context Tests
    // ========================================================================

    #[test]
    fn test_context_serializes_absent_values_as_null() {
        let engine = engine();
        let generator = CollectionGenerator::new(&engine, location());
        let value = serde_json::to_value(generator.context()).unwrap();

        assert!(value["collection_var_prefix"].is_null());
        assert!(value["collection_api_url"].is_null());
        assert_eq!(value["resource_path"], "/locations");
        assert_eq!(value["collection_args"], serde_json::json!([]));
    }

    #[test]
    fn test_context_args_and_params() {
        let engine = engine();
        let generator = CollectionGenerator::new(&engine, host_networks());
        let value = serde_json::to_value(generator.context()).unwrap();

        assert_eq!(value["collection_var_prefix"], "hostNetworks");
        assert_eq!(value["collection_args"][0]["name"], "hostType");
        assert_eq!(value["collection_args"][0]["type"], "string");
        assert_eq!(value["collection_args_prepared"][1], "hostID string");
    }

    // ========================================================================
    // Rendering Tests
    // ========================================================================

    #[test]
    fn test_render_location() {
        let engine = engine();
        let generator = CollectionGenerator::new(&engine, location());
        let source = generator.render().unwrap();

        assert!(source.starts_with("// This code generated automatically"));
        assert!(source.contains("locationListPath = \"/locations\""));
        assert!(source.contains("type LocationsCollection interface"));
        assert!(source.contains("type LocationsCollectionHandler struct"));
        assert!(source.contains("func NewLocationsCollection(client *Client) LocationsCollection"));
        assert!(source.contains("NextPage(ctx context.Context) ([]Location, error)"));
        assert!(source.contains("col.client.buildURL(locationListPath)"));
        assert!(!source.contains("Endpoint:"));
        assert!(!source.contains("fmt.Sprintf("));
        assert!(!source.contains("SetSearchPattern"));
    }

    #[test]
    fn test_render_with_args_and_prefix() {
        let engine = engine();
        let generator = CollectionGenerator::new(&engine, host_networks());
        let source = generator.render().unwrap();

        assert!(source.contains("hostNetworksListPath = \"/hosts/%s/%s/networks\""));
        assert!(source.contains(
            "func NewHostNetworksCollection(client *Client, hostType string, hostID string) HostNetworksCollection"
        ));
        assert!(source.contains("fmt.Sprintf(hostNetworksListPath, col.hostType, col.hostID)"));
        assert!(source.contains("([]Network, error)"));
        assert!(source.contains(
            "// Endpoint: https://developers.servers.com/api-documentation/v1/#operation/ListAllNetworksForAnExistingDedicatedServer"
        ));
    }

    #[test]
    fn test_render_param_setters() {
        let engine = engine();
        let generator = CollectionGenerator::new(&engine, ssl_certificates());
        let source = generator.render().unwrap();

        assert!(source.contains("sSLCertificateListPath = \"/ssl_certificates\""));
        assert!(source.contains("SetSearchPattern(searchPattern string) SSLCertificatesCollection"));
        assert!(source.contains("SetType(t string) SSLCertificatesCollection"));
        assert!(source.contains("col.applyParam(\"type\", t)"));
    }

    #[test]
    fn test_render_int64_param_setter() {
        let engine = engine();
        let descriptor = Descriptor::builder("Invoice", "Invoice")
            .path("/billing/invoices")
            .param("year", TypeTag::Int64)
            .build()
            .unwrap();
        let source = CollectionGenerator::new(&engine, descriptor).render().unwrap();

        assert!(source.contains("SetYear(year int64) InvoicesCollection"));
        assert!(source.contains("col.applyParam(\"year\", strconv.FormatInt(year, 10))"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let engine = engine();
        let generator = CollectionGenerator::new(&engine, host_networks());
        assert_eq!(generator.render().unwrap(), generator.render().unwrap());

        let other = CollectionGenerator::new(&engine, host_networks());
        assert_eq!(generator.render().unwrap(), other.render().unwrap());
    }

    #[test]
    fn test_render_with_mismatched_placeholders_still_renders() {
        let engine = engine();
        let descriptor = Descriptor::builder("Broken", "Broken")
            .path("/things/%d")
            .build()
            .unwrap();
        let generator = CollectionGenerator::new(&engine, descriptor);
        assert!(generator.render().is_ok());
    }

    #[test]
    fn test_render_with_custom_template() {
        let engine = TemplateEngine::with_template(
            "{{collection_type_name_plural}}:{{#each collection_params}}{{variable_name}};{{/each}}",
        )
        .unwrap();
        let generator = CollectionGenerator::new(&engine, ssl_certificates());
        assert_eq!(
            generator.render().unwrap(),
            "SSLCertificates:searchPattern;t;"
        );
    }

    #[test]
    fn test_render_unknown_binding_fails() {
        let engine = TemplateEngine::with_template("{{collection_owner}}").unwrap();
        let generator = CollectionGenerator::new(&engine, location());
        assert!(generator.render().unwrap_err().is_template_error());
    }

    // ========================================================================
    // File Output Tests
    // ========================================================================

    #[test]
    fn test_render_to_file_overwrites() {
        let engine = engine();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locations_collection.go");
        fs::write(&path, "stale").unwrap();

        let generator = CollectionGenerator::new(&engine, location());
        generator.render_to_file(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, generator.render().unwrap());
    }

    #[test]
    fn test_render_to_file_missing_directory() {
        let engine = engine();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pkg").join("locations_collection.go");

        let generator = CollectionGenerator::new(&engine, location());
        let err = generator.render_to_file(&path).unwrap_err();

        assert!(err.is_io_error());
        assert!(!path.exists());
    }

    #[test]
    fn test_render_to_file_template_failure_writes_nothing() {
        let engine = TemplateEngine::with_template("{{missing}}").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.go");

        let generator = CollectionGenerator::new(&engine, location());
        assert!(generator.render_to_file(&path).is_err());
        assert!(!path.exists());
    }
}
