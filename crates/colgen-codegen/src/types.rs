//! Template binding types.
//!
//! [`CollectionContext`] is the complete set of named bindings a collection
//! template can reference. Field names are the binding names.

use colgen_core::TypeTag;
use serde::Serialize;

/// Bindings exposed to the collection template.
///
/// Optional values serialize as `null` rather than being omitted, so a
/// strict-mode template may test them with `{{#if}}` without tripping the
/// missing-variable check.
///
/// # Examples
///
/// ```
/// use colgen_codegen::CollectionContext;
///
/// let context = CollectionContext {
///     collection_type_name: "Location".to_string(),
///     collection_type_name_plural: "Locations".to_string(),
///     collection_element_type: "Location".to_string(),
///     collection_element_uncapitalized: "location".to_string(),
///     collection_var_prefix: None,
///     collection_api_url: None,
///     resource_path: "/locations".to_string(),
///     collection_args_prepared: vec![],
///     collection_args: vec![],
///     collection_params: vec![],
/// };
///
/// let value = serde_json::to_value(&context).unwrap();
/// assert!(value["collection_var_prefix"].is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionContext {
    /// Singular collection type name
    pub collection_type_name: String,
    /// Plural collection type name
    pub collection_type_name_plural: String,
    /// Element type returned by the collection
    pub collection_element_type: String,
    /// Element type with its first character lower-cased
    pub collection_element_uncapitalized: String,
    /// Explicit variable prefix, `null` when not declared
    pub collection_var_prefix: Option<String>,
    /// Documentation URL, `null` when not declared
    pub collection_api_url: Option<String>,
    /// Path template with unresolved placeholders
    pub resource_path: String,
    /// `"<name> <type>"` signature fragments in declaration order
    pub collection_args_prepared: Vec<String>,
    /// Positional arguments in declaration order
    pub collection_args: Vec<CollectionArg>,
    /// Query parameters with derived names
    pub collection_params: Vec<DerivedParam>,
}

/// One positional path argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionArg {
    /// Argument name as declared
    pub name: String,
    /// Argument type
    #[serde(rename = "type")]
    pub type_tag: TypeTag,
}

/// Naming derived from one query parameter.
///
/// # Examples
///
/// ```
/// use colgen_codegen::DerivedParam;
/// use colgen_core::TypeTag;
///
/// let param = DerivedParam {
///     method_name: "SearchPattern".to_string(),
///     variable_name: "searchPattern".to_string(),
///     param_type: TypeTag::String,
///     param_name: "search_pattern".to_string(),
/// };
///
/// assert_eq!(param.param_type.as_str(), "string");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedParam {
    /// Setter-style accessor name (PascalCase)
    pub method_name: String,
    /// Field/variable name (lowerCamelCase, reserved words remapped)
    pub variable_name: String,
    /// Parameter type
    pub param_type: TypeTag,
    /// Original wire name sent in the query string
    pub param_name: String,
}
