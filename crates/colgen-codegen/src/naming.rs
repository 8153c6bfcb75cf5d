//! Identifier transformation.
//!
//! Turns wire names (`search_pattern`, `host_type/host_id`) into Go
//! identifiers. Only ASCII letters are case-folded by [`camelize`], so
//! already-cased input such as `segmentID` passes through untouched.
//!
//! # Examples
//!
//! ```
//! use colgen_codegen::naming::{camelize, uncapitalize};
//!
//! assert_eq!(camelize("search_pattern", true), "SearchPattern");
//! assert_eq!(camelize("search_pattern", false), "searchPattern");
//! assert_eq!(camelize("host_type/host_id", true), "HostType::HostId");
//! assert_eq!(uncapitalize("SSLCertificate"), "sSLCertificate");
//! ```

use indexmap::IndexMap;

/// Separator emitted in place of `/` by [`camelize`].
pub const NAMESPACE_SEPARATOR: &str = "::";

/// Lower-cases the first character and leaves the rest untouched.
///
/// Acronyms are not special-cased: `SSLCertificate` becomes `sSLCertificate`.
///
/// # Examples
///
/// ```
/// use colgen_codegen::naming::uncapitalize;
///
/// assert_eq!(uncapitalize("Location"), "location");
/// assert_eq!(uncapitalize("already"), "already");
/// assert_eq!(uncapitalize(""), "");
/// ```
#[must_use]
pub fn uncapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

/// Converts an underscore/slash delimited token into a camel-case identifier.
///
/// With `upper_first` the leading `[a-z0-9]*` run is capitalized
/// (PascalCase); without it the first character is lower-cased
/// (lowerCamelCase). Every `_` is then dropped and every `/` becomes
/// [`NAMESPACE_SEPARATOR`]; the `[a-z0-9]*` run following either one is
/// capitalized.
///
/// # Examples
///
/// ```
/// use colgen_codegen::naming::camelize;
///
/// assert_eq!(camelize("segmentID", true), "SegmentID");
/// assert_eq!(camelize("per_page", false), "perPage");
/// assert_eq!(camelize("t", false), "t");
/// ```
#[must_use]
pub fn camelize(s: &str, upper_first: bool) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    let Some(first) = chars.next() else {
        return result;
    };
    let first = if upper_first {
        first.to_ascii_uppercase()
    } else {
        first.to_ascii_lowercase()
    };

    // A separator as the very first character still opens a new segment.
    let mut capitalize_next = push_segment_char(&mut result, first, false);

    for ch in chars {
        capitalize_next = push_segment_char(&mut result, ch, capitalize_next);
    }

    result
}

/// Pushes one character of the token, returning whether the next one opens a segment.
fn push_segment_char(result: &mut String, ch: char, capitalize: bool) -> bool {
    match ch {
        '_' => true,
        '/' => {
            result.push_str(NAMESPACE_SEPARATOR);
            true
        }
        c if capitalize => {
            result.push(c.to_ascii_uppercase());
            false
        }
        c => {
            result.push(c);
            false
        }
    }
}

/// Remap table for wire names that collide with target-language keywords.
///
/// The remap is applied to the wire name *before* it is camelized into a
/// field name. Lookups are exact: only the full wire name `type` is remapped,
/// never `type_id` or `Type`.
///
/// # Examples
///
/// ```
/// use colgen_codegen::naming::ReservedWords;
///
/// let mut words = ReservedWords::default();
/// assert_eq!(words.remap("type"), "t");
/// assert_eq!(words.remap("search_pattern"), "search_pattern");
///
/// words.insert("range", "r");
/// assert_eq!(words.remap("range"), "r");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedWords {
    remaps: IndexMap<String, String>,
}

impl ReservedWords {
    /// Creates an empty table with no remaps at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            remaps: IndexMap::new(),
        }
    }

    /// Adds or replaces a remap.
    pub fn insert(&mut self, word: impl Into<String>, replacement: impl Into<String>) {
        self.remaps.insert(word.into(), replacement.into());
    }

    /// Returns the replacement for `word`, or `word` itself.
    #[must_use]
    pub fn remap<'a>(&'a self, word: &'a str) -> &'a str {
        self.remaps.get(word).map_or(word, String::as_str)
    }

    /// Returns `true` if `word` has a remap.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.remaps.contains_key(word)
    }
}

impl Default for ReservedWords {
    fn default() -> Self {
        let mut words = Self::empty();
        words.insert("type", "t");
        words
    }
}

impl<K, V> Extend<(K, V)> for ReservedWords
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (word, replacement) in iter {
            self.insert(word, replacement);
        }
    }
}

/// Setter-style method name for a query parameter (`SearchPattern`).
#[must_use]
pub fn method_name(wire_name: &str) -> String {
    camelize(wire_name, true)
}

/// Field/variable name for a query parameter, after reserved-word remapping.
///
/// # Examples
///
/// ```
/// use colgen_codegen::naming::{field_name, ReservedWords};
///
/// let words = ReservedWords::default();
/// assert_eq!(field_name("type", &words), "t");
/// assert_eq!(field_name("search_pattern", &words), "searchPattern");
/// ```
#[must_use]
pub fn field_name(wire_name: &str, reserved: &ReservedWords) -> String {
    camelize(reserved.remap(wire_name), false)
}
