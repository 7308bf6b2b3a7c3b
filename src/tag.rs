//! Generic, attribute-driven HTML element renderer.
//!
//! Rendering is a pure function of the element name, the attribute mapping
//! and the `closed` flag. Attributes are stored in a [`BTreeMap`] so the
//! output is byte-reproducible regardless of the order call sites supply
//! them in, which keeps rendered markup usable for golden-file comparison.

use std::collections::BTreeMap;
use std::fmt;

/// An HTML element rendered from a name and an attribute mapping.
///
/// `closed` selects between the self-closing form (`<name ... />`) and the
/// explicit open form (`<name ...>`); no closing tag is ever emitted here,
/// callers pair one themselves where the element requires it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: String,
    attributes: BTreeMap<String, String>,
    closed: bool,
}

impl Tag {
    /// Create a self-closing tag, the common case for `link` and `img`.
    pub fn new(name: impl Into<String>, attributes: BTreeMap<String, String>) -> Self {
        Self {
            name: name.into(),
            attributes,
            closed: true,
        }
    }

    /// Create a tag rendered in open form (`<name ...>`, no trailing slash).
    pub fn unclosed(name: impl Into<String>, attributes: BTreeMap<String, String>) -> Self {
        Self {
            closed: false,
            ..Self::new(name, attributes)
        }
    }

    /// Render the tag to its canonical markup string.
    ///
    /// Attributes appear in alphabetical key order, each value escaped for
    /// use inside a double-quoted HTML attribute.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (key, value) in &self.attributes {
            write!(f, r#" {}="{}""#, key, escape_attribute(value))?;
        }
        if self.closed {
            write!(f, " />")
        } else {
            write!(f, ">")
        }
    }
}

/// Escape a value for embedding inside a double-quoted HTML attribute.
///
/// The helpers only ever pass plain paths and keywords through here, but
/// arbitrary hrefs must stay safe, so `&` and `"` are escaped along with the
/// angle brackets. `&` is replaced first to avoid double-escaping.
pub fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
