//! Locale value type threaded through resolution to the existence probe.
//!
//! Resolution itself is locale-independent: the same symbolic name always
//! maps to the same backing URL. The locale only reaches the probe, where a
//! concrete view implementation may use it to pick a localized variant of
//! the backing resource.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `language[-REGION]` tag, e.g. `en` or `en-US`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    /// Create a locale from a bare language code.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            region: None,
        }
    }

    /// Create a locale with a region subtag.
    pub fn with_region(language: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            region: Some(region.into()),
        }
    }

    /// Parse a `language-REGION` or `language_REGION` tag. Lenient: the
    /// language is lowercased, the region uppercased, anything past the
    /// region subtag is ignored.
    pub fn from_tag(tag: &str) -> Self {
        let mut parts = tag.split(['-', '_']);
        let language = parts.next().unwrap_or_default().to_lowercase();
        let region = parts
            .next()
            .filter(|r| !r.is_empty())
            .map(|r| r.to_uppercase());
        Self { language, region }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.language, region),
            None => f.write_str(&self.language),
        }
    }
}
