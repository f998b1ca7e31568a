//! # Resolver Settings
//!
//! Shared rendering configuration applied to every view a resolver
//! constructs. Loaded from explicit wiring or, for the common knobs, from
//! `VISTA_*` environment variables. Settings are validated once at service
//! construction and treated as immutable afterwards.

use crate::resolution::errors::{ResolutionError, ResolutionResult};
use crate::view::{Charset, MediaType};
use serde::{Deserialize, Serialize};

/// Shared configuration state for a URL-based view resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverSettings {
    /// Prefix prepended to view names when building a backing URL.
    pub url_prefix: String,

    /// Suffix appended to view names when building a backing URL.
    pub url_suffix: String,

    /// View names (or simple wildcard patterns) this resolver handles.
    /// `None` accepts every name.
    pub view_names: Option<Vec<String>>,

    /// Media types copied onto every constructed view.
    pub media_types: Vec<MediaType>,

    /// Character set copied onto every constructed view.
    pub charset: Charset,

    /// Optional request-context attribute name copied onto constructed views.
    pub request_context_attribute: Option<String>,

    /// Precedence within a resolver chain; higher values are tried later.
    pub order: i32,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            url_prefix: String::new(),
            url_suffix: String::new(),
            view_names: None,
            media_types: vec![MediaType::text_html()],
            charset: Charset::utf8(),
            request_context_attribute: None,
            order: i32::MAX,
        }
    }
}

impl ResolverSettings {
    /// Build settings from defaults plus `VISTA_*` environment overrides.
    pub fn from_env() -> ResolutionResult<Self> {
        let mut settings = Self::default();

        if let Ok(prefix) = std::env::var("VISTA_VIEW_PREFIX") {
            settings.url_prefix = prefix;
        }

        if let Ok(suffix) = std::env::var("VISTA_VIEW_SUFFIX") {
            settings.url_suffix = suffix;
        }

        if let Ok(charset) = std::env::var("VISTA_CHARSET") {
            settings.charset = Charset::new(charset);
        }

        if let Ok(order) = std::env::var("VISTA_RESOLVER_ORDER") {
            settings.order = order.parse().map_err(|e| {
                ResolutionError::configuration(format!("Invalid VISTA_RESOLVER_ORDER: {e}"))
            })?;
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_have_expected_defaults() {
        let settings = ResolverSettings::default();

        assert_eq!(settings.url_prefix, "");
        assert_eq!(settings.url_suffix, "");
        assert!(settings.view_names.is_none());
        assert_eq!(settings.media_types, vec![MediaType::text_html()]);
        assert_eq!(settings.charset, Charset::utf8());
        assert!(settings.request_context_attribute.is_none());
        assert_eq!(settings.order, i32::MAX);
    }

    #[test]
    fn from_env_without_overrides_matches_defaults() {
        // None of the VISTA_* variables are set in the test environment.
        let settings = ResolverSettings::from_env().expect("from_env should succeed");
        assert_eq!(settings.url_prefix, ResolverSettings::default().url_prefix);
        assert_eq!(settings.charset, ResolverSettings::default().charset);
    }

    #[test]
    fn deserializes_partial_documents_with_defaults() {
        let settings: ResolverSettings = serde_json::from_str(
            r#"{"url_prefix": "templates/", "url_suffix": ".ftl", "view_names": ["admin*"]}"#,
        )
        .unwrap();

        assert_eq!(settings.url_prefix, "templates/");
        assert_eq!(settings.url_suffix, ".ftl");
        assert_eq!(settings.view_names, Some(vec!["admin*".to_string()]));
        // Untouched fields fall back to defaults.
        assert_eq!(settings.media_types, vec![MediaType::text_html()]);
        assert_eq!(settings.order, i32::MAX);
    }

    #[test]
    fn serde_round_trip_preserves_settings() {
        let mut settings = ResolverSettings::default();
        settings.url_prefix = "templates/".to_string();
        settings.request_context_attribute = Some("requestContext".to_string());
        settings.order = 10;

        let json = serde_json::to_string(&settings).unwrap();
        let back: ResolverSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
