//! # Resolution Error Types
//!
//! Structured error handling for the view resolution core using thiserror
//! instead of `Box<dyn Error>` patterns.
//!
//! "Not applicable" outcomes (a name outside the configured patterns, or a
//! backing resource the probe reports absent) are not errors: they surface as
//! `Ok(None)` from [`resolve`](crate::resolution::ViewResolutionService::resolve)
//! so a resolver chain can try its next strategy.

use thiserror::Error;

/// Errors raised by the view resolution core.
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// Invalid or incomplete resolver configuration, detected at service
    /// construction time.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// The configured view factory failed to produce a view instance.
    #[error("View instantiation failed for type '{view_type}': {source}")]
    ViewInstantiation {
        view_type: String,
        #[source]
        source: anyhow::Error,
    },

    /// The asynchronous existence probe itself failed. Distinct from the
    /// probe reporting the resource absent, which resolves to `Ok(None)`.
    #[error("Existence probe failed for view '{view_name}' at '{url}': {source}")]
    Probe {
        view_name: String,
        url: String,
        #[source]
        source: anyhow::Error,
    },

    /// The post-construction lifecycle hook rejected the view.
    #[error("Lifecycle initialization failed for view '{view_name}': {source}")]
    Initialization {
        view_name: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ResolutionError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a view instantiation error
    pub fn view_instantiation(view_type: impl Into<String>, source: anyhow::Error) -> Self {
        Self::ViewInstantiation {
            view_type: view_type.into(),
            source,
        }
    }

    /// Create an existence probe error
    pub fn probe(view_name: impl Into<String>, url: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Probe {
            view_name: view_name.into(),
            url: url.into(),
            source,
        }
    }

    /// Create a lifecycle initialization error
    pub fn initialization(view_name: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Initialization {
            view_name: view_name.into(),
            source,
        }
    }
}

/// Result type for resolution operations
pub type ResolutionResult<T> = Result<T, ResolutionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_include_context() {
        let err = ResolutionError::configuration("property 'view_factory' is required");
        assert_eq!(
            err.to_string(),
            "Configuration error: property 'view_factory' is required"
        );

        let err = ResolutionError::probe("home", "templates/home.ftl", anyhow::anyhow!("disk offline"));
        assert!(err.to_string().contains("home"));
        assert!(err.to_string().contains("templates/home.ftl"));
    }

    #[test]
    fn probe_error_preserves_source_chain() {
        let err = ResolutionError::probe("home", "templates/home.ftl", anyhow::anyhow!("disk offline"));
        let source = std::error::Error::source(&err).expect("probe errors carry a source");
        assert_eq!(source.to_string(), "disk offline");
    }
}
