//! Standard redirect view produced by the default redirect provider.
//!
//! Redirect targets come through the `redirect:` name prefix verbatim: the
//! resolver applies no URL prefix or suffix and performs no existence probe,
//! since a redirect is generated rather than looked up.

use crate::view::{MediaType, View};

/// Default status code for redirects: 303 See Other.
pub const DEFAULT_REDIRECT_STATUS: u16 = 303;

/// A view that sends a redirect to a raw target URL instead of rendering a
/// backing resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectView {
    url: String,
    status_code: u16,
}

impl RedirectView {
    /// Create a redirect to the given target with the default status code.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status_code: DEFAULT_REDIRECT_STATUS,
        }
    }

    /// Override the redirect status code, e.g. 301 for permanent moves.
    pub fn with_status_code(mut self, status_code: u16) -> Self {
        self.status_code = status_code;
        self
    }

    /// The raw redirect target.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }
}

impl View for RedirectView {
    fn media_types(&self) -> Vec<MediaType> {
        // A redirect produces no body of its own.
        Vec::new()
    }
}
