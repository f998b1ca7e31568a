//! # View Contracts
//!
//! Trait surface and value types shared between the resolution core and the
//! concrete view implementations that live outside this crate (template
//! engines, static resource views).
//!
//! ## Capability Split
//!
//! - [`View`] is the renderable capability: the minimum contract a resolved
//!   result must satisfy before it can be handed to a rendering stage.
//! - [`UrlBasedView`] adds the URL-bearing capability set: a backing URL
//!   synthesized by the resolver, shared rendering configuration, and the
//!   asynchronous existence probe used to confirm the backing resource is
//!   reachable before committing to it.
//!
//! Concrete template views implement [`UrlBasedView`]; decorations applied by
//! a lifecycle hook only need to satisfy [`View`].

pub mod locale;
pub mod redirect;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use locale::Locale;
pub use redirect::RedirectView;

/// A media type a view can produce, e.g. `text/html`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaType(String);

impl MediaType {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The default content type for resolved views.
    pub fn text_html() -> Self {
        Self::new("text/html")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Character set applied to rendered output, e.g. `UTF-8`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Charset(String);

impl Charset {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn utf8() -> Self {
        Self::new("UTF-8")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::utf8()
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The renderable capability.
///
/// Everything a resolver returns satisfies this contract, whether it is a
/// URL-backed template view, a redirect, or a decorated replacement produced
/// by a lifecycle hook.
pub trait View: Send + Sync {
    /// Media types this view is able to produce.
    fn media_types(&self) -> Vec<MediaType>;
}

impl fmt::Debug for dyn View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("dyn View").finish_non_exhaustive()
    }
}

/// The URL-based capability set required of views the resolution core
/// constructs and configures.
///
/// Setters are invoked exactly once, by the factory, before the view is
/// shared; afterwards the view is treated as immutable.
#[async_trait]
pub trait UrlBasedView: View {
    /// The backing URL of the resource this view renders.
    fn url(&self) -> &str;

    fn set_url(&mut self, url: String);

    fn set_media_types(&mut self, media_types: Vec<MediaType>);

    fn set_charset(&mut self, charset: Charset);

    fn set_request_context_attribute(&mut self, attribute: String);

    /// Probe whether the backing resource is reachable, off the calling
    /// thread. Typically a filesystem or classpath lookup performed by the
    /// concrete view implementation.
    ///
    /// `Ok(false)` means the resource is absent (an expected outcome the
    /// resolver converts into a fallthrough); `Err` means the probe itself
    /// failed and is propagated as a genuine error.
    async fn check_resource_exists(&self, locale: &Locale) -> anyhow::Result<bool>;
}

impl fmt::Debug for dyn UrlBasedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("dyn UrlBasedView").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_display_and_default_content_type() {
        assert_eq!(MediaType::text_html().to_string(), "text/html");
        assert_eq!(MediaType::new("application/xhtml+xml").as_str(), "application/xhtml+xml");
    }

    #[test]
    fn charset_defaults_to_utf8() {
        assert_eq!(Charset::default(), Charset::utf8());
        assert_eq!(Charset::default().as_str(), "UTF-8");
    }

    #[test]
    fn media_type_serde_is_transparent() {
        let json = serde_json::to_string(&MediaType::text_html()).unwrap();
        assert_eq!(json, "\"text/html\"");
        let back: MediaType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MediaType::text_html());
    }
}
