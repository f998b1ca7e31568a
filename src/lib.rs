#![allow(clippy::doc_markdown)] // Allow technical terms like FreeMarker, UTF-8 in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Vista Core
//!
//! High-performance Rust core for asynchronous view-name resolution,
//! designed to complement template-engine rendering frontends.
//!
//! ## Overview
//!
//! Vista Core resolves symbolic view names to URLs without explicit mapping
//! definitions: a name like `test` with prefix `templates/` and suffix
//! `.ftl` resolves to the backing URL `templates/test.ftl`, is constructed
//! through a pluggable view factory, optionally post-processed by a
//! lifecycle hook, and only returned once an asynchronous existence probe
//! confirms the backing resource is reachable. Names the resolver does not
//! own, and names whose backing resource is absent, resolve to an empty
//! result so a resolver chain can try its next strategy.
//!
//! As a special feature, redirect targets can be specified via the
//! `redirect:` prefix: `redirect:my_action` triggers a redirect to the given
//! URL rather than resolution as a standard view name.
//!
//! ## Architecture
//!
//! Resolution is a one-way flow with a single suspension point:
//!
//! - **Gate**: [`ViewNameMatcher`] decides ownership from configured exact
//!   names or simple wildcard patterns
//! - **Route**: redirect-prefixed names go to the redirect provider;
//!   everything else through [`ResourceViewFactory`] URL synthesis
//! - **Initialize**: an optional [`ViewInitializer`] may decorate the view
//! - **Probe**: the view's asynchronous existence check gates the result
//!
//! Resolution is locale-independent by design: the locale is threaded
//! through to the existence probe only.
//!
//! ## Module Organization
//!
//! - [`resolution`] - Name matching, view construction, and the resolution
//!   service
//! - [`view`] - View contracts, media types, locales, and redirect views
//! - [`config`] - Shared resolver settings with environment overrides
//! - [`logging`] - Structured logging bootstrap
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use vista_core::{
//!     Locale, ResolverSettings, ViewFactory, ViewResolutionService, ViewResolverConfig,
//! };
//!
//! # use vista_core::{Charset, MediaType, UrlBasedView, View};
//! # struct TemplateView { url: String, media_types: Vec<MediaType> }
//! # impl View for TemplateView {
//! #     fn media_types(&self) -> Vec<MediaType> { self.media_types.clone() }
//! # }
//! # #[async_trait::async_trait]
//! # impl UrlBasedView for TemplateView {
//! #     fn url(&self) -> &str { &self.url }
//! #     fn set_url(&mut self, url: String) { self.url = url; }
//! #     fn set_media_types(&mut self, media_types: Vec<MediaType>) { self.media_types = media_types; }
//! #     fn set_charset(&mut self, _charset: Charset) {}
//! #     fn set_request_context_attribute(&mut self, _attribute: String) {}
//! #     async fn check_resource_exists(&self, _locale: &Locale) -> anyhow::Result<bool> { Ok(true) }
//! # }
//! # struct TemplateViewFactory;
//! # impl ViewFactory for TemplateViewFactory {
//! #     fn view_type(&self) -> &str { "template" }
//! #     fn instantiate(&self) -> anyhow::Result<Box<dyn UrlBasedView>> {
//! #         Ok(Box::new(TemplateView { url: String::new(), media_types: Vec::new() }))
//! #     }
//! # }
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = ViewResolutionService::new(ViewResolverConfig {
//!     view_factory: Some(Arc::new(TemplateViewFactory)),
//!     settings: ResolverSettings {
//!         url_prefix: "templates/".to_string(),
//!         url_suffix: ".ftl".to_string(),
//!         ..ResolverSettings::default()
//!     },
//!     ..ViewResolverConfig::default()
//! })?;
//!
//! let resolved = service.resolve("home", &Locale::from_tag("en-US")).await?;
//! assert!(resolved.is_some());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod logging;
pub mod resolution;
pub mod view;

pub use config::ResolverSettings;
pub use resolution::{
    simple_match, RedirectViewProvider, ResolutionError, ResolutionResult, ResourceViewFactory,
    ViewFactory, ViewInitializer, ViewNameMatcher, ViewResolutionService, ViewResolver,
    ViewResolverConfig, REDIRECT_URL_PREFIX,
};
pub use view::{Charset, Locale, MediaType, RedirectView, UrlBasedView, View};
