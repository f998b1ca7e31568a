//! # Resource View Factory
//!
//! Builds a fully configured URL-based view from a symbolic name: the view
//! kind comes from a pluggable [`ViewFactory`], the backing URL from the
//! configured prefix/suffix template, and the rendering configuration from
//! the shared resolver settings.
//!
//! No existence check happens here; reachability of the backing URL is the
//! view's own asynchronous probe, awaited later by the resolution service.

use crate::config::ResolverSettings;
use crate::resolution::errors::{ResolutionError, ResolutionResult};
use crate::view::{Charset, MediaType, UrlBasedView};
use std::sync::Arc;
use tracing::debug;

/// Factory for a concrete URL-based view kind, registered at configuration
/// time.
///
/// This is the pluggable "view class" seam: the resolution core never names
/// a concrete view type, it only asks the configured factory for a fresh,
/// unconfigured instance per resolution attempt.
pub trait ViewFactory: Send + Sync {
    /// Short identifier of the view kind, used in logs and errors.
    fn view_type(&self) -> &str;

    /// Construct an unconfigured view instance. Failure here is a fatal
    /// configuration problem, not an expected runtime outcome.
    fn instantiate(&self) -> anyhow::Result<Box<dyn UrlBasedView>>;
}

/// Builds configured views by combining the pluggable view factory with the
/// shared rendering settings.
#[derive(Clone)]
pub struct ResourceViewFactory {
    view_factory: Arc<dyn ViewFactory>,
    url_prefix: String,
    url_suffix: String,
    media_types: Vec<MediaType>,
    charset: Charset,
    request_context_attribute: Option<String>,
}

impl ResourceViewFactory {
    pub fn new(view_factory: Arc<dyn ViewFactory>, settings: &ResolverSettings) -> Self {
        Self {
            view_factory,
            url_prefix: settings.url_prefix.clone(),
            url_suffix: settings.url_suffix.clone(),
            media_types: settings.media_types.clone(),
            charset: settings.charset.clone(),
            request_context_attribute: settings.request_context_attribute.clone(),
        }
    }

    /// Identifier of the view kind this factory produces.
    pub fn view_type(&self) -> &str {
        self.view_factory.view_type()
    }

    /// Instantiate and configure a view for the given symbolic name.
    ///
    /// The backing URL is `url_prefix + view_name + url_suffix`, verbatim.
    /// The name is trusted as-is: callers must not pass attacker-controlled
    /// input without upstream validation.
    pub fn create_view(&self, view_name: &str) -> ResolutionResult<Box<dyn UrlBasedView>> {
        let mut view = self
            .view_factory
            .instantiate()
            .map_err(|e| ResolutionError::view_instantiation(self.view_factory.view_type(), e))?;

        view.set_media_types(self.media_types.clone());
        view.set_charset(self.charset.clone());
        view.set_url(format!(
            "{}{}{}",
            self.url_prefix, view_name, self.url_suffix
        ));

        if let Some(attribute) = &self.request_context_attribute {
            view.set_request_context_attribute(attribute.clone());
        }

        debug!(
            view_name = view_name,
            view_type = self.view_factory.view_type(),
            url = view.url(),
            "Constructed view"
        );

        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{Locale, View};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct StubView {
        url: String,
        media_types: Vec<MediaType>,
        seen_charset: Arc<Mutex<Option<Charset>>>,
        seen_attribute: Arc<Mutex<Option<String>>>,
    }

    impl View for StubView {
        fn media_types(&self) -> Vec<MediaType> {
            self.media_types.clone()
        }
    }

    #[async_trait]
    impl UrlBasedView for StubView {
        fn url(&self) -> &str {
            &self.url
        }

        fn set_url(&mut self, url: String) {
            self.url = url;
        }

        fn set_media_types(&mut self, media_types: Vec<MediaType>) {
            self.media_types = media_types;
        }

        fn set_charset(&mut self, charset: Charset) {
            *self.seen_charset.lock().unwrap() = Some(charset);
        }

        fn set_request_context_attribute(&mut self, attribute: String) {
            *self.seen_attribute.lock().unwrap() = Some(attribute);
        }

        async fn check_resource_exists(&self, _locale: &Locale) -> anyhow::Result<bool> {
            Ok(true)
        }
    }

    struct StubViewFactory {
        instantiations: AtomicUsize,
        seen_charset: Arc<Mutex<Option<Charset>>>,
        seen_attribute: Arc<Mutex<Option<String>>>,
        fail: bool,
    }

    impl StubViewFactory {
        fn new() -> Self {
            Self {
                instantiations: AtomicUsize::new(0),
                seen_charset: Arc::new(Mutex::new(None)),
                seen_attribute: Arc::new(Mutex::new(None)),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new()
            }
        }
    }

    impl ViewFactory for StubViewFactory {
        fn view_type(&self) -> &str {
            "stub"
        }

        fn instantiate(&self) -> anyhow::Result<Box<dyn UrlBasedView>> {
            self.instantiations.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                anyhow::bail!("no no-argument construction path");
            }
            Ok(Box::new(StubView {
                seen_charset: self.seen_charset.clone(),
                seen_attribute: self.seen_attribute.clone(),
                ..StubView::default()
            }))
        }
    }

    fn settings() -> ResolverSettings {
        ResolverSettings {
            url_prefix: "templates/".to_string(),
            url_suffix: ".ftl".to_string(),
            ..ResolverSettings::default()
        }
    }

    #[test]
    fn synthesizes_url_from_prefix_name_and_suffix() {
        let factory = ResourceViewFactory::new(Arc::new(StubViewFactory::new()), &settings());
        let view = factory.create_view("test").unwrap();
        assert_eq!(view.url(), "templates/test.ftl");
    }

    #[test]
    fn applies_url_verbatim_without_normalization() {
        let factory = ResourceViewFactory::new(Arc::new(StubViewFactory::new()), &settings());
        let view = factory.create_view("../secrets").unwrap();
        assert_eq!(view.url(), "templates/../secrets.ftl");
    }

    #[test]
    fn copies_shared_rendering_configuration() {
        let mut settings = settings();
        settings.media_types = vec![MediaType::text_html(), MediaType::new("application/xhtml+xml")];
        settings.charset = Charset::new("ISO-8859-1");

        let stub = Arc::new(StubViewFactory::new());
        let factory = ResourceViewFactory::new(stub.clone(), &settings);
        let view = factory.create_view("home").unwrap();
        assert_eq!(view.media_types(), settings.media_types);
        assert_eq!(
            *stub.seen_charset.lock().unwrap(),
            Some(Charset::new("ISO-8859-1"))
        );
    }

    #[test]
    fn request_context_attribute_copied_only_when_configured() {
        let stub = Arc::new(StubViewFactory::new());

        let factory = ResourceViewFactory::new(stub.clone(), &settings());
        factory.create_view("home").unwrap();
        assert_eq!(*stub.seen_attribute.lock().unwrap(), None);

        let mut with_attribute = settings();
        with_attribute.request_context_attribute = Some("requestContext".to_string());
        let factory = ResourceViewFactory::new(stub.clone(), &with_attribute);
        factory.create_view("home").unwrap();
        assert_eq!(
            *stub.seen_attribute.lock().unwrap(),
            Some("requestContext".to_string())
        );
    }

    #[test]
    fn instantiation_failure_surfaces_as_configuration_problem() {
        let factory = ResourceViewFactory::new(Arc::new(StubViewFactory::failing()), &settings());
        let err = factory.create_view("home").unwrap_err();
        assert!(matches!(
            err,
            ResolutionError::ViewInstantiation { ref view_type, .. } if view_type == "stub"
        ));
    }
}
