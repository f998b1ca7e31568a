//! # View Resolution Service
//!
//! End-to-end resolution of a symbolic view name: pattern gate, redirect
//! branch, view construction, lifecycle initialization, and the asynchronous
//! existence probe.
//!
//! ## Resolution Flow
//!
//! 1. **Gate**: names outside the configured patterns return `Ok(None)`
//!    immediately, with no construction and no async work.
//! 2. **Route**: names carrying the `redirect:` prefix go to the redirect
//!    provider with the remainder verbatim; everything else goes through
//!    [`ResourceViewFactory`].
//! 3. **Initialize**: the constructed view passes through the optional
//!    [`ViewInitializer`] hook, which may decorate or replace it.
//! 4. **Probe**: ordinary views await their existence probe; an absent
//!    resource resolves to `Ok(None)` so a resolver chain can try its next
//!    strategy, while a probe failure propagates as a genuine error.
//!    Redirects skip the probe entirely.
//!
//! The service is cheap to share across concurrent requests: configuration
//! is validated once at construction and read-only afterwards, and each
//! resolution owns its per-call state.

use crate::config::ResolverSettings;
use crate::resolution::errors::{ResolutionError, ResolutionResult};
use crate::resolution::name_matcher::ViewNameMatcher;
use crate::resolution::view_factory::{ResourceViewFactory, ViewFactory};
use crate::view::{Locale, RedirectView, UrlBasedView, View};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Prefix for special view names that specify a redirect URL, typically to a
/// controller route after a form has been submitted and processed. Such
/// names bypass URL synthesis and the existence probe.
pub const REDIRECT_URL_PREFIX: &str = "redirect:";

/// Provider turning a raw redirect target into a redirect view. Can be
/// swapped to produce, for example, redirects with a custom status code.
pub type RedirectViewProvider = Arc<dyn Fn(&str) -> Arc<dyn View> + Send + Sync>;

/// Post-construction lifecycle hook, backed by a broader component registry
/// when one is present.
///
/// The hook runs synchronously between construction and the existence probe.
pub trait ViewInitializer: Send + Sync {
    /// Process a freshly built view.
    ///
    /// Returns `Some(view)` with the (possibly decorated) replacement, or
    /// `None` when the processed object no longer satisfies the renderable
    /// contract, in which case the caller silently keeps the original.
    /// Errors are genuine lifecycle failures and propagate.
    fn initialize(&self, view_name: &str, view: Arc<dyn View>) -> anyhow::Result<Option<Arc<dyn View>>>;
}

/// Resolution strategy seam consumed by a resolver chain, which tries
/// strategies in `order` until one returns a present result.
#[async_trait]
pub trait ViewResolver: Send + Sync {
    /// Resolve a symbolic view name, or `Ok(None)` when this resolver is not
    /// applicable (name outside its patterns, or backing resource absent).
    async fn resolve(&self, view_name: &str, locale: &Locale)
        -> ResolutionResult<Option<Arc<dyn View>>>;

    /// Chain precedence; higher values are tried later.
    fn order(&self) -> i32 {
        i32::MAX
    }
}

/// Configuration for a [`ViewResolutionService`], assembled by external
/// wiring and validated once at service construction.
#[derive(Clone, Default)]
pub struct ViewResolverConfig {
    /// Factory for the view kind this resolver instantiates. Required.
    pub view_factory: Option<Arc<dyn ViewFactory>>,

    /// Shared rendering settings.
    pub settings: ResolverSettings,

    /// Redirect view provider; defaults to [`RedirectView::new`].
    pub redirect_provider: Option<RedirectViewProvider>,

    /// Optional lifecycle hook applied to every constructed view.
    pub initializer: Option<Arc<dyn ViewInitializer>>,
}

/// Resolves symbolic view names to configured, existence-checked views.
pub struct ViewResolutionService {
    matcher: ViewNameMatcher,
    view_factory: ResourceViewFactory,
    redirect_provider: RedirectViewProvider,
    initializer: Option<Arc<dyn ViewInitializer>>,
    order: i32,
}

impl std::fmt::Debug for ViewResolutionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewResolutionService")
            .field("order", &self.order)
            .field("has_initializer", &self.initializer.is_some())
            .finish_non_exhaustive()
    }
}

impl ViewResolutionService {
    /// Validate the configuration and build the service.
    ///
    /// Fails with a `Configuration` error when no view factory is supplied.
    /// After this point the configuration is immutable; concurrent
    /// resolutions read it without synchronization.
    pub fn new(config: ViewResolverConfig) -> ResolutionResult<Self> {
        let factory = config
            .view_factory
            .ok_or_else(|| ResolutionError::configuration("property 'view_factory' is required"))?;

        info!(
            view_type = factory.view_type(),
            url_prefix = config.settings.url_prefix,
            url_suffix = config.settings.url_suffix,
            order = config.settings.order,
            "Creating view resolution service"
        );

        let redirect_provider = config
            .redirect_provider
            .unwrap_or_else(|| Arc::new(|target: &str| Arc::new(RedirectView::new(target)) as Arc<dyn View>));

        Ok(Self {
            matcher: ViewNameMatcher::new(config.settings.view_names.clone()),
            view_factory: ResourceViewFactory::new(factory, &config.settings),
            redirect_provider,
            initializer: config.initializer,
            order: config.settings.order,
        })
    }

    /// Resolve a symbolic view name for the given locale.
    ///
    /// The locale is threaded through to the existence probe only; the
    /// backing URL is locale-independent.
    #[instrument(skip(self, locale), fields(locale = %locale))]
    pub async fn resolve(
        &self,
        view_name: &str,
        locale: &Locale,
    ) -> ResolutionResult<Option<Arc<dyn View>>> {
        if !self.matcher.can_handle(view_name) {
            debug!(view_name = view_name, "View name outside configured patterns, skipping");
            return Ok(None);
        }

        if let Some(target) = view_name.strip_prefix(REDIRECT_URL_PREFIX) {
            debug!(view_name = view_name, target = target, "Resolving redirect view");
            let view = (self.redirect_provider)(target);
            let view = self.apply_lifecycle(view_name, view)?;
            // Redirects are generated, not looked up: no existence probe.
            return Ok(Some(view));
        }

        let view: Arc<dyn UrlBasedView> = Arc::from(self.view_factory.create_view(view_name)?);
        let renderable: Arc<dyn View> = view.clone();
        let resolved = self.apply_lifecycle(view_name, renderable)?;

        // The probe targets the view that owns the backing URL, regardless of
        // any decoration the lifecycle hook applied.
        match view.check_resource_exists(locale).await {
            Ok(true) => Ok(Some(resolved)),
            Ok(false) => {
                debug!(
                    view_name = view_name,
                    url = view.url(),
                    "Backing resource absent, deferring to next resolver"
                );
                Ok(None)
            }
            Err(source) => Err(ResolutionError::probe(view_name, view.url(), source)),
        }
    }

    /// Chain precedence configured for this resolver.
    pub fn order(&self) -> i32 {
        self.order
    }

    fn apply_lifecycle(
        &self,
        view_name: &str,
        view: Arc<dyn View>,
    ) -> ResolutionResult<Arc<dyn View>> {
        let Some(initializer) = &self.initializer else {
            return Ok(view);
        };

        match initializer.initialize(view_name, view.clone()) {
            Ok(Some(initialized)) => Ok(initialized),
            Ok(None) => {
                warn!(
                    view_name = view_name,
                    "Initializer output does not satisfy the view contract, keeping original"
                );
                Ok(view)
            }
            Err(source) => Err(ResolutionError::initialization(view_name, source)),
        }
    }
}

#[async_trait]
impl ViewResolver for ViewResolutionService {
    async fn resolve(
        &self,
        view_name: &str,
        locale: &Locale,
    ) -> ResolutionResult<Option<Arc<dyn View>>> {
        ViewResolutionService::resolve(self, view_name, locale).await
    }

    fn order(&self) -> i32 {
        self.order
    }
}
