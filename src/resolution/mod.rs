//! # Resolution Core
//!
//! Pattern-gated, URL-based resolution of symbolic view names to renderable
//! views, with asynchronous existence checking.
//!
//! ## Core Components
//!
//! - **ViewNameMatcher**: acceptance gate over exact names and simple
//!   wildcard patterns
//! - **ViewFactory / ResourceViewFactory**: pluggable view construction plus
//!   URL synthesis and shared-configuration copying
//! - **ViewResolutionService**: the end-to-end flow, exposed to resolver
//!   chains through the [`ViewResolver`] trait
//! - **ViewInitializer**: optional post-construction lifecycle hook
//!
//! Names prefixed with [`REDIRECT_URL_PREFIX`] short-cut to a redirect view;
//! everything else is resolved against the configured URL template and only
//! returned once its backing resource is confirmed reachable.

pub mod errors;
pub mod name_matcher;
pub mod resolver;
pub mod view_factory;

pub use errors::{ResolutionError, ResolutionResult};
pub use name_matcher::{simple_match, ViewNameMatcher};
pub use resolver::{
    RedirectViewProvider, ViewInitializer, ViewResolutionService, ViewResolver,
    ViewResolverConfig, REDIRECT_URL_PREFIX,
};
pub use view_factory::{ResourceViewFactory, ViewFactory};
