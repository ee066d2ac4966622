//! Handler registry: the capability that turns a matched route into an
//! invocable handler.
//!
//! The routing engine treats handler code as opaque and only asks for it
//! after a successful match; table construction never loads anything.
//! Implementations decide the loading mechanism - a compiled registration
//! map, a plugin table, an embedded interpreter.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use waymark_router::{Params, RoutePattern};

use crate::error::RegistryError;

/// Boxed response future produced by a handler.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Response> + Send>>;

/// An invocable route handler: `(request, matched parameters) -> response`.
pub type Handler = Arc<dyn Fn(Request<Body>, Params) -> HandlerFuture + Send + Sync>;

/// Resolves a matched route to an invocable handler.
pub trait HandlerRegistry: Send + Sync {
    /// Returns the handler for `route`, or why there is none.
    fn resolve(&self, route: &RoutePattern) -> Result<Handler, RegistryError>;
}

/// Registry backed by a compiled map from pattern string to handler.
///
/// # Examples
///
/// ```
/// use axum::response::IntoResponse;
/// use waymark_server::registry::FnRegistry;
///
/// let mut registry = FnRegistry::new();
/// registry.register("/blog/[id]", |_req, params| async move {
///     format!("post {}", params["id"]).into_response()
/// });
/// ```
#[derive(Default, Clone)]
pub struct FnRegistry {
    handlers: HashMap<String, Handler>,
}

impl FnRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler under a pattern string, e.g. `/blog/[id]`.
    /// Registering the same pattern again replaces the previous handler.
    pub fn register<F, Fut>(&mut self, pattern: impl Into<String>, handler: F)
    where
        F: Fn(Request<Body>, Params) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        let handler: Handler = Arc::new(move |req, params| Box::pin(handler(req, params)));
        self.handlers.insert(pattern.into(), handler);
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl HandlerRegistry for FnRegistry {
    fn resolve(&self, route: &RoutePattern) -> Result<Handler, RegistryError> {
        self.handlers
            .get(route.pattern())
            .cloned()
            .ok_or_else(|| RegistryError::HandlerMissing(route.pattern().to_string()))
    }
}

/// Development registry that answers every route with a plain-text
/// description of the matched file and bound parameters.
///
/// Stands in for a real loading mechanism when inspecting a route tree,
/// e.g. from `waymark serve`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PreviewRegistry;

impl HandlerRegistry for PreviewRegistry {
    fn resolve(&self, route: &RoutePattern) -> Result<Handler, RegistryError> {
        let pattern = route.pattern().to_string();
        let file = route.file().display().to_string();

        Ok(Arc::new(move |_req, params| {
            let pattern = pattern.clone();
            let file = file.clone();
            Box::pin(async move {
                let params = serde_json::to_string_pretty(&params)
                    .unwrap_or_else(|_| "{}".to_string());
                format!("{}\nfile: {}\nparams: {}\n", pattern, file, params).into_response()
            })
        }))
    }
}
