//! The axum serving layer.
//!
//! [`ServerBuilder`] assembles the startup pipeline - normalize the root,
//! walk it, build the route table, attach the handler registry - and
//! produces an `axum::Router` whose fallback performs dispatch. The table
//! is built once before the first request and shared read-only afterwards.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};
use waymark_router::{BuildError, Params, RouteObserver, RouteTable};

use crate::config::Config;
use crate::discover::{discover_routes, normalize_root_dir, DEFAULT_EXTENSIONS};
use crate::error::ServeError;
use crate::observer::TracingObserver;
use crate::registry::{Handler, HandlerRegistry, PreviewRegistry};

/// Everything a dispatch needs, shared across request tasks.
#[derive(Clone)]
struct AppState {
    table: Option<Arc<RouteTable>>,
    registry: Arc<dyn HandlerRegistry>,
    fallback: Handler,
}

/// A built server: the axum router plus the route table it dispatches
/// against, kept around for boot summaries and introspection.
pub struct WaymarkServer {
    router: axum::Router,
    table: Option<Arc<RouteTable>>,
}

impl std::fmt::Debug for WaymarkServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaymarkServer")
            .field("has_table", &self.table.is_some())
            .finish()
    }
}

impl WaymarkServer {
    /// The route table, or `None` when serving an (allowed) empty root.
    pub fn table(&self) -> Option<&RouteTable> {
        self.table.as_deref()
    }

    /// Consumes the server, yielding the router to hand to `axum::serve`.
    pub fn into_router(self) -> axum::Router {
        self.router
    }
}

/// Assembles the serving pipeline.
///
/// # Examples
///
/// ```no_run
/// use waymark_server::ServerBuilder;
///
/// # async fn run() -> anyhow::Result<()> {
/// let server = ServerBuilder::new("/srv/pages").build()?;
/// let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
/// axum::serve(listener, server.into_router()).await?;
/// # Ok(())
/// # }
/// ```
pub struct ServerBuilder {
    root_dir: String,
    extensions: Vec<String>,
    allow_empty: bool,
    registry: Arc<dyn HandlerRegistry>,
    observer: Arc<dyn RouteObserver>,
    fallback: Handler,
}

impl ServerBuilder {
    /// Starts a builder for the given root directory. The root must be
    /// absolute (a `file://` prefix is accepted) by the time `build` runs.
    pub fn new(root_dir: impl Into<String>) -> Self {
        Self {
            root_dir: root_dir.into(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            allow_empty: false,
            registry: Arc::new(PreviewRegistry),
            observer: Arc::new(TracingObserver),
            fallback: default_fallback(),
        }
    }

    /// Builder seeded from a loaded [`Config`].
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.routing.root_dir.clone())
            .extensions(config.routing.extensions.clone())
            .allow_empty(config.routing.allow_empty)
    }

    /// Replaces the extension set route files are filtered by.
    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Keeps serving when zero routes are discovered instead of failing
    /// startup. The condition is still logged; it is never silent.
    pub fn allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    /// Replaces the default [`PreviewRegistry`].
    pub fn registry(mut self, registry: Arc<dyn HandlerRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Replaces the default [`TracingObserver`].
    pub fn observer(mut self, observer: Arc<dyn RouteObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Replaces the default plain 404 response for unmatched paths.
    pub fn fallback<F, Fut>(mut self, fallback: F) -> Self
    where
        F: Fn(Request<Body>, Params) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Response> + Send + 'static,
    {
        self.fallback = Arc::new(move |req, params| Box::pin(fallback(req, params)));
        self
    }

    /// Runs the startup pipeline and yields the built server.
    ///
    /// Fails on a relative or missing root, a walk error, or an invalid
    /// pattern set. An empty route set fails too unless `allow_empty` was
    /// chosen, in which case every request falls through to the fallback.
    pub fn build(self) -> Result<WaymarkServer, ServeError> {
        let root = normalize_root_dir(&self.root_dir)?;
        let files = discover_routes(&root, &self.extensions)?;

        let table = if files.is_empty() {
            if !self.allow_empty {
                return Err(ServeError::Build(BuildError::NoRoutesDiscovered {
                    root,
                }));
            }
            warn!(
                root = %root.display(),
                "0 routes discovered - every request will hit the fallback"
            );
            None
        } else {
            let table = RouteTable::builder()
                .with_observer(self.observer)
                .build(files, &root)?;
            Some(Arc::new(table))
        };

        let state = AppState {
            table: table.clone(),
            registry: self.registry,
            fallback: self.fallback,
        };

        let router = axum::Router::new()
            .fallback(dispatch_handler)
            .with_state(state)
            .layer(TraceLayer::new_for_http());

        Ok(WaymarkServer { router, table })
    }
}

fn default_fallback() -> Handler {
    Arc::new(|_req, _params| {
        Box::pin(async { (StatusCode::NOT_FOUND, "Not Found").into_response() })
    })
}

/// Resolves each request against the table, then the registry.
///
/// Not-found and handler failures are terminal for the request only; the
/// table and other in-flight requests are unaffected.
async fn dispatch_handler(State(state): State<AppState>, req: Request<Body>) -> Response {
    let path = req.uri().path().to_string();

    let Some(found) = state.table.as_ref().and_then(|table| table.dispatch(&path)) else {
        return (state.fallback)(req, Params::new()).await;
    };

    match state.registry.resolve(found.route) {
        Ok(handler) => handler(req, found.params).await,
        Err(err) => {
            error!(path = %path, error = %err, "handler resolution failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
