//! Request-context middleware.
//!
//! Each incoming request receives a UUID trace identifier and has its path
//! recorded in task-local storage, so logs and boundary error payloads can
//! be correlated without threading request state through every layer. The
//! middleware also logs one line per request with method, path, status, and
//! duration.
//!
//! Tokio task-local variables are not inherited across spawned tasks; use
//! [`RequestContext::scope`] when moving work onto another task if the
//! context must stay visible there.

use std::task::{Context, Poll};
use std::time::Instant;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tokio::task_local;
use tracing::{error, info};
use uuid::Uuid;

/// Name of the response header carrying the request's trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    static REQUEST_CONTEXT: RequestContext;
}

/// Per-request trace identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Request-scoped context exposed via task-local storage.
///
/// # Examples
/// ```
/// use carts_backend::middleware::trace::RequestContext;
///
/// async fn handler() {
///     if let Some(ctx) = RequestContext::current() {
///         println!("handling {} (trace {})", ctx.path(), ctx.trace_id());
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    trace_id: TraceId,
    path: String,
}

impl RequestContext {
    fn new(trace_id: TraceId, path: impl Into<String>) -> Self {
        Self {
            trace_id,
            path: path.into(),
        }
    }

    /// Returns the context of the request currently in scope, if any.
    pub fn current() -> Option<Self> {
        REQUEST_CONTEXT.try_with(Clone::clone).ok()
    }

    /// Trace identifier of the request.
    pub fn trace_id(&self) -> TraceId {
        self.trace_id
    }

    /// Path of the request, as received by the router.
    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    /// Execute the provided future with the supplied context in scope.
    pub async fn scope<Fut>(context: Self, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        REQUEST_CONTEXT.scope(context, fut).await
    }
}

/// Middleware attaching a [`RequestContext`] to every request and a
/// `trace-id` header to every response.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use carts_backend::Trace;
///
/// let app = App::new().wrap(Trace);
/// ```
#[derive(Clone)]
pub struct Trace;

impl<S, B> Transform<S, ServiceRequest> for Trace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceMiddleware { service }))
    }
}

/// Service wrapper produced by [`Trace`].
pub struct TraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let context = RequestContext::new(TraceId::generate(), req.path());
        let header_value = context.trace_id().to_string();
        let method = req.method().clone();
        let path = context.path().to_owned();
        let started = Instant::now();

        let fut = self.service.call(req);
        Box::pin(RequestContext::scope(context, async move {
            info!(%method, %path, "request received");
            let mut res = fut.await?;
            let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
            info!(
                %method,
                %path,
                status = res.status().as_u16(),
                elapsed_ms,
                "request completed"
            );
            match HeaderValue::from_str(&header_value) {
                Ok(value) => {
                    res.response_mut()
                        .headers_mut()
                        .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
                }
                Err(error) => {
                    error!(%error, "failed to encode trace identifier header");
                }
            }
            Ok(res)
        }))
    }
}
