//! Request correlation middleware.
//!
//! Every request runs inside a fresh [`TraceId`] scope. The identifier is
//! echoed in the `trace-id` response header, picked up by
//! [`crate::domain::Error`] values built during the request, and attached to
//! the completion log line.

use std::task::{Context, Poll};
use std::time::Instant;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::Method;
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{debug, error};

use crate::domain::TraceId;

/// Name of the response header carrying the trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// Middleware assigning a [`TraceId`] to each request.
///
/// Handlers read the identifier with [`TraceId::current`].
///
/// # Examples
/// ```
/// use actix_web::App;
/// use catalogue::Trace;
///
/// let app = App::new().wrap(Trace);
/// ```
#[derive(Clone, Copy, Debug, Default)]
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

/// Service produced by [`Trace`].
pub struct TraceMiddleware<S> {
    service: S,
}

/// What the completion log line needs from the request.
struct RequestLine {
    trace_id: TraceId,
    method: Method,
    path: String,
    started: Instant,
}

impl RequestLine {
    fn capture(trace_id: TraceId, req: &ServiceRequest) -> Self {
        Self {
            trace_id,
            method: req.method().clone(),
            path: req.path().to_owned(),
            started: Instant::now(),
        }
    }

    fn stamp<B>(&self, res: &mut ServiceResponse<B>) {
        match HeaderValue::from_str(&self.trace_id.to_string()) {
            Ok(value) => {
                res.headers_mut()
                    .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
            }
            Err(err) => {
                error!(error = %err, trace_id = %self.trace_id, "trace id is not a valid header value");
            }
        }
    }

    fn log_completion(&self, status: u16) {
        debug!(
            trace_id = %self.trace_id,
            method = %self.method,
            path = %self.path,
            status,
            elapsed_ms = self.started.elapsed().as_millis(),
            "request completed"
        );
    }
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
        let trace_id = TraceId::generate();
        let line = RequestLine::capture(trace_id, &req);
        let inner = self.service.call(req);
        Box::pin(TraceId::scope(trace_id, async move {
            let mut res = inner.await?;
            line.stamp(&mut res);
            line.log_completion(res.status().as_u16());
            Ok(res)
        }))
    }
}
