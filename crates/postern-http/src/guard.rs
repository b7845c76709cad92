//! The authentication middleware itself.
//!
//! [`BasicAuth`] wraps an inner [`Service`] and consults a
//! [`Checker`] before every call. The checker runs even when the request
//! carried no `Authorization` header: absent or malformed credentials
//! normalize to the empty pair, so permissive checkers can still admit
//! anonymous traffic.

use std::fmt;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::extract::Request;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use futures_util::future::{Either, Ready, ready};
use postern_core::{Checker, Credentials};
use tower::{Layer, Service};

type SharedChecker = Arc<dyn Checker + Send + Sync>;

/// Tower layer that wraps services in [`BasicAuth`].
#[derive(Clone)]
pub struct BasicAuthLayer {
    checker: SharedChecker,
}

impl BasicAuthLayer {
    /// Creates a layer that guards wrapped services with `checker`.
    pub fn new(checker: impl Checker + Send + Sync + 'static) -> Self {
        Self {
            checker: Arc::new(checker),
        }
    }
}

impl<S> Layer<S> for BasicAuthLayer {
    type Service = BasicAuth<S>;

    fn layer(&self, inner: S) -> Self::Service {
        BasicAuth {
            checker: Arc::clone(&self.checker),
            inner,
        }
    }
}

impl fmt::Debug for BasicAuthLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuthLayer").finish_non_exhaustive()
    }
}

/// Middleware service enforcing basic authentication on an inner service.
#[derive(Clone)]
pub struct BasicAuth<S> {
    checker: SharedChecker,
    inner: S,
}

impl<S> BasicAuth<S> {
    /// Wraps `inner` so that requests must pass `checker` first.
    pub fn new(checker: impl Checker + Send + Sync + 'static, inner: S) -> Self {
        Self {
            checker: Arc::new(checker),
            inner,
        }
    }
}

impl<S> Service<Request> for BasicAuth<S>
where
    S: Service<Request, Response = Response>,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Either<Ready<Result<Response, S::Error>>, S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let credentials = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(Credentials::parse_header);

        // Absent or malformed headers are not an error path: the checker
        // still runs, with the empty pair, and makes the decision.
        let (username, password) = match &credentials {
            Some(creds) => (creds.username(), creds.password()),
            None => ("", ""),
        };

        if self.checker.check(username, password) {
            Either::Right(self.inner.call(req))
        } else {
            tracing::debug!(path = %req.uri().path(), "missing or invalid credentials");
            Either::Left(ready(Ok(unauthorized())))
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for BasicAuth<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// Builds the canonical rejection response: `401 Unauthorized` carrying a
/// `WWW-Authenticate: Basic` challenge and the status text as its body.
pub fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Basic")],
        StatusCode::UNAUTHORIZED
            .canonical_reason()
            .unwrap_or("Unauthorized"),
    )
        .into_response()
}
