//! Router construction with the guard applied per route.
//!
//! [`GuardedRouter`] owns a checker and threads it onto every route added
//! through it, so a protected API surface is assembled in one place
//! instead of remembering to `.layer(..)` each route. Routers registered
//! elsewhere stay untouched; there is no global registry.

use std::convert::Infallible;
use std::fmt;

use axum::Router;
use axum::extract::Request;
use axum::response::Response;
use axum::routing::MethodRouter;
use postern_core::Checker;
use tower::{Layer, Service};

use crate::guard::BasicAuthLayer;

/// An [`axum::Router`] builder whose routes all require authentication.
pub struct GuardedRouter<S = ()> {
    layer: BasicAuthLayer,
    router: Router<S>,
}

impl<S> GuardedRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Creates an empty guarded router.
    pub fn new(checker: impl Checker + Send + Sync + 'static) -> Self {
        Self::with_router(checker, Router::new())
    }

    /// Wraps an existing router, guarding only routes added from here on.
    ///
    /// Routes already present in `router` keep whatever middleware they
    /// were built with.
    pub fn with_router(checker: impl Checker + Send + Sync + 'static, router: Router<S>) -> Self {
        Self {
            layer: BasicAuthLayer::new(checker),
            router,
        }
    }

    /// Adds a guarded route.
    pub fn route(mut self, path: &str, method_router: MethodRouter<S>) -> Self {
        self.router = self
            .router
            .route(path, method_router.layer(self.layer.clone()));
        self
    }

    /// Adds a guarded route backed by a plain [`Service`].
    pub fn route_service<T>(mut self, path: &str, service: T) -> Self
    where
        T: Service<Request, Response = Response, Error = Infallible>
            + Clone
            + Send
            + Sync
            + 'static,
        T::Future: Send + 'static,
    {
        self.router = self.router.route_service(path, self.layer.layer(service));
        self
    }

    /// Finishes building and returns the underlying router.
    pub fn into_router(self) -> Router<S> {
        self.router
    }
}

impl<S> Clone for GuardedRouter<S> {
    fn clone(&self) -> Self {
        Self {
            layer: self.layer.clone(),
            router: self.router.clone(),
        }
    }
}

impl<S> fmt::Debug for GuardedRouter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuardedRouter")
            .field("router", &self.router)
            .finish_non_exhaustive()
    }
}

impl<S> From<GuardedRouter<S>> for Router<S> {
    fn from(guarded: GuardedRouter<S>) -> Self {
        guarded.router
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{StatusCode, header};
    use axum::response::IntoResponse;
    use axum::routing::get;
    use postern_core::{Credentials, StaticCredentials};
    use tower::ServiceExt;

    use super::*;

    fn users() -> StaticCredentials {
        [("alice", "shhhh")].into_iter().collect()
    }

    fn request(path: &str, credentials: Option<&Credentials>) -> Request {
        let mut builder = axum::http::Request::builder().uri(path);
        if let Some(creds) = credentials {
            builder = builder.header(header::AUTHORIZATION, creds.header_value());
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn every_registered_route_is_guarded() {
        let router: Router = GuardedRouter::new(users())
            .route("/admin", get(|| async { "admin" }))
            .route("/reports", get(|| async { "reports" }))
            .into();

        let creds = Credentials::new("alice", "shhhh");
        for path in ["/admin", "/reports"] {
            let response = router.clone().oneshot(request(path, None)).await.unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "path: {path}");

            let response = router
                .clone()
                .oneshot(request(path, Some(&creds)))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "path: {path}");
        }
    }

    #[tokio::test]
    async fn with_router_leaves_existing_routes_open() {
        let open = Router::new().route("/public", get(|| async { "public" }));
        let router = GuardedRouter::with_router(users(), open)
            .route("/private", get(|| async { "private" }))
            .into_router();

        let response = router
            .clone()
            .oneshot(request("/public", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router.oneshot(request("/private", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn route_service_wraps_plain_services() {
        let service = tower::service_fn(|_req: Request| async {
            Ok::<_, Infallible>("from service".into_response())
        });
        let router = GuardedRouter::new(users())
            .route_service("/svc", service)
            .into_router();

        let response = router.clone().oneshot(request("/svc", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let creds = Credentials::new("alice", "shhhh");
        let response = router
            .oneshot(request("/svc", Some(&creds)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
