//! Postern - HTTP basic authentication for axum servers and reqwest clients.
//!
//! The credential model, checkers, and the server guard are always
//! compiled. The outbound half is feature-gated:
//! - `client` — request signing over reqwest (on by default)
//!
//! Guarding a router:
//!
//! ```no_run
//! use axum::{Router, routing::get};
//! use postern::{GuardedRouter, StaticCredentials};
//!
//! # async fn run() {
//! let users: StaticCredentials = [("alice", "shhhh")].into_iter().collect();
//! let app: Router = GuardedRouter::new(users)
//!     .route("/admin", get(|| async { "admin" }))
//!     .into();
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await.unwrap();
//! axum::serve(listener, app).await.unwrap();
//! # }
//! ```
//!
//! On the other side of the wire, [`SigningClient`] pairs a
//! [`Signer`] with a reqwest client so every outbound request carries
//! the matching `Authorization` header.

pub use postern_core::{AllowAll, BASIC_SCHEME, Checker, Credentials, StaticCredentials};
pub use postern_http::{BasicAuth, BasicAuthLayer, GuardedRouter, unauthorized};

#[cfg(feature = "client")]
pub use postern_client::{BoxError, Error as ClientError, Signer, SigningClient};
