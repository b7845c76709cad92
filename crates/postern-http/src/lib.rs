//! Postern HTTP — server-side guard for axum/tower stacks.
//!
//! Two ways in:
//! - [`BasicAuthLayer`], a plain [`tower::Layer`] to hang on any route or
//!   router via `.layer(..)`,
//! - [`GuardedRouter`], a thin [`axum::Router`] wrapper that applies the
//!   guard to every route registered through it.
//!
//! Rejected requests never reach the inner service; they are answered
//! with `401 Unauthorized` and a `WWW-Authenticate: Basic` challenge.

pub mod guard;
pub mod router;

pub use guard::{BasicAuth, BasicAuthLayer, unauthorized};
pub use router::GuardedRouter;
