//! Postern Core — transport-agnostic credential model and verification.
//!
//! This crate holds everything shared by the inbound and outbound halves
//! of the middleware:
//! - the [`Credentials`] pair and the `Basic` header codec,
//! - the [`Checker`] capability that decides whether a pair is valid,
//! - the built-in checkers ([`StaticCredentials`], [`AllowAll`]).
//!
//! Transport crates (`postern-http`, `postern-client`) depend on this
//! crate and adapt it to one side of the wire; nothing here touches
//! axum, tower, or reqwest.

pub mod checker;
pub mod credentials;

pub use checker::{AllowAll, Checker, StaticCredentials};
pub use credentials::{BASIC_SCHEME, Credentials};
