//! Postern Client — outbound request signing over reqwest.
//!
//! A [`Signer`] mutates a [`reqwest::Request`] before dispatch, and
//! [`SigningClient`] pairs one with a [`reqwest::Client`] so every request
//! sent through it is signed first. [`Credentials`] is itself a signer
//! that attaches the `Authorization: Basic ..` header it encodes.
//!
//! Signing failures surface as [`Error::Sign`] before anything touches
//! the network; transport failures arrive as [`Error::Transport`].

pub mod client;
pub mod error;
pub mod signer;

pub use client::SigningClient;
pub use error::{BoxError, Error};
pub use postern_core::Credentials;
pub use signer::Signer;
