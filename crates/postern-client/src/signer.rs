//! Request signing.

use std::sync::Arc;

use postern_core::Credentials;
use reqwest::header::{AUTHORIZATION, HeaderValue};

use crate::error::BoxError;

/// Mutates a request before it is sent, typically to attach credentials.
///
/// Signing is synchronous: a signer works from state it already holds and
/// never performs I/O. Returning an error aborts the send before any
/// bytes reach the wire.
pub trait Signer {
    /// Signs `request` in place.
    fn sign(&self, request: &mut reqwest::Request) -> Result<(), BoxError>;
}

impl<S: Signer + ?Sized> Signer for &S {
    fn sign(&self, request: &mut reqwest::Request) -> Result<(), BoxError> {
        (**self).sign(request)
    }
}

impl<S: Signer + ?Sized> Signer for Arc<S> {
    fn sign(&self, request: &mut reqwest::Request) -> Result<(), BoxError> {
        (**self).sign(request)
    }
}

impl<S: Signer + ?Sized> Signer for Box<S> {
    fn sign(&self, request: &mut reqwest::Request) -> Result<(), BoxError> {
        (**self).sign(request)
    }
}

impl Signer for Credentials {
    /// Attaches `Authorization: Basic ..`, replacing any existing value.
    fn sign(&self, request: &mut reqwest::Request) -> Result<(), BoxError> {
        let mut value = HeaderValue::from_str(&self.header_value())?;
        value.set_sensitive(true);
        request.headers_mut().insert(AUTHORIZATION, value);
        Ok(())
    }
}
