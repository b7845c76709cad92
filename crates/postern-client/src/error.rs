//! Client error type.

/// Boxed error used by [`Signer`](crate::Signer) implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors produced when sending a signed request.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The signer refused or failed to sign; nothing was sent.
    #[error("request signing failed: {0}")]
    Sign(#[source] BoxError),

    /// The HTTP layer failed building or sending the request.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
