//! The signing client.

use std::fmt;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Body, Client, IntoUrl, Request, Response};
use serde::Serialize;

use crate::error::Error;
use crate::signer::Signer;

/// A [`reqwest::Client`] wrapper that signs every request before dispatch.
///
/// The convenience methods mirror the verbs a credential-protected API is
/// usually driven with. Anything they cannot express can be built on the
/// [`inner`](Self::inner) client and sent through [`execute`](Self::execute).
///
/// ```no_run
/// use postern_client::{Credentials, SigningClient};
///
/// # async fn run() -> Result<(), postern_client::Error> {
/// let client = SigningClient::with_signer(Credentials::new("alice", "shhhh"));
/// let response = client.get("http://127.0.0.1:8080/admin").await?;
/// println!("{}", response.status());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SigningClient<S> {
    client: Client,
    signer: S,
}

impl<S: Signer> SigningClient<S> {
    /// Pairs an existing client with a signer.
    pub fn new(client: Client, signer: S) -> Self {
        Self { client, signer }
    }

    /// Builds a client with default settings around `signer`.
    pub fn with_signer(signer: S) -> Self {
        Self::new(Client::new(), signer)
    }

    /// Returns the underlying client, for requests that must go out unsigned.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Signs and dispatches an already-built request.
    pub async fn execute(&self, mut request: Request) -> Result<Response, Error> {
        self.signer.sign(&mut request).map_err(Error::Sign)?;
        tracing::debug!(method = %request.method(), url = %request.url(), "dispatching request");
        Ok(self.client.execute(request).await?)
    }

    /// Sends a signed GET request.
    pub async fn get(&self, url: impl IntoUrl) -> Result<Response, Error> {
        let request = self.client.get(url).build()?;
        self.execute(request).await
    }

    /// Sends a signed HEAD request.
    pub async fn head(&self, url: impl IntoUrl) -> Result<Response, Error> {
        let request = self.client.head(url).build()?;
        self.execute(request).await
    }

    /// Sends a signed POST request with an explicit content type.
    pub async fn post(
        &self,
        url: impl IntoUrl,
        content_type: &str,
        body: impl Into<Body>,
    ) -> Result<Response, Error> {
        let request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .build()?;
        self.execute(request).await
    }

    /// Sends a signed POST request with a form-encoded payload.
    pub async fn post_form<T>(&self, url: impl IntoUrl, form: &T) -> Result<Response, Error>
    where
        T: Serialize + ?Sized,
    {
        let request = self.client.post(url).form(form).build()?;
        self.execute(request).await
    }
}

impl<S> fmt::Debug for SigningClient<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningClient")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::error::BoxError;

    use super::*;

    struct FailingSigner;

    impl Signer for FailingSigner {
        fn sign(&self, _request: &mut Request) -> Result<(), BoxError> {
            Err("no credentials available".into())
        }
    }

    /// Records the built request's content type and body, then aborts so
    /// nothing leaves the process.
    struct Inspect(Arc<Mutex<Option<(String, Vec<u8>)>>>);

    impl Signer for Inspect {
        fn sign(&self, request: &mut Request) -> Result<(), BoxError> {
            let content_type = request
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .to_owned();
            let body = request
                .body()
                .and_then(Body::as_bytes)
                .unwrap_or_default()
                .to_vec();
            *self.0.lock().unwrap() = Some((content_type, body));
            Err("inspection only".into())
        }
    }

    #[tokio::test]
    async fn signing_failure_aborts_before_dispatch() {
        // Nothing listens on port 1; a Sign error proves the request
        // never left the building.
        let client = SigningClient::with_signer(FailingSigner);
        let err = client.get("http://127.0.0.1:1/").await.unwrap_err();

        assert!(matches!(err, Error::Sign(_)));
        assert_eq!(
            err.to_string(),
            "request signing failed: no credentials available"
        );
    }

    #[tokio::test]
    async fn post_form_encodes_urlencoded_payloads() {
        let seen = Arc::new(Mutex::new(None));
        let client = SigningClient::with_signer(Inspect(Arc::clone(&seen)));

        let err = client
            .post_form("http://127.0.0.1:1/submit", &[("k", "v"), ("x", "y z")])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Sign(_)));

        let (content_type, body) = seen.lock().unwrap().take().unwrap();
        assert_eq!(content_type, "application/x-www-form-urlencoded");
        assert_eq!(body, b"k=v&x=y+z");
    }
}
