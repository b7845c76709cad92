//! Credential pair and the `Basic` header codec.
//!
//! The server guard parses inbound `Authorization` values with
//! [`Credentials::parse_header`]; the client signer encodes outbound ones
//! with [`Credentials::header_value`]. Both directions live here so the
//! two transports cannot drift apart on wire format.

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

/// Scheme token of the `Authorization` header this crate speaks.
pub const BASIC_SCHEME: &str = "Basic";

/// An opaque username/password pair.
///
/// Both parts are arbitrary strings: no canonicalization, no trimming,
/// case-sensitive. The only structural restriction comes from the wire
/// format itself: a username containing `:` cannot round-trip, since the
/// first colon of the decoded payload separates the two parts. Passwords
/// may contain colons freely.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Creates a credential pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Encodes the pair as a full `Authorization` header value:
    /// `Basic base64(username ":" password)`.
    pub fn header_value(&self) -> String {
        let joined = format!("{}:{}", self.username, self.password);
        format!("{BASIC_SCHEME} {}", BASE64.encode(joined))
    }

    /// Parses a full `Authorization` header value.
    ///
    /// The scheme token is matched ASCII case-insensitively, so `basic`
    /// and `BASIC` are accepted alongside `Basic`. Returns `None` for
    /// anything that is not well-formed Basic authentication: a different
    /// scheme, a missing payload, invalid base64, a non-UTF-8 payload, or
    /// a payload without a colon separator.
    pub fn parse_header(value: &str) -> Option<Self> {
        let payload = strip_scheme(value)?;
        let decoded = BASE64.decode(payload).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;
        Some(Self::new(username, password))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Strips a case-insensitive `Basic ` prefix, returning the base64 payload.
fn strip_scheme(value: &str) -> Option<&str> {
    let (scheme, payload) = value.split_once(' ')?;
    scheme.eq_ignore_ascii_case(BASIC_SCHEME).then_some(payload)
}
