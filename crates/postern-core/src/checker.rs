//! Credential verification.
//!
//! A [`Checker`] answers one question: is this username/password pair
//! allowed in? The guard consults it on every request, including requests
//! that carried no credentials at all (those arrive as the empty pair),
//! so a checker sees the full decision and can choose to admit anonymous
//! traffic, as [`AllowAll`] does.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use subtle::ConstantTimeEq;

/// Decides whether a credential pair is valid.
///
/// Implementations must be total: every input yields `true` or `false`,
/// never a panic. Unknown users, wrong passwords and malformed inputs are
/// all just `false`. Verification must not mutate state; the same pair
/// checked twice yields the same answer.
pub trait Checker {
    /// Returns `true` if the pair is acceptable.
    fn check(&self, username: &str, password: &str) -> bool;
}

impl<C: Checker + ?Sized> Checker for &C {
    fn check(&self, username: &str, password: &str) -> bool {
        (**self).check(username, password)
    }
}

impl<C: Checker + ?Sized> Checker for Arc<C> {
    fn check(&self, username: &str, password: &str) -> bool {
        (**self).check(username, password)
    }
}

impl<C: Checker + ?Sized> Checker for Box<C> {
    fn check(&self, username: &str, password: &str) -> bool {
        (**self).check(username, password)
    }
}

/// A fixed user/password table.
///
/// Lookups are exact on the username; the stored password is compared in
/// constant time. An empty table rejects everything.
#[derive(Clone, Default)]
pub struct StaticCredentials {
    users: HashMap<String, String>,
}

impl StaticCredentials {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user, replacing any previous password for that name.
    pub fn insert(&mut self, username: impl Into<String>, password: impl Into<String>) {
        self.users.insert(username.into(), password.into());
    }

    /// Number of users in the table.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns `true` if the table holds no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl From<HashMap<String, String>> for StaticCredentials {
    fn from(users: HashMap<String, String>) -> Self {
        Self { users }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticCredentials {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            users: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("users", &self.users.len())
            .finish()
    }
}

impl Checker for StaticCredentials {
    fn check(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|expected| ct_eq(password.as_bytes(), expected.as_bytes()))
    }
}

/// Admits every request, including ones that carried no credentials.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowAll;

impl Checker for AllowAll {
    fn check(&self, _username: &str, _password: &str) -> bool {
        true
    }
}

/// Constant-time comparison of two byte slices.
fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.ct_eq(b).into()
}
