//! Input representation for the combo engine

use std::fmt;

/// An opaque identifier naming one primitive input event
///
/// Equality is exact; there is no fuzzy matching. Which physical key or
/// button produces which token is up to the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    /// Creates a token from any string-like value
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Gets the token name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Token {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Token {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A token paired with the time it occurred at, in seconds
///
/// Immutable once created. Timestamps are monotonically non-decreasing in
/// insertion order (caller contract, enforced by [`InputBuffer`]).
///
/// [`InputBuffer`]: super::InputBuffer
#[derive(Debug, Clone, PartialEq)]
pub struct TimedToken {
    pub token: Token,
    pub timestamp: f64,
}

impl TimedToken {
    /// Creates a new timed token
    pub fn new(token: impl Into<Token>, timestamp: f64) -> Self {
        Self {
            token: token.into(),
            timestamp,
        }
    }
}
