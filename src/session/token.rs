//! Bearer token wrapper.
//!
//! The token is an opaque credential; wrapping it keeps the value out of
//! logs and `Debug` output. Use `expose()` only when building the auth
//! header or writing the session file.

/// Opaque session credential that masks its value.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Wrap a raw token string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the inner value.
    ///
    /// Use sparingly: the auth header and the session file are the only
    /// places that need it.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// An empty token is never a valid credential.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token(••••••••)")
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_does_not_leak_in_debug_or_display() {
        let token = Token::new("secret-jwt-value");

        let debug_output = format!("{:?}", token);
        assert!(!debug_output.contains("secret-jwt-value"));
        assert!(debug_output.contains("••••••••"));

        let display_output = format!("{}", token);
        assert!(!display_output.contains("secret-jwt-value"));

        assert_eq!(token.expose(), "secret-jwt-value");
    }

    #[test]
    fn empty_token_is_detected() {
        assert!(Token::new("").is_empty());
        assert!(!Token::new("x").is_empty());
    }
}
