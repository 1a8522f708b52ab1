//! Credential extraction from the host page.

/// Name of the cookie holding the backend JWT.
pub const JWT_COOKIE: &str = "jwt";

/// Credentials attached to every backend request.
#[derive(Clone)]
pub struct Credentials {
    /// JWT issued to the host page.
    pub jwt: String,
}

impl Credentials {
    /// Wrap a raw JWT.
    pub fn new(jwt: impl Into<String>) -> Self {
        Self { jwt: jwt.into() }
    }

    /// Value of the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("JWT {}", self.jwt)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials").field("jwt", &"<redacted>").finish()
    }
}

/// Find a cookie value in a `Cookie` header (`a=1; b=2`).
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

/// Extract the backend JWT from a `Cookie` header.
pub fn jwt_from_cookie_header(header: &str) -> Option<Credentials> {
    cookie_value(header, JWT_COOKIE).map(Credentials::new)
}
