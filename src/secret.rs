use secrecy::{ExposeSecret, SecretString};

/// A password held behind `secrecy` so it never leaks through `Debug`
/// output and is wiped from memory on drop.
pub struct Password {
    inner: SecretString,
}

impl Password {
    pub fn new(password: &str) -> Self {
        Self { inner: SecretString::from(password.to_owned()) }
    }

    pub fn from_string(password: String) -> Self {
        Self { inner: SecretString::from(password) }
    }

    pub fn expose_secret(&self) -> &str {
        self.inner.expose_secret()
    }

    /// True when the password contains no characters at all.
    pub fn is_empty(&self) -> bool {
        self.inner.expose_secret().is_empty()
    }
}

impl From<SecretString> for Password {
    fn from(secret: SecretString) -> Self {
        Self { inner: secret }
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Password([... {} chars ...])", self.inner.expose_secret().len())
    }
}
