use std::fmt;

/// A build profile name as read from the selector variable.
///
/// Holding an `Environment` does not mean the name is known; that is
/// checked by `EnvResolver::lookup_profile`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Environment(String);

impl Environment {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-environment metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentProfile {
    pub backend_url: String,
}

/// The result of a successful resolution: a known environment, its
/// profile, and a secret whose digest matched the backend.
#[derive(Clone, PartialEq)]
pub struct ResolvedEnvironment {
    pub environment: Environment,
    pub profile: EnvironmentProfile,
    pub api_key_var: String,
    pub secret: String,
}

impl ResolvedEnvironment {
    /// Redacted form of the secret, safe for logs.
    pub fn redacted_secret(&self) -> String {
        redact(&self.secret)
    }
}

// Keep the secret out of `{:?}` output.
impl fmt::Debug for ResolvedEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedEnvironment")
            .field("environment", &self.environment)
            .field("profile", &self.profile)
            .field("api_key_var", &self.api_key_var)
            .field("secret", &self.redacted_secret())
            .finish()
    }
}

/// Mask a value completely, keeping only its length.
pub fn redact(value: &str) -> String {
    format!("**** ({} chars)", value.chars().count())
}
