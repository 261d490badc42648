use std::path::PathBuf;

/// All domain errors for appenv.
///
/// Each variant names the missing or invalid item so a failed build
/// can be diagnosed from the log alone.
#[derive(Debug, thiserror::Error)]
pub enum AppEnvError {
    #[error("Missing {variable}, please set it in your environment")]
    MissingConfig { variable: String },

    #[error(
        "Invalid environment '{name}', use one of: {available}\n\n  \
         Check the value of the build profile variable or add the\n  \
         environment to appenv.toml."
    )]
    InvalidEnvironment { name: String, available: String },

    #[error(
        "Missing API key for '{environment}': {variable} is not set\n\n  \
         Export {variable} in the build environment or pass --env-file."
    )]
    MissingSecret {
        environment: String,
        variable: String,
    },

    #[error(
        "Unknown API key hash for '{environment}', check that it matches the backend\n\n  \
         Backend: {backend_url}\n  \
         Variable: {variable}\n\n  \
         The key does not belong to this backend. A key from another\n  \
         environment may have been exported by mistake."
    )]
    KeyIntegrity {
        environment: String,
        backend_url: String,
        variable: String,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Parse error in {file}: {detail}")]
    ParseError { file: PathBuf, detail: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AppEnvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_environment_lists_choices() {
        let err = AppEnvError::InvalidEnvironment {
            name: "staging".into(),
            available: "development, production".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'staging'"));
        assert!(msg.contains("development, production"));
    }

    #[test]
    fn key_integrity_names_backend() {
        let err = AppEnvError::KeyIntegrity {
            environment: "production".into(),
            backend_url: "https://api.example.com".into(),
            variable: "PRODUCTION_API_KEY".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("https://api.example.com"));
        assert!(msg.contains("PRODUCTION_API_KEY"));
    }
}
