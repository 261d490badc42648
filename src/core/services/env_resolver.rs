use crate::config::app_config::BuildConfig;
use crate::core::errors::{AppEnvError, Result};
use crate::core::models::environment::{Environment, EnvironmentProfile, ResolvedEnvironment};
use crate::core::services::digest;
use crate::core::traits::config_source::ConfigSource;

/// Resolves the build profile and verifies its API key.
///
/// Every value is read through the injected `ConfigSource`; the resolver
/// itself holds no state between calls.
pub struct EnvResolver<'a, S: ConfigSource> {
    config: &'a BuildConfig,
    source: S,
}

impl<'a, S: ConfigSource> EnvResolver<'a, S> {
    pub fn new(config: &'a BuildConfig, source: S) -> Self {
        Self { config, source }
    }

    /// Read the build profile name from the selector variable.
    ///
    /// # Errors
    ///
    /// `MissingConfig` if the selector is unset or empty.
    pub fn resolve_environment(&self) -> Result<Environment> {
        match self.source.get(&self.config.selector) {
            Some(name) if !name.is_empty() => Ok(Environment::new(name)),
            _ => Err(AppEnvError::MissingConfig {
                variable: self.config.selector.clone(),
            }),
        }
    }

    /// Look up the profile for a known environment.
    ///
    /// # Errors
    ///
    /// `InvalidEnvironment` listing the known names if `environment` is
    /// not one of them.
    pub fn lookup_profile(&self, environment: &Environment) -> Result<&'a EnvironmentProfile> {
        self.config
            .profiles
            .get(environment.as_str())
            .ok_or_else(|| AppEnvError::InvalidEnvironment {
                name: environment.to_string(),
                available: self.config.environment_names().join(", "),
            })
    }

    /// Name of the variable holding the API key for `environment`.
    pub fn secret_var(&self, environment: &Environment) -> Result<&'a str> {
        self.config
            .secret_vars
            .get(environment.as_str())
            .map(String::as_str)
            .ok_or_else(|| AppEnvError::InvalidConfig {
                detail: format!("no API key variable for '{environment}'"),
            })
    }

    /// Read the environment's API key and check it against the digest
    /// stored for the environment's backend.
    ///
    /// # Errors
    ///
    /// - `InvalidEnvironment` if `environment` is unknown.
    /// - `MissingSecret` if the key variable is unset or empty.
    /// - `InvalidConfig` if the backend has no digest.
    /// - `KeyIntegrity` if the key's digest does not match.
    pub fn retrieve_and_verify_secret(&self, environment: &Environment) -> Result<String> {
        let profile = self.lookup_profile(environment)?;
        let variable = self.secret_var(environment)?;

        let secret = match self.source.get(variable) {
            Some(value) if !value.is_empty() => value,
            _ => {
                return Err(AppEnvError::MissingSecret {
                    environment: environment.to_string(),
                    variable: variable.to_string(),
                });
            }
        };

        let expected = self
            .config
            .digests
            .get(&profile.backend_url)
            .ok_or_else(|| AppEnvError::InvalidConfig {
                detail: format!(
                    "no digest for backend '{}' (environment '{environment}')",
                    profile.backend_url
                ),
            })?;

        if !digest::matches(&secret, expected) {
            return Err(AppEnvError::KeyIntegrity {
                environment: environment.to_string(),
                backend_url: profile.backend_url.clone(),
                variable: variable.to_string(),
            });
        }

        Ok(secret)
    }

    /// Run the full resolution: selector, profile, verified key.
    /// Nothing is returned unless every step succeeds.
    pub fn resolve(&self) -> Result<ResolvedEnvironment> {
        let environment = self.resolve_environment()?;
        let profile = self.lookup_profile(&environment)?.clone();
        let secret = self.retrieve_and_verify_secret(&environment)?;
        let api_key_var = self.secret_var(&environment)?.to_string();

        Ok(ResolvedEnvironment {
            environment,
            profile,
            api_key_var,
            secret,
        })
    }
}
