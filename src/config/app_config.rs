use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use crate::core::errors::{AppEnvError, Result};
use crate::core::models::environment::EnvironmentProfile;
use crate::core::services::digest;

/// Default name of the optional project config file.
pub const DEFAULT_CONFIG_FILE: &str = "appenv.toml";

/// Variable that selects the build profile.
pub const DEFAULT_SELECTOR: &str = "EAS_BUILD_PROFILE";

/// Built-in profiles: environment, backend URL.
const BUILTIN_PROFILES: &[(&str, &str)] = &[
    ("development", "https://dev.api.example.com"),
    ("production", "https://api.example.com"),
];

/// Built-in digests: backend URL, base64 SHA-256 of its API key.
const BUILTIN_DIGESTS: &[(&str, &str)] = &[
    (
        "https://dev.api.example.com",
        "98g7S97BLvOp8MEZ+hxjXGlFKKeCRgag2CQ6cU7fVZ8=",
    ),
    (
        "https://api.example.com",
        "dKywUOHhkTnA1DxSI6HsN2Mazi4jSd2y6PF5Y5piUCk=",
    ),
];

/// Built-in secret variables: environment, variable name.
const BUILTIN_SECRET_VARS: &[(&str, &str)] = &[
    ("development", "DEVELOPMENT_API_KEY"),
    ("production", "PRODUCTION_API_KEY"),
];

/// Resolved build configuration: the selector name plus the three tables
/// the resolver reads. The tables are independent so each can be extended
/// on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfig {
    pub selector: String,
    pub profiles: BTreeMap<String, EnvironmentProfile>,
    pub digests: BTreeMap<String, String>,
    pub secret_vars: BTreeMap<String, String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        let pairs = |table: &[(&str, &str)]| -> BTreeMap<String, String> {
            table
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        };

        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            profiles: BUILTIN_PROFILES
                .iter()
                .map(|(env, url)| {
                    (
                        env.to_string(),
                        EnvironmentProfile {
                            backend_url: url.to_string(),
                        },
                    )
                })
                .collect(),
            digests: pairs(BUILTIN_DIGESTS),
            secret_vars: pairs(BUILTIN_SECRET_VARS),
        }
    }
}

impl BuildConfig {
    /// Load configuration.
    ///
    /// With an explicit path the file must exist. Without one,
    /// `appenv.toml` in the working directory is used if present and the
    /// built-in tables otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<String>)> {
        let path = match explicit {
            Some(path) if !path.exists() => {
                return Err(AppEnvError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            Some(path) => path,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Path::new(DEFAULT_CONFIG_FILE),
            None => return Ok((Self::default(), None)),
        };

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content, path)?;
        Ok((config, Some(path.display().to_string())))
    }

    /// Parse and validate a TOML document. `path` labels errors.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| AppEnvError::ParseError {
            file: path.to_path_buf(),
            detail: e.to_string(),
        })?;

        let mut profiles = BTreeMap::new();
        let mut secret_vars = BTreeMap::new();
        for (name, entry) in file.environments {
            let var = entry
                .api_key_var
                .unwrap_or_else(|| default_secret_var(&name));
            secret_vars.insert(name.clone(), var);
            profiles.insert(
                name,
                EnvironmentProfile {
                    backend_url: entry.backend_url,
                },
            );
        }

        let config = Self {
            selector: file
                .appenv
                .and_then(|s| s.selector)
                .unwrap_or_else(|| DEFAULT_SELECTOR.to_string()),
            profiles,
            digests: file.digests,
            secret_vars,
        };
        config.validate().map_err(|e| match e {
            AppEnvError::InvalidConfig { detail } => AppEnvError::InvalidConfig {
                detail: format!("{}: {detail}", path.display()),
            },
            other => other,
        })?;
        Ok(config)
    }

    /// Check the cross-table invariants.
    pub fn validate(&self) -> Result<()> {
        if self.selector.trim().is_empty() {
            return Err(invalid("selector variable name is empty"));
        }

        if self.profiles.is_empty() {
            return Err(invalid("no environments defined"));
        }

        let mut seen_vars = HashSet::new();
        for (name, profile) in &self.profiles {
            validate_env_name(name)?;
            validate_backend_url(name, &profile.backend_url)?;

            let digest = self.digests.get(&profile.backend_url).ok_or_else(|| {
                invalid(format!(
                    "no digest for backend '{}' (environment '{name}')",
                    profile.backend_url
                ))
            })?;
            if !digest::is_well_formed(digest) {
                return Err(invalid(format!(
                    "digest for '{}' is not a base64 SHA-256 digest",
                    profile.backend_url
                )));
            }

            let var = self
                .secret_vars
                .get(name)
                .ok_or_else(|| invalid(format!("no API key variable for '{name}'")))?;
            if !seen_vars.insert(var.as_str()) {
                return Err(invalid(format!(
                    "API key variable {var} is shared by more than one environment"
                )));
            }
        }

        for name in self.secret_vars.keys() {
            if !self.profiles.contains_key(name) {
                return Err(invalid(format!(
                    "API key variable defined for unknown environment '{name}'"
                )));
            }
        }

        Ok(())
    }

    /// Known environment names, sorted.
    pub fn environment_names(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }
}

/// Derive `<NAME>_API_KEY` for environments without an explicit variable.
pub fn default_secret_var(environment: &str) -> String {
    let upper: String = environment
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{upper}_API_KEY")
}

fn validate_env_name(name: &str) -> Result<()> {
    let ok = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
    if ok {
        Ok(())
    } else {
        Err(invalid(format!(
            "environment name '{name}' must use only a-z, 0-9, '-' and '_'"
        )))
    }
}

fn validate_backend_url(env: &str, raw: &str) -> Result<()> {
    let parsed = url::Url::parse(raw)
        .map_err(|e| invalid(format!("backend_url for '{env}' is not a URL: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!(
            "backend_url for '{env}' must be http or https, got '{other}'"
        ))),
    }
}

fn invalid(detail: impl Into<String>) -> AppEnvError {
    AppEnvError::InvalidConfig {
        detail: detail.into(),
    }
}

/// On-disk shape of `appenv.toml`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    appenv: Option<AppEnvSection>,
    #[serde(default)]
    environments: BTreeMap<String, EnvEntry>,
    #[serde(default)]
    digests: BTreeMap<String, String>,
}

/// The `[appenv]` section.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AppEnvSection {
    selector: Option<String>,
}

/// An entry in `[environments]`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EnvEntry {
    backend_url: String,
    api_key_var: Option<String>,
}
