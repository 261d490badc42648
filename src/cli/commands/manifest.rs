use std::path::Path;

use crate::cli::{context, output};
use crate::core::errors::{AppEnvError, Result};
use crate::core::services::env_resolver::EnvResolver;
use crate::core::services::manifest_service::ManifestService;

/// Execute the `appenv manifest` command.
///
/// Resolves and verifies the environment first; the base config is only
/// read once that succeeds, and nothing is written on failure.
pub fn execute(
    config_path: Option<&str>,
    env_file: Option<&str>,
    base: &str,
    out: Option<&str>,
) -> Result<()> {
    let config = context::load_config(config_path)?;
    let source = context::config_source(env_file)?;
    let resolved = EnvResolver::new(&config, source).resolve()?;

    let base_path = Path::new(base);
    if !base_path.exists() {
        return Err(AppEnvError::FileNotFound {
            path: base_path.to_path_buf(),
        });
    }
    let raw = std::fs::read_to_string(base_path)?;
    let value = serde_json::from_str(&raw).map_err(|e| AppEnvError::ParseError {
        file: base_path.to_path_buf(),
        detail: e.to_string(),
    })?;
    let base_map = ManifestService::base_from_json(value)?;

    let timestamp = chrono::Utc::now().timestamp_millis();
    let manifest = ManifestService.assemble(base_map, &resolved, timestamp);
    let rendered = serde_json::to_string_pretty(&manifest)?;

    match out {
        Some(path) => {
            std::fs::write(path, format!("{rendered}\n"))?;
            output::success(&format!(
                "Manifest for '{}' written to {path}",
                resolved.environment
            ));
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
