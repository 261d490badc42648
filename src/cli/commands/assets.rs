use std::path::Path;

use crate::cli::output;
use crate::core::errors::{AppEnvError, Result};
use crate::core::services::asset_exts::{EXTRA_ASSET_EXTS, extend_asset_exts};

/// Execute the `appenv assets` command.
///
/// Prints the bundler's asset extensions with the app's additions as a
/// JSON array.
pub fn execute(defaults: Option<&str>) -> Result<()> {
    let base: Vec<String> = match defaults {
        Some(path) => {
            let path = Path::new(path);
            if !path.exists() {
                return Err(AppEnvError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str(&raw).map_err(|e| AppEnvError::ParseError {
                file: path.to_path_buf(),
                detail: format!("expected a JSON array of strings: {e}"),
            })?
        }
        None => Vec::new(),
    };

    let before = base.len();
    let exts = extend_asset_exts(base, EXTRA_ASSET_EXTS);
    output::info(&format!("Added {} extension(s)", exts.len() - before));

    println!("{}", serde_json::to_string(&exts)?);
    Ok(())
}
