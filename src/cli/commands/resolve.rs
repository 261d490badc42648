use serde::Serialize;

use crate::cli::{context, output};
use crate::core::errors::Result;
use crate::core::services::env_resolver::EnvResolver;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolveReport<'a> {
    environment: &'a str,
    backend_url: &'a str,
    api_key_var: &'a str,
}

/// Execute the `appenv resolve` command.
///
/// Runs the full resolution and reports the environment and backend.
/// The API key itself is never printed.
pub fn execute(config_path: Option<&str>, env_file: Option<&str>, json: bool) -> Result<()> {
    let config = context::load_config(config_path)?;
    let source = context::config_source(env_file)?;
    let resolver = EnvResolver::new(&config, source);

    output::info(&format!("Selector: {}", config.selector));

    let resolved = resolver.resolve()?;

    if json {
        let report = ResolveReport {
            environment: resolved.environment.as_str(),
            backend_url: &resolved.profile.backend_url,
            api_key_var: &resolved.api_key_var,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::header(&format!("Environment: {}", resolved.environment));
    output::success(&format!("Backend: {}", resolved.profile.backend_url));
    output::success(&format!(
        "API key verified ({} = {})",
        resolved.api_key_var,
        resolved.redacted_secret()
    ));

    Ok(())
}
