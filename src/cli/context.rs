use std::path::Path;
use std::sync::OnceLock;

use crate::adapters::sources::dotenv_source::DotenvSource;
use crate::adapters::sources::layered::Layered;
use crate::adapters::sources::process_env::ProcessEnv;
use crate::cli::output;
use crate::config::app_config::BuildConfig;
use crate::core::errors::Result;
use crate::core::traits::config_source::ConfigSource;

/// How much status output to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

static VERBOSITY: OnceLock<Verbosity> = OnceLock::new();

/// Set the global verbosity from the CLI flags. Only the first call counts.
pub fn init(verbose: bool, quiet: bool) {
    let level = if quiet {
        Verbosity::Quiet
    } else if verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    };
    let _ = VERBOSITY.set(level);
}

pub fn verbosity() -> Verbosity {
    VERBOSITY.get().copied().unwrap_or(Verbosity::Normal)
}

/// Load the build config, honouring `--config`.
pub fn load_config(explicit: Option<&str>) -> Result<BuildConfig> {
    let (config, path) = BuildConfig::load(explicit.map(Path::new))?;
    match path {
        Some(path) => output::info(&format!("Config: {path}")),
        None => output::info("Config: built-in defaults"),
    }
    Ok(config)
}

/// Build the config source: process env first, then `--env-file` if given.
pub fn config_source(env_file: Option<&str>) -> Result<Layered> {
    let mut source = Layered::new().with(ProcessEnv);
    if let Some(path) = env_file {
        source = source.with(DotenvSource::load(Path::new(path))?);
    }
    output::info(&format!("Sources: {}", source.describe()));
    Ok(source)
}
