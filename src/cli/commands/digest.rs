use std::io::Read;

use crate::cli::{context, output};
use crate::core::errors::{AppEnvError, Result};
use crate::core::services::digest;
use crate::core::traits::config_source::ConfigSource;

/// Execute the `appenv digest` command.
///
/// Prints the value to put in `[digests]` for a key. The key comes from
/// stdin (one trailing newline removed) or from the variable named by `--var`.
pub fn execute(env_file: Option<&str>, var: Option<&str>) -> Result<()> {
    let value = match var {
        Some(name) => {
            let source = context::config_source(env_file)?;
            source
                .get(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AppEnvError::MissingConfig {
                    variable: name.to_string(),
                })?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            strip_newline(buf)
        }
    };

    if value.is_empty() {
        return Err(AppEnvError::InvalidConfig {
            detail: "nothing to hash: input is empty".into(),
        });
    }
    if value.trim() != value {
        output::warning("Value has leading or trailing whitespace; hashing it as is");
    }

    println!("{}", digest::sha256_base64(value.as_bytes()));
    Ok(())
}

fn strip_newline(mut value: String) -> String {
    if value.ends_with('\n') {
        value.pop();
        if value.ends_with('\r') {
            value.pop();
        }
    }
    value
}
