pub mod commands;
pub mod context;
pub mod output;

use clap::{Parser, Subcommand};

/// Resolve the build profile, verify its API key, and generate the app manifest.
#[derive(Parser, Debug)]
#[command(name = "appenv", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the config file (default: appenv.toml if present)
    #[arg(long, global = true, env = "APPENV_CONFIG")]
    pub config: Option<String>,

    /// Dotenv file read after the process environment
    #[arg(long, global = true)]
    pub env_file: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode: only show errors and requested output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the build profile and verify its API key
    Resolve {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate the app manifest for the build profile
    Manifest {
        /// Base app config (JSON)
        #[arg(long, default_value = "app.json")]
        base: String,
        /// Write the manifest here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the base64 SHA-256 digest of a key read from stdin
    Digest {
        /// Hash the value of this variable instead of stdin
        #[arg(long)]
        var: Option<String>,
    },

    /// Print the bundler asset extensions with the app's additions
    Assets {
        /// JSON array of the bundler's default extensions
        #[arg(long)]
        defaults: Option<String>,
    },
}
