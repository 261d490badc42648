mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();
    cli::context::init(args.verbose, args.quiet);

    let config = args.config.as_deref();
    let env_file = args.env_file.as_deref();

    let result = match &args.command {
        Commands::Resolve { json } => cli::commands::resolve::execute(config, env_file, *json),
        Commands::Manifest { base, output } => {
            cli::commands::manifest::execute(config, env_file, base, output.as_deref())
        }
        Commands::Digest { var } => cli::commands::digest::execute(env_file, var.as_deref()),
        Commands::Assets { defaults } => cli::commands::assets::execute(defaults.as_deref()),
    };

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
