pub mod dotenv_source;
pub mod layered;
pub mod process_env;
