pub mod env_file;
pub mod environment;
