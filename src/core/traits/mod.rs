pub mod config_source;
pub mod parser;
