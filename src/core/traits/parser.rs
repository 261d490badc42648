use crate::core::errors::Result;
use crate::core::models::env_file::EnvFile;

/// Port for parsing key-value files used as configuration sources.
pub trait ConfigParser {
    /// Parse raw file content into a structured `EnvFile`.
    fn parse(&self, content: &str) -> Result<EnvFile>;
}
