use std::path::{Path, PathBuf};

use crate::adapters::parsers::dotenv_parser::DotenvParser;
use crate::core::errors::{AppEnvError, Result};
use crate::core::models::env_file::EnvFile;
use crate::core::traits::config_source::ConfigSource;
use crate::core::traits::parser::ConfigParser;

/// A `.env` file loaded once and served as a config source.
pub struct DotenvSource {
    path: PathBuf,
    file: EnvFile,
}

impl DotenvSource {
    /// Read and parse the file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AppEnvError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let file = DotenvParser::new(path).parse(&content)?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }
}

impl ConfigSource for DotenvSource {
    fn get(&self, key: &str) -> Option<String> {
        self.file.get(key).map(str::to_string)
    }

    fn describe(&self) -> String {
        format!("{} ({} values)", self.path.display(), self.file.keys().len())
    }
}
