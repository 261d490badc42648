use crate::core::traits::config_source::ConfigSource;

/// Reads values from the process environment.
pub struct ProcessEnv;

impl ConfigSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        // Non-UTF-8 values are treated as unset.
        std::env::var(key).ok()
    }

    fn describe(&self) -> String {
        "process env".to_string()
    }
}
