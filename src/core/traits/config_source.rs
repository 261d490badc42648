use std::collections::HashMap;

/// Port for reading configuration values by name.
///
/// The resolver only ever reads through this trait, so tests can supply
/// an in-memory map instead of touching the process environment.
pub trait ConfigSource {
    /// Returns the value for `key`, or `None` if it is not set.
    fn get(&self, key: &str) -> Option<String>;

    /// Short label used in verbose output (e.g. `process env`).
    fn describe(&self) -> String;
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }

    fn describe(&self) -> String {
        format!("in-memory ({} values)", self.len())
    }
}

impl<S: ConfigSource + ?Sized> ConfigSource for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
