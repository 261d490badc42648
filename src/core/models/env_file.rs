/// A single `KEY=value` assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvAssignment {
    pub key: String,
    pub value: String,
}

/// Any line of a dotenv file.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Assignment(EnvAssignment),
    Comment,
    Blank,
}

/// A parsed dotenv file, in original line order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnvFile {
    pub lines: Vec<Line>,
}

impl EnvFile {
    /// Returns the value for `key`. When a key is assigned more than once
    /// the last assignment wins, as a shell sourcing the file would see.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.assignments()
            .filter(|a| a.key == key)
            .last()
            .map(|a| a.value.as_str())
    }

    /// Returns every assigned key, in file order.
    pub fn keys(&self) -> Vec<&str> {
        self.assignments().map(|a| a.key.as_str()).collect()
    }

    pub fn assignments(&self) -> impl Iterator<Item = &EnvAssignment> {
        self.lines.iter().filter_map(|line| match line {
            Line::Assignment(a) => Some(a),
            _ => None,
        })
    }
}
