use crate::core::errors::{AppEnvError, Result};
use crate::core::models::env_file::{EnvAssignment, EnvFile, Line};
use crate::core::traits::parser::ConfigParser;
use std::path::PathBuf;

/// Parses `.env` files used as an extra configuration source.
///
/// Supports:
/// - `KEY=value` and `export KEY=value`
/// - Quoted values (`KEY="value"` and `KEY='value'`)
/// - Comment lines (`# ...`) and blank lines
pub struct DotenvParser {
    file: PathBuf,
}

impl DotenvParser {
    /// `file` is only used to label parse errors.
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self { file: file.into() }
    }

    fn parse_line(&self, raw: &str, line_number: usize) -> Result<Line> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Ok(Line::Blank);
        }

        if trimmed.starts_with('#') {
            return Ok(Line::Comment);
        }

        let body = trimmed.strip_prefix("export ").unwrap_or(trimmed);

        let Some(eq_pos) = body.find('=') else {
            return Err(self.error(format!(
                "line {line_number}: expected KEY=value, got: {body}"
            )));
        };

        let key = body[..eq_pos].trim().to_string();
        if key.is_empty() {
            return Err(self.error(format!("line {line_number}: empty key")));
        }

        let value = parse_value(body[eq_pos + 1..].trim());

        Ok(Line::Assignment(EnvAssignment { key, value }))
    }

    fn error(&self, detail: String) -> AppEnvError {
        AppEnvError::ParseError {
            file: self.file.clone(),
            detail,
        }
    }
}

impl Default for DotenvParser {
    fn default() -> Self {
        Self::new(".env")
    }
}

/// Extract a value from the text after `=`.
///
/// Quoted values are taken verbatim up to the closing quote, so `#` inside
/// quotes is kept. Unquoted values end at the first whitespace followed by
/// `#`, which starts an inline comment.
fn parse_value(s: &str) -> String {
    if let Some(quote) = s.chars().next().filter(|c| *c == '"' || *c == '\'') {
        if let Some(end) = s[1..].find(quote) {
            return s[1..1 + end].to_string();
        }
    }

    let mut prev_is_space = false;
    for (idx, c) in s.char_indices() {
        if c == '#' && prev_is_space {
            return s[..idx].trim_end().to_string();
        }
        prev_is_space = c.is_whitespace();
    }
    s.to_string()
}

impl ConfigParser for DotenvParser {
    fn parse(&self, content: &str) -> Result<EnvFile> {
        let lines = content
            .lines()
            .enumerate()
            .map(|(idx, raw)| self.parse_line(raw, idx + 1))
            .collect::<Result<Vec<_>>>()?;

        Ok(EnvFile { lines })
    }
}
