//! Configuration warning value object.

use std::fmt;
use std::path::PathBuf;

/// Unknown key found while loading a config file.
///
/// Loading continues; the binary reports these on stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Last segment of the unknown key path
    pub key: String,
    pub file: PathBuf,
    /// 1-indexed line of the first mention, if found
    pub line: Option<usize>,
    /// Closest known key within two edits
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}
