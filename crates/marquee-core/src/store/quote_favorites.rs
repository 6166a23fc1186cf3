use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::QUOTE_FAVORITES_FILE;

/// Append-only text file of saved quotes, one block per quote followed by
/// a blank line.
#[derive(Debug, Clone)]
pub struct QuoteFavorites {
    path: PathBuf,
}

impl QuoteFavorites {
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(data_dir: &Path) -> Self {
        Self::at_path(data_dir.join(QUOTE_FAVORITES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `text` and a blank line, creating the file if needed.
    pub fn append(&self, text: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        write!(file, "{text}\n\n")?;
        Ok(())
    }
}
