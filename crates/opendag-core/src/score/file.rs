use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::entry::format_entry;
use super::ledger::Ledger;
use crate::error::Result;

/// Score file used when none is given, relative to the working directory
pub const DEFAULT_SCORE_FILE: &str = "scores.txt";

/// Append-only text file holding one `M:SS - name` line per entry
pub struct ScoreFile {
    path: PathBuf,
}

impl ScoreFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file empty if it does not exist yet.
    ///
    /// Returns `true` when the file was created.
    pub fn ensure_exists(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        File::create(&self.path)?;
        debug!("Created empty score file {:?}", self.path);
        Ok(true)
    }

    /// Sort `ledger` longest time first, then append one line per entry.
    ///
    /// Existing lines are left untouched.
    pub fn save(&self, ledger: &mut Ledger) -> Result<()> {
        self.ensure_exists()?;
        ledger.sort_by_time_desc();

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        for entry in ledger.iter() {
            writeln!(file, "{}", format_entry(entry))?;
        }

        debug!("Appended {} scores to {:?}", ledger.len(), self.path);
        Ok(())
    }

    /// Truncate the file to zero length, creating it if absent.
    pub fn clear(&self) -> Result<()> {
        File::create(&self.path)?;
        debug!("Cleared score file {:?}", self.path);
        Ok(())
    }
}
