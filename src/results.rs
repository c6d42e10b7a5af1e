//! Append-only log of finished matches, one `Winner: <symbol>` or `Draw` line
//! per match.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::ResultLogError;
use crate::game::GameOutcome;

pub const NO_RESULTS: &str = "No previous results.";

/// Configuration for the result log.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ResultLogConfig {
    pub path: PathBuf,
    /// How many of the most recent results the start screen shows.
    pub display_limit: usize,
}

impl Default for ResultLogConfig {
    fn default() -> Self {
        ResultLogConfig {
            path: PathBuf::from("results.txt"),
            display_limit: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResultLog {
    config: ResultLogConfig,
}

impl ResultLog {
    pub fn new(config: ResultLogConfig) -> Self {
        ResultLog { config }
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Append one finished match.
    pub fn append(&self, outcome: GameOutcome) -> Result<(), ResultLogError> {
        let write_err = |source| ResultLogError::Write {
            path: self.config.path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.config.path)
            .map_err(write_err)?;
        writeln!(file, "{}", outcome.log_line()).map_err(write_err)
    }

    /// The last `display_limit` results, oldest first. A missing file means
    /// no results yet.
    pub fn recent(&self) -> Result<Vec<String>, ResultLogError> {
        let content = match fs::read_to_string(&self.config.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(ResultLogError::Read {
                    path: self.config.path.clone(),
                    source: e,
                })
            }
        };

        let lines: Vec<&str> = content
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect();
        let skip = lines.len().saturating_sub(self.config.display_limit);
        Ok(lines[skip..].iter().map(|line| line.to_string()).collect())
    }

    /// Recent results as display text, or the placeholder when there are none.
    pub fn summary(&self) -> Result<String, ResultLogError> {
        let recent = self.recent()?;
        if recent.is_empty() {
            Ok(NO_RESULTS.to_string())
        } else {
            Ok(recent.join("\n"))
        }
    }
}
