//! Ignore list: directory names whose contents are collapsed when rendering.

use snafu::{ResultExt, Snafu};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the home directory when no ignore file is given.
pub const DEFAULT_IGNORE_FILE_NAME: &str = ".treeignore";

#[derive(Debug, Snafu)]
pub enum IgnoreFileError {
    #[snafu(display("Failed to read ignore file {}", path.display()))]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Set of bare directory names. Matching is exact and never path-based.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    names: HashSet<String>,
}

impl IgnoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one name per line, skipping empty lines.
    pub fn parse(text: &str) -> Self {
        text.lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect()
    }

    pub fn from_file(path: &Path) -> Result<Self, IgnoreFileError> {
        let text = fs::read_to_string(path).context(ReadSnafu { path })?;
        let set = Self::parse(&text);
        debug!(path = %path.display(), names = set.len(), "loaded ignore file");
        Ok(set)
    }

    /// Load the ignore list for a run.
    ///
    /// An explicit `path` must be readable. Without one, `~/.treeignore` is
    /// used if it exists and an empty set otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, IgnoreFileError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match default_ignore_file() {
            Some(path) if path.is_file() => Self::from_file(&path),
            Some(path) => {
                debug!(path = %path.display(), "no ignore file, nothing ignored");
                Ok(Self::new())
            }
            None => {
                debug!("home directory unknown, nothing ignored");
                Ok(Self::new())
            }
        }
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<String> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

impl Extend<String> for IgnoreSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.names.extend(iter);
    }
}

/// `~/.treeignore`, if a home directory can be determined.
pub fn default_ignore_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DEFAULT_IGNORE_FILE_NAME))
}
