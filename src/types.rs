/*!
 * Core types and data structures for dirscan
 */

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use strum::Display;

/// A non-directory entry reached by a pruned walk
#[derive(Debug, Clone)]
pub struct WalkEntry {
    /// File name
    pub name: String,
    /// Absolute path on disk
    pub path: PathBuf,
    /// Path relative to the scan root
    pub rel_path: PathBuf,
    /// Depth of the containing directory (root is 0)
    pub depth: usize,
}

/// Indented directory/file listing in traversal order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeListing {
    /// One line per directory or file
    pub lines: Vec<String>,
}

impl fmt::Display for TreeListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// Per-extension file tally
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileCounts {
    counts: BTreeMap<String, usize>,
}

impl FileCounts {
    /// Create an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one file with the given extension key
    pub fn record(&mut self, key: impl Into<String>) {
        *self.counts.entry(key.into()).or_insert(0) += 1;
    }

    /// Number of files seen with the given extension key
    pub fn get(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries ordered by descending count, ties by extension
    pub fn by_count(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> =
            self.counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        entries.sort_by(|(ka, va), (kb, vb)| vb.cmp(va).then_with(|| ka.cmp(kb)));
        entries
    }
}

impl<K: Into<String>> FromIterator<(K, usize)> for FileCounts {
    fn from_iter<I: IntoIterator<Item = (K, usize)>>(iter: I) -> Self {
        let mut counts = FileCounts::new();
        for (key, n) in iter {
            *counts.counts.entry(key.into()).or_insert(0) += n;
        }
        counts
    }
}

/// Coarse label describing what a repository appears to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Identity {
    #[strum(to_string = "Python Package")]
    PythonPackage,
    #[strum(to_string = "Web Project")]
    WebProject,
    #[strum(to_string = "Source Code Repository")]
    SourceRepository,
}

/// Result of the classifying walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Files per extension key
    pub counts: FileCounts,
    /// Number of files visited
    pub total: usize,
    /// Inferred identity label
    pub identity: Identity,
}

/// A file selected for inclusion in the artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedFile {
    /// Path relative to the scan root, used in the section marker
    pub rel_path: PathBuf,
    /// Absolute path the content is read from
    pub path: PathBuf,
}

/// Ordered hygiene findings for a repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticReport {
    /// Whether the version-control metadata directory exists
    pub vcs_present: bool,
    /// Noise directories found at the root
    pub noise: Vec<String>,
    /// Total size in bytes, version-control internals excluded
    pub total_size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_count_orders_descending_then_by_key() {
        let counts: FileCounts = [(".md", 1), (".py", 3), (".css", 1), (".js", 2)]
            .into_iter()
            .collect();
        assert_eq!(
            counts.by_count(),
            vec![(".py", 3), (".js", 2), (".css", 1), (".md", 1)]
        );
        assert_eq!(counts.total(), 7);
    }

    #[test]
    fn test_record_and_get() {
        let mut counts = FileCounts::new();
        assert!(counts.is_empty());
        counts.record(".py");
        counts.record(".py");
        assert_eq!(counts.get(".py"), 2);
        assert_eq!(counts.get(".rs"), 0);
    }

    #[test]
    fn test_identity_display() {
        assert_eq!(Identity::PythonPackage.to_string(), "Python Package");
        assert_eq!(Identity::WebProject.to_string(), "Web Project");
        assert_eq!(
            Identity::SourceRepository.to_string(),
            "Source Code Repository"
        );
    }
}
