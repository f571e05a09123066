/*!
 * Pruned directory traversal shared by the tree, classifier and collector
 *
 * Every walk goes through [`PrunedWalk`], so the ignore rules applied to the
 * tree listing are exactly the ones applied to counting and collection.
 */

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::types::{TreeListing, WalkEntry};
use crate::utils::is_ignored_dir;

/// Callbacks invoked by a pruned walk
pub trait Visitor {
    /// Called once per visited directory, before its files
    fn enter_dir(&mut self, _name: &str, _rel_path: &Path, _depth: usize) {}

    /// Called for every non-directory entry
    fn visit_file(&mut self, entry: &WalkEntry);
}

/// Counters collected during a walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Directories visited, root included
    pub dirs: usize,
    /// Files handed to the visitor
    pub files: usize,
    /// Directories pruned by the ignore set
    pub pruned: usize,
    /// Entries skipped because they could not be read
    pub skipped: usize,
}

/// Depth-first walk that never descends into ignored directories
pub struct PrunedWalk {
    root: PathBuf,
}

impl PrunedWalk {
    /// Create a walk rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Walk the tree, feeding every kept entry to `visitor`
    ///
    /// Within a directory, entries are visited in file-name order: the
    /// directory itself, then its files, then each subdirectory recursively.
    /// Unreadable entries are logged and skipped; a directory that cannot be
    /// listed is not reported at all.
    pub fn walk<V: Visitor>(&self, visitor: &mut V) -> WalkStats {
        let mut stats = WalkStats::default();
        let name = root_name(&self.root);
        self.walk_directory(&self.root, Path::new(""), &name, 0, visitor, &mut stats);
        debug!(
            root = %self.root.display(),
            dirs = stats.dirs,
            files = stats.files,
            pruned = stats.pruned,
            skipped = stats.skipped,
            "walk finished"
        );
        stats
    }

    fn walk_directory<V: Visitor>(
        &self,
        abs_path: &Path,
        rel_path: &Path,
        name: &str,
        depth: usize,
        visitor: &mut V,
        stats: &mut WalkStats,
    ) {
        let mut entries: Vec<DirEntry> = Vec::new();
        for entry in WalkDir::new(abs_path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            match entry {
                Ok(entry) => entries.push(entry),
                Err(e) if e.depth() == 0 || e.path() == Some(abs_path) => {
                    // The directory itself cannot be listed: drop it entirely
                    warn!("Skipping unreadable directory {}: {}", abs_path.display(), e);
                    stats.skipped += 1;
                    return;
                }
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", abs_path.display(), e);
                    stats.skipped += 1;
                }
            }
        }

        stats.dirs += 1;
        visitor.enter_dir(name, rel_path, depth);

        // Split into directories and files
        let (dirs, files): (Vec<_>, Vec<_>) =
            entries.into_iter().partition(|e| e.file_type().is_dir());

        // Links to directories are neither followed nor reported as files
        let files = files.into_iter().filter(|e| {
            let linked_dir = e.path_is_symlink() && e.path().is_dir();
            if linked_dir {
                debug!("Not following directory link {}", e.path().display());
            }
            !linked_dir
        });

        for entry in files {
            let entry_name = entry.file_name().to_string_lossy().to_string();
            let walk_entry = WalkEntry {
                rel_path: rel_path.join(&entry_name),
                name: entry_name,
                path: entry.into_path(),
                depth,
            };
            stats.files += 1;
            visitor.visit_file(&walk_entry);
        }

        for entry in dirs {
            let entry_name = entry.file_name().to_string_lossy().to_string();
            if is_ignored_dir(&entry_name) {
                debug!("Pruned {}", entry.path().display());
                stats.pruned += 1;
                continue;
            }
            self.walk_directory(
                entry.path(),
                &rel_path.join(&entry_name),
                &entry_name,
                depth + 1,
                visitor,
                stats,
            );
        }
    }
}

/// Display name of the scan root: its base name, or the full path
fn root_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| root.display().to_string())
}

/// Visitor that renders the indented tree listing
#[derive(Debug, Default)]
pub struct TreeBuilder {
    lines: Vec<String>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> TreeListing {
        TreeListing { lines: self.lines }
    }
}

impl Visitor for TreeBuilder {
    fn enter_dir(&mut self, name: &str, _rel_path: &Path, depth: usize) {
        self.lines.push(format!("{}{}/", "  ".repeat(depth), name));
    }

    fn visit_file(&mut self, entry: &WalkEntry) {
        self.lines
            .push(format!("{}  {}", "  ".repeat(entry.depth), entry.name));
    }
}

/// Build the tree listing for `root`
pub fn build_tree(root: &Path) -> TreeListing {
    let mut builder = TreeBuilder::new();
    PrunedWalk::new(root).walk(&mut builder);
    builder.finish()
}
