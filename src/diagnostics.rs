/*!
 * Repository hygiene checks
 */

use std::fmt;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::types::DiagnosticReport;
use crate::utils::{human_size, NOISE_DIRS, VCS_DIR};

/// Run all hygiene checks against `root`
pub fn diagnose(root: &Path) -> DiagnosticReport {
    let vcs_present = root.join(VCS_DIR).exists();

    let noise = NOISE_DIRS
        .iter()
        .filter(|name| root.join(name).exists())
        .map(|name| name.to_string())
        .collect();

    DiagnosticReport {
        vcs_present,
        noise,
        total_size: repo_size(root),
    }
}

/// Total size of regular files under `root`, skipping version-control internals
///
/// Unlike the pruned walk this descends into build and cache directories;
/// only `.git` is excluded. Symlinks are not followed.
pub fn repo_size(root: &Path) -> u64 {
    let mut total = 0;
    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || e.file_name() != VCS_DIR);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping entry while sizing {}: {}", root.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        match entry.metadata() {
            Ok(metadata) => total += metadata.len(),
            Err(e) => warn!("Cannot stat {}: {}", entry.path().display(), e),
        }
    }

    debug!(bytes = total, "computed repository size");
    total
}

impl DiagnosticReport {
    /// Findings in report order, one per line
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.noise.len() + 2);
        if self.vcs_present {
            out.push("✔ Git repository detected".to_string());
        } else {
            out.push("✖ Not a git repository".to_string());
        }
        for dir in &self.noise {
            out.push(format!("⚠ Noise: {}", dir));
        }
        out.push(format!("Repo size: {}", human_size(self.total_size)));
        out
    }
}

impl fmt::Display for DiagnosticReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}
