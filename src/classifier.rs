/*!
 * Extension tally and identity inference
 */

use std::path::Path;

use crate::types::{Classification, FileCounts, Identity, WalkEntry};
use crate::utils::extension_key;
use crate::walker::{PrunedWalk, Visitor};

/// Predicate over a finished tally
pub type IdentityPredicate = fn(&FileCounts) -> bool;

/// Ordered identity rules; the first matching predicate wins
pub static IDENTITY_RULES: &[(IdentityPredicate, Identity)] = &[
    (has_python_sources, Identity::PythonPackage),
    (is_markup_heavy, Identity::WebProject),
];

/// Markup files needed before a tree counts as a web project
pub const WEB_MARKUP_THRESHOLD: usize = 5;

fn has_python_sources(counts: &FileCounts) -> bool {
    counts.get(".py") > 0
}

fn is_markup_heavy(counts: &FileCounts) -> bool {
    counts.get(".html") + counts.get(".css") > WEB_MARKUP_THRESHOLD
}

/// Apply [`IDENTITY_RULES`] to a tally
pub fn infer_identity(counts: &FileCounts) -> Identity {
    IDENTITY_RULES
        .iter()
        .find(|(matches, _)| matches(counts))
        .map(|(_, identity)| *identity)
        .unwrap_or(Identity::SourceRepository)
}

#[derive(Default)]
struct ExtensionTally {
    counts: FileCounts,
    total: usize,
}

impl Visitor for ExtensionTally {
    fn visit_file(&mut self, entry: &WalkEntry) {
        self.counts.record(extension_key(Path::new(&entry.name)));
        self.total += 1;
    }
}

/// Count files per extension under `root` and infer the repository identity
pub fn classify(root: &Path) -> Classification {
    let mut tally = ExtensionTally::default();
    PrunedWalk::new(root).walk(&mut tally);

    let identity = infer_identity(&tally.counts);
    Classification {
        counts: tally.counts,
        total: tally.total,
        identity,
    }
}

/// Share of `count` in `total`, truncated after the float division; 0 for an empty tree
pub fn percent(count: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0) as usize
}
