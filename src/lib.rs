/*!
 * dirscan - Summarize a directory tree and bundle its sources for review
 *
 * This library walks a repository, reports its structure, file-type
 * composition and hygiene signals, and can concatenate its source files into
 * a single text artifact.
 */

pub mod classifier;
pub mod collector;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod report;
pub mod types;
pub mod utils;
pub mod walker;
pub mod writer;


// Re-export main components for easier access
pub use classifier::{classify, infer_identity};
pub use collector::collect_files;
pub use config::{ArtifactMode, CollectMode, Config};
pub use diagnostics::diagnose;
pub use error::{DirScanError, Result};
pub use report::{doc_signals, render_summary, ScanReport};
pub use types::{Classification, CollectedFile, DiagnosticReport, FileCounts, Identity, TreeListing};
pub use utils::human_size;
pub use walker::{build_tree, PrunedWalk, Visitor};
pub use writer::ArtifactWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the tree, classification and diagnostics passes for `config`
pub fn scan(config: &Config) -> ScanReport {
    let tree = build_tree(&config.root);
    let classification = classify(&config.root);
    let summary = render_summary(&classification, &doc_signals(&config.root));
    let diagnostics = diagnose(&config.root);

    ScanReport {
        tree,
        summary,
        diagnostics,
    }
}
