/*!
 * Summary rendering for dirscan
 *
 * Produces the plain-text summary shared by the terminal view and the
 * artifact: identity, language composition and documentation signals.
 */

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::classifier::percent;
use crate::types::{Classification, DiagnosticReport, TreeListing};
use crate::utils::DOC_PREFIXES;

/// Everything reported about a scanned tree
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Indented tree listing
    pub tree: TreeListing,
    /// Rendered summary text
    pub summary: String,
    /// Hygiene findings
    pub diagnostics: DiagnosticReport,
}

impl ScanReport {
    /// Terminal rendering: tree, summary, then diagnostics
    pub fn render_terminal(&self) -> String {
        format!(
            "{}\n{}\n\nDIAGNOSE:\n{}",
            self.tree, self.summary, self.diagnostics
        )
    }

    /// Print the report to stdout
    pub fn print(&self) {
        println!("{}", self.render_terminal());
    }
}

/// Render the summary section
pub fn render_summary(classification: &Classification, doc_signals: &[String]) -> String {
    let mut out = String::new();
    out.push_str("# =============================================\n");
    out.push_str("# DIRSCAN SUMMARY\n");
    out.push_str("# =============================================\n\n");

    out.push_str("Identity:\n");
    out.push_str(&format!("- {}\n\n", classification.identity));

    out.push_str("Language Composition:\n");
    if classification.total == 0 {
        out.push_str("- no files found\n");
    } else {
        for (ext, count) in classification.counts.by_count() {
            out.push_str(&format!(
                "- {:8} : {} files ({}%)\n",
                ext,
                count,
                percent(count, classification.total)
            ));
        }
    }

    out.push_str("\nDocumentation Signals:");
    if doc_signals.is_empty() {
        out.push_str("\n- none found");
    }
    for name in doc_signals {
        out.push_str(&format!("\n- {}", name));
    }
    out
}

/// Root-level documentation files, sorted by name
pub fn doc_signals(root: &Path) -> Vec<String> {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Cannot list {}: {}", root.display(), e);
            return Vec::new();
        }
    };

    let mut found: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map_or(false, |ft| ft.is_file()))
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .filter(|name| is_doc_file(name))
        .collect();
    found.sort();
    found
}

fn is_doc_file(name: &str) -> bool {
    let upper = name.to_uppercase();
    DOC_PREFIXES.iter().any(|prefix| upper.starts_with(prefix))
}
