/*!
 * Artifact writer implementation for dirscan
 */

use std::fs;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use indicatif::ProgressBar;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{Result, ResultExt};
use crate::report::ScanReport;
use crate::types::CollectedFile;

/// Placeholder written when a collected file cannot be read
pub const READ_ERROR_MARKER: &str = "[READ ERROR]\n";

const RULE: &str = "========================================";

/// Writes the scan report and collected sources into one text file
pub struct ArtifactWriter {
    /// Writer configuration
    config: Config,
    /// Progress bar advanced once per collected file
    progress: Arc<ProgressBar>,
}

impl ArtifactWriter {
    /// Create a new artifact writer
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self { config, progress }
    }

    /// Final location of the artifact
    pub fn output_path(&self) -> Result<PathBuf> {
        Ok(self
            .config
            .artifact_dir()?
            .join(self.config.artifact_file_name()))
    }

    /// Write the artifact and return its path
    ///
    /// Content goes to a temporary file next to the destination, which is
    /// renamed over the final name only once everything has been flushed.
    pub fn write(&self, report: &ScanReport, files: &[CollectedFile]) -> Result<PathBuf> {
        let out_dir = self.config.artifact_dir()?;
        fs::create_dir_all(&out_dir)
            .with_context(|| format!("Failed to create {}", out_dir.display()))?;
        let out_path = out_dir.join(self.config.artifact_file_name());

        let mut tmp = NamedTempFile::new_in(&out_dir)
            .with_context(|| format!("Failed to create temporary file in {}", out_dir.display()))?;
        debug!("Writing artifact via {}", tmp.path().display());

        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            self.write_header(&mut writer)?;
            self.write_sections(report, &mut writer)?;
            self.write_contents(files, &mut writer)?;
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;

        tmp.persist(&out_path)
            .with_context(|| format!("Failed to move artifact to {}", out_path.display()))?;

        Ok(out_path)
    }

    /// Write the header block
    fn write_header<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "{}", RULE)?;
        writeln!(writer, "ARTIFACT: {}", self.config.repo_name)?;
        writeln!(writer, "MODE: {}", self.config.mode)?;
        if let Some(tag) = self.config.artifact.tag() {
            writeln!(writer, "TAG: {}", tag)?;
        }
        writeln!(writer, "GENERATED: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(writer, "{}\n", RULE)?;
        Ok(())
    }

    /// Write the tree, summary and diagnostics sections
    fn write_sections<W: Write>(&self, report: &ScanReport, writer: &mut W) -> Result<()> {
        writeln!(writer, "TREE\n-----")?;
        writeln!(writer, "{}\n", report.tree)?;

        writeln!(writer, "SUMMARY\n-------")?;
        writeln!(writer, "{}\n", report.summary)?;

        writeln!(writer, "DIAGNOSE\n--------")?;
        writeln!(writer, "{}\n", report.diagnostics)?;
        Ok(())
    }

    /// Write one marker and content block per collected file
    fn write_contents<W: Write>(&self, files: &[CollectedFile], writer: &mut W) -> Result<()> {
        writeln!(writer, "CONTEXT (SOURCE)\n----------------")?;

        self.progress.set_length(files.len() as u64);
        for file in files {
            self.progress
                .set_message(format!("{}", file.rel_path.display()));

            writeln!(writer, "\n=== {} ===", file.rel_path.display())?;
            match fs::read(&file.path) {
                Ok(bytes) => writer.write_all(String::from_utf8_lossy(&bytes).as_bytes())?,
                Err(e) => {
                    warn!("Failed to read {}: {}", file.path.display(), e);
                    writer.write_all(READ_ERROR_MARKER.as_bytes())?;
                }
            }

            self.progress.inc(1);
        }
        Ok(())
    }
}
