/*!
 * Configuration handling for dirscan
 */

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use clap_complete::Shell;
use strum::Display;

use crate::error::{DirScanError, Result};
use crate::{ensure, error};

/// Which files have their contents collected into the artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum CollectMode {
    /// Only source extensions
    #[default]
    Standard,
    /// Everything except binary extensions
    Raw,
}

impl CollectMode {
    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Raw)
    }
}

/// Whether an artifact is written, and how its file name is tagged
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ArtifactMode {
    /// Print to the terminal only
    #[default]
    NoArtifact,
    /// Write an artifact without a tag
    Untagged,
    /// Write an artifact whose file name carries the tag
    Tagged(String),
}

impl ArtifactMode {
    /// Decode the `--artifact` flag: absent, bare, or with a value
    pub fn from_flag(flag: Option<String>) -> Self {
        match flag {
            None => Self::NoArtifact,
            Some(tag) if tag.trim().is_empty() => Self::Untagged,
            Some(tag) => Self::Tagged(tag.trim().to_string()),
        }
    }

    pub fn is_requested(&self) -> bool {
        !matches!(self, Self::NoArtifact)
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Tagged(tag) => Some(tag),
            _ => None,
        }
    }
}

/// Command-line arguments for dirscan
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "dirscan",
    version = env!("CARGO_PKG_VERSION"),
    about = "Summarize a directory tree and bundle its sources into a review artifact",
    long_about = "Prints the directory tree, file-type composition and hygiene checks of a repository. With --artifact, also writes a single text file containing the report and the contents of its source files."
)]
pub struct Args {
    /// Directory to scan
    #[clap(default_value = ".")]
    pub path: String,

    /// Write an artifact file, optionally tagging its name
    #[clap(
        short = 'i',
        long = "artifact",
        value_name = "TAG",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub artifact: Option<String>,

    /// Collect every non-binary file, not only source extensions
    #[clap(short = 'r', long)]
    pub raw: bool,

    /// Directory artifacts are written under (default: ~/storage/downloads/Scan)
    #[clap(long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Enable debug logging
    #[clap(short = 'v', long)]
    pub verbose: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Absolute root of every walk
    pub root: PathBuf,

    /// Last segment of the root, used to name the artifact
    pub repo_name: String,

    /// Artifact request decoded from the command line
    pub artifact: ArtifactMode,

    /// Collection mode
    pub mode: CollectMode,

    /// Override for the artifact output root
    pub output_root: Option<PathBuf>,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Result<Self> {
        let root = fs::canonicalize(&args.path)
            .map_err(|_| DirScanError::PathNotFound(PathBuf::from(&args.path)))?;

        Ok(Self {
            repo_name: repo_name(&root),
            root,
            artifact: ArtifactMode::from_flag(args.artifact),
            mode: if args.raw {
                CollectMode::Raw
            } else {
                CollectMode::Standard
            },
            output_root: args.output_dir.map(PathBuf::from),
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.root.is_dir(),
            Config,
            "Target is not a directory: {}",
            self.root.display()
        );

        if let Some(tag) = self.artifact.tag() {
            ensure!(
                !tag.contains(['/', '\\']),
                Config,
                "Artifact tag must not contain path separators: {}",
                tag
            );
        }

        Ok(())
    }

    /// Directory the artifact for this repository is written into
    pub fn artifact_dir(&self) -> Result<PathBuf> {
        let base = match &self.output_root {
            Some(dir) => dir.clone(),
            None => default_output_root()?,
        };
        Ok(base.join(&self.repo_name))
    }

    /// Artifact file name: `scan[-raw][-<tag>]-<repo>.txt`
    pub fn artifact_file_name(&self) -> String {
        let mut name = String::from("scan");
        if self.mode.is_raw() {
            name.push_str("-raw");
        }
        if let Some(tag) = self.artifact.tag() {
            name.push('-');
            name.push_str(tag);
        }
        name.push_str(&format!("-{}.txt", self.repo_name));
        name
    }
}

/// `~/storage/downloads/Scan`
pub fn default_output_root() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| error!(Config, "Could not determine home directory"))?;
    Ok(home.join("storage").join("downloads").join("Scan"))
}

/// Repository name derived from the last path segment
fn repo_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "root".to_string())
}
