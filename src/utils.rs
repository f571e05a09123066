/*!
 * Utility functions and fixed rule tables for dirscan
 */

use std::path::Path;

use once_cell::sync::Lazy;

/// Key used for files without an extension
pub const NO_EXTENSION: &str = "noext";

/// Name of the version-control metadata directory
pub const VCS_DIR: &str = ".git";

/// Directory names pruned from every walk
pub static IGNORE_DIRS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        ".git",
        ".venv",
        "venv",
        "__pycache__",
        "build",
        "dist",
        ".egg-info",
        ".mypy_cache",
        ".pytest_cache",
    ]
});

/// Extensions collected in standard mode
pub static SOURCE_EXTS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        ".py", ".js", ".ts", ".html", ".css", ".md", ".json", ".yml", ".yaml", ".toml", ".ini",
        ".sh",
    ]
});

/// Extensions never collected, even in raw mode
pub static BINARY_EXTS: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec![".zip", ".tar", ".gz", ".whl", ".apk", ".exe", ".bin"]);

/// Root-level directories reported as hygiene warnings
pub static NOISE_DIRS: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec!["build", "dist", ".venv", ".git"]);

/// File name prefixes that count as documentation signals
pub static DOC_PREFIXES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "README",
        "LICENSE",
        "LICENCE",
        "CHANGELOG",
        "CONTRIBUTING",
        "CODE_OF_CONDUCT",
    ]
});

/// Whether a directory name is pruned from walks
pub fn is_ignored_dir(name: &str) -> bool {
    IGNORE_DIRS.iter().any(|&d| d == name)
}

/// Lower-cased extension of a path including the leading dot, or `noext`
///
/// Dotfiles such as `.bashrc` have no extension.
pub fn extension_key(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_else(|| NO_EXTENSION.to_string())
}

/// Format a human-readable size, dividing by 1024 per unit
pub fn human_size(size: u64) -> String {
    let mut n = size as f64;
    for unit in ["B", "KB", "MB", "GB"] {
        if n < 1024.0 {
            return format!("{:.1} {}", n, unit);
        }
        n /= 1024.0;
    }
    format!("{:.1} TB", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(0), "0.0 B");
        assert_eq!(human_size(1023), "1023.0 B");
        assert_eq!(human_size(1024), "1.0 KB");
        assert_eq!(human_size(1536), "1.5 KB");
        assert_eq!(human_size(1_048_576), "1.0 MB");
        assert_eq!(human_size(1024 * 1024 * 1024), "1.0 GB");
        assert_eq!(human_size(1024_u64.pow(4) * 3), "3.0 TB");
    }

    #[test]
    fn test_extension_key() {
        assert_eq!(extension_key(Path::new("a/b/main.PY")), ".py");
        assert_eq!(extension_key(Path::new("archive.tar.gz")), ".gz");
        assert_eq!(extension_key(Path::new("Makefile")), NO_EXTENSION);
        assert_eq!(extension_key(Path::new(".bashrc")), NO_EXTENSION);
    }

    #[test]
    fn test_is_ignored_dir() {
        assert!(is_ignored_dir(".git"));
        assert!(is_ignored_dir("__pycache__"));
        assert!(!is_ignored_dir("src"));
        assert!(!is_ignored_dir("builds"));
    }
}
