/*!
 * Selection of files whose contents go into the artifact
 */

use std::path::Path;

use tracing::debug;

use crate::types::{CollectedFile, WalkEntry};
use crate::utils::{extension_key, BINARY_EXTS, SOURCE_EXTS};
use crate::walker::{PrunedWalk, Visitor};

/// Whether a file with the given extension key is collected
///
/// Binary extensions are always rejected; in standard mode only source
/// extensions are accepted.
pub fn should_collect(ext: &str, raw: bool) -> bool {
    if BINARY_EXTS.iter().any(|&b| b == ext) {
        return false;
    }
    raw || SOURCE_EXTS.iter().any(|&s| s == ext)
}

struct Collector {
    raw: bool,
    files: Vec<CollectedFile>,
}

impl Visitor for Collector {
    fn visit_file(&mut self, entry: &WalkEntry) {
        let ext = extension_key(Path::new(&entry.name));
        if !should_collect(&ext, self.raw) {
            debug!("Not collecting {}", entry.rel_path.display());
            return;
        }
        self.files.push(CollectedFile {
            rel_path: entry.rel_path.clone(),
            path: entry.path.clone(),
        });
    }
}

/// Collect files under `root` in walk order
pub fn collect_files(root: &Path, raw: bool) -> Vec<CollectedFile> {
    let mut collector = Collector {
        raw,
        files: Vec::new(),
    };
    PrunedWalk::new(root).walk(&mut collector);
    collector.files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn setup() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::create_dir_all(root.join("dist")).unwrap();
        fs::write(root.join("main.py"), "print(1)").unwrap();
        fs::write(root.join("notes.txt"), "hi").unwrap();
        fs::write(root.join("bundle.ZIP"), [0u8, 1]).unwrap();
        fs::write(root.join("Dockerfile"), "FROM x").unwrap();
        fs::write(root.join("src/app.ts"), "let a").unwrap();
        fs::write(root.join("src/tool.exe"), [0u8]).unwrap();
        fs::write(root.join("dist/app.js"), "built").unwrap();
        dir
    }

    fn rel_paths(files: &[CollectedFile]) -> Vec<PathBuf> {
        files.iter().map(|f| f.rel_path.clone()).collect()
    }

    #[test]
    fn test_standard_mode_uses_allow_list() {
        let dir = setup();
        let files = collect_files(dir.path(), false);
        assert_eq!(
            rel_paths(&files),
            vec![PathBuf::from("main.py"), PathBuf::from("src/app.ts")]
        );
        assert_eq!(files[0].path, dir.path().join("main.py"));
    }

    #[test]
    fn test_raw_mode_keeps_everything_but_binaries() {
        let dir = setup();
        let files = collect_files(dir.path(), true);
        assert_eq!(
            rel_paths(&files),
            vec![
                PathBuf::from("Dockerfile"),
                PathBuf::from("main.py"),
                PathBuf::from("notes.txt"),
                PathBuf::from("src/app.ts"),
            ]
        );
    }

    #[test]
    fn test_should_collect() {
        assert!(should_collect(".py", false));
        assert!(!should_collect(".rs", false));
        assert!(should_collect(".rs", true));
        assert!(!should_collect(".gz", true));
        assert!(!should_collect(".exe", false));
        assert!(should_collect("noext", true));
    }
}
