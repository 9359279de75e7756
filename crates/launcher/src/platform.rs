//! Platform-specific executable resolution.
//!
//! macOS applications are `.app` bundle directories; the binary to run
//! lives in `Contents/MacOS`. Every other platform runs the selected file
//! as-is.

use std::path::{Path, PathBuf};

/// Resolves a user-selected path to the file that should be executed.
pub fn resolve_executable(path: &Path) -> PathBuf {
    #[cfg(target_os = "macos")]
    if let Some(inner) = resolve_bundle(path) {
        tracing::debug!(
            bundle = %path.display(),
            executable = %inner.display(),
            "resolved app bundle"
        );
        return inner;
    }

    path.to_path_buf()
}

/// Finds the binary inside a `.app` bundle.
///
/// Prefers `Contents/MacOS/<bundle name>`, falling back to the first
/// regular file in `Contents/MacOS` by name. Returns `None` if `path` is
/// not a bundle directory or the bundle has no binary.
pub fn resolve_bundle(path: &Path) -> Option<PathBuf> {
    if path.extension().and_then(|e| e.to_str()) != Some("app") || !path.is_dir() {
        return None;
    }

    let macos_dir = path.join("Contents").join("MacOS");

    if let Some(stem) = path.file_stem() {
        let named = macos_dir.join(stem);
        if named.is_file() {
            return Some(named);
        }
    }

    let mut binaries: Vec<PathBuf> = std::fs::read_dir(&macos_dir)
        .ok()?
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();

    binaries.sort();
    binaries.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_bundle(root: &Path, name: &str, binaries: &[&str]) -> PathBuf {
        let bundle = root.join(name);
        let macos = bundle.join("Contents").join("MacOS");
        std::fs::create_dir_all(&macos).unwrap();
        for bin in binaries {
            std::fs::write(macos.join(bin), b"").unwrap();
        }
        bundle
    }

    #[test]
    fn bundle_prefers_binary_named_after_bundle() {
        let tmp = tempfile::tempdir().unwrap();
        let bundle = make_bundle(tmp.path(), "Quake.app", &["Helper", "Quake"]);

        assert_eq!(
            resolve_bundle(&bundle),
            Some(bundle.join("Contents/MacOS/Quake"))
        );
    }

    #[test]
    fn bundle_falls_back_to_first_binary() {
        let tmp = tempfile::tempdir().unwrap();
        let bundle = make_bundle(tmp.path(), "Game.app", &["zeta", "alpha"]);

        assert_eq!(
            resolve_bundle(&bundle),
            Some(bundle.join("Contents/MacOS/alpha"))
        );
    }

    #[test]
    fn bundle_skips_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let bundle = make_bundle(tmp.path(), "Game.app", &["run"]);
        std::fs::create_dir(bundle.join("Contents/MacOS/aaa-resources")).unwrap();

        assert_eq!(
            resolve_bundle(&bundle),
            Some(bundle.join("Contents/MacOS/run"))
        );
    }

    #[test]
    fn empty_bundle_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let bundle = make_bundle(tmp.path(), "Empty.app", &[]);
        assert_eq!(resolve_bundle(&bundle), None);
    }

    #[test]
    fn plain_file_is_not_a_bundle() {
        let tmp = tempfile::tempdir().unwrap();
        let exe = tmp.path().join("game.bin");
        std::fs::write(&exe, b"").unwrap();

        assert_eq!(resolve_bundle(&exe), None);
        assert_eq!(resolve_executable(&exe), exe);
    }

    #[test]
    fn app_suffixed_file_is_not_a_bundle() {
        let tmp = tempfile::tempdir().unwrap();
        let exe = tmp.path().join("fake.app");
        std::fs::write(&exe, b"").unwrap();

        assert_eq!(resolve_bundle(&exe), None);
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn executable_resolves_bundle_on_macos() {
        let tmp = tempfile::tempdir().unwrap();
        let bundle = make_bundle(tmp.path(), "Doom.app", &["Doom"]);
        assert_eq!(resolve_executable(&bundle), bundle.join("Contents/MacOS/Doom"));
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn executable_unchanged_elsewhere() {
        let tmp = tempfile::tempdir().unwrap();
        let bundle = make_bundle(tmp.path(), "Doom.app", &["Doom"]);
        assert_eq!(resolve_executable(&bundle), bundle);
    }
}
