//! Path normalization shared by the option normalizer and the build context.

use std::path::{Path, PathBuf};

use path_clean::PathClean;

/// Clean `.` / `..` segments and render separators as `/`.
///
/// Trailing separators are dropped, except for a bare filesystem root.
pub fn normalize_path(path: impl AsRef<Path>) -> PathBuf {
    let cleaned = path.as_ref().to_path_buf().clean();
    if cfg!(windows) {
        PathBuf::from(cleaned.to_string_lossy().replace('\\', "/"))
    } else {
        cleaned
    }
}

/// Resolve `path` against `root` and make the result absolute.
///
/// Absolute inputs are only cleaned. A relative `root` is anchored at the
/// process working directory.
pub fn resolve(root: impl AsRef<Path>, path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        return normalize_path(path);
    }
    absolutize(root.as_ref().join(path))
}

fn absolutize(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return normalize_path(path);
    }

    match std::env::current_dir() {
        Ok(cwd) => normalize_path(cwd.join(path)),
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "current directory unavailable, keeping path relative"
            );
            normalize_path(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_removes_dot_segments() {
        assert_eq!(
            normalize_path("/app/./src/../src/routes/"),
            PathBuf::from("/app/src/routes")
        );
    }

    #[test]
    fn normalize_keeps_root() {
        assert_eq!(normalize_path("/"), PathBuf::from("/"));
    }

    #[test]
    fn resolve_relative_against_root() {
        assert_eq!(resolve("/app", "pages"), PathBuf::from("/app/pages"));
        assert_eq!(resolve("/app", "../pages"), PathBuf::from("/pages"));
    }

    #[test]
    fn resolve_absolute_ignores_root() {
        assert_eq!(resolve("/app", "/srv/routes/"), PathBuf::from("/srv/routes"));
    }

    #[test]
    fn resolve_relative_root_is_anchored_at_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(
            resolve("project", "src/routes"),
            normalize_path(cwd.join("project/src/routes"))
        );
    }
}
