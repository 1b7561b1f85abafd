//! Context types for rule execution.

use std::path::{Path, PathBuf};

/// Context provided to per-file rules.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        // A root that is the file itself strips to an empty path.
        let relative_path = path
            .strip_prefix(root)
            .ok()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| path.to_path_buf(), Path::to_path_buf);

        Self {
            path,
            content,
            relative_path,
        }
    }

    /// Context for in-memory source, as used by tests and editors.
    #[must_use]
    pub fn for_source(name: &'a Path, content: &'a str) -> Self {
        Self {
            path: name,
            content,
            relative_path: name.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_under_root() {
        let ctx = FileContext::new(
            Path::new("/project/Sources/App/View.swift"),
            "",
            Path::new("/project"),
        );
        assert_eq!(ctx.relative_path, PathBuf::from("Sources/App/View.swift"));
    }

    #[test]
    fn test_relative_path_outside_root() {
        let ctx = FileContext::new(Path::new("/elsewhere/a.swift"), "", Path::new("/project"));
        assert_eq!(ctx.relative_path, PathBuf::from("/elsewhere/a.swift"));
    }

    #[test]
    fn test_root_is_the_file() {
        let path = Path::new("/project/Main.swift");
        let ctx = FileContext::new(path, "", path);
        assert_eq!(ctx.relative_path, PathBuf::from("/project/Main.swift"));
    }

    #[test]
    fn test_for_source() {
        let ctx = FileContext::for_source(Path::new("snippet.swift"), "foo(321)");
        assert_eq!(ctx.relative_path, PathBuf::from("snippet.swift"));
        assert_eq!(ctx.content, "foo(321)");
    }
}
