use std::io;
use std::path::{Path, PathBuf};

/// Read-only view over the sandbox root.
///
/// Every client-supplied path resolves through this adapter, which re-checks
/// after canonicalization that the result is still inside the root.
#[derive(Debug)]
pub struct FsView {
    root: PathBuf,
}

impl FsView {
    /// Opens the sandbox root. Fails if it does not exist or is not a directory.
    pub fn open(root: impl AsRef<Path>) -> io::Result<Self> {
        let root = root.as_ref().canonicalize()?;
        if !root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a directory", root.display()),
            ));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `target` against `base`.
    ///
    /// `Some` only for an existing directory whose canonical path is still
    /// inside the root; `..` chains that escape the sandbox come back `None`.
    pub fn resolve_dir(&self, base: &Path, target: &str) -> Option<PathBuf> {
        let resolved = base.join(target).canonicalize().ok()?;
        (resolved.is_dir() && resolved.starts_with(&self.root)).then_some(resolved)
    }

    /// Same resolution as `resolve_dir`, but only accepts a regular file.
    pub fn resolve_file(&self, base: &Path, target: &str) -> Option<PathBuf> {
        let resolved = base.join(target).canonicalize().ok()?;
        (resolved.is_file() && resolved.starts_with(&self.root)).then_some(resolved)
    }

    /// Builds the textual listing of a directory.
    ///
    /// Directories render as `>name`, regular files as `name Size: n bytes`,
    /// anything else is skipped. The listing ends with one empty line.
    pub async fn list_directory(&self, dir: &Path) -> io::Result<String> {
        let mut entries = tokio::fs::read_dir(dir).await?;
        let mut listing = String::new();
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name().to_string_lossy().into_owned();
            let metadata = tokio::fs::metadata(entry.path()).await?;
            if metadata.is_dir() {
                listing.push_str(&format!(">{}\r\n", name));
            } else if metadata.is_file() {
                listing.push_str(&format!("{} Size: {} bytes\r\n", name, metadata.len()));
            }
        }
        listing.push_str("\r\n");
        Ok(listing)
    }

    /// Reads the full contents of a file.
    pub async fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }

    /// Renders an absolute in-sandbox path relative to the root, `/`-rooted.
    /// The root itself renders as `/`.
    pub fn display_path(&self, path: &Path) -> String {
        match path.strip_prefix(&self.root) {
            Ok(rel) if rel.as_os_str().is_empty() => String::from("/"),
            Ok(rel) => format!("/{}", rel.display()),
            Err(_) => String::from("/"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (tempfile::TempDir, FsView) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("docs")).unwrap();
        std::fs::write(dir.path().join("a.txt"), b"abc").unwrap();
        std::fs::write(dir.path().join("docs").join("inner.txt"), b"inner").unwrap();
        let view = FsView::open(dir.path()).unwrap();
        (dir, view)
    }

    #[test]
    fn open_rejects_a_missing_or_non_directory_root() {
        assert!(FsView::open("/nonexistent/sandbox/root").is_err());

        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, b"x").unwrap();
        assert!(FsView::open(&file).is_err());
    }

    #[test]
    fn resolves_directories_inside_the_root() {
        let (_dir, view) = fixture();
        let docs = view.resolve_dir(view.root(), "docs").unwrap();
        assert!(docs.ends_with("docs"));
        assert!(view.resolve_dir(view.root(), "a.txt").is_none());
        assert!(view.resolve_dir(view.root(), "missing").is_none());
    }

    #[test]
    fn resolves_regular_files_only() {
        let (_dir, view) = fixture();
        assert!(view.resolve_file(view.root(), "a.txt").is_some());
        assert!(view.resolve_file(view.root(), "docs").is_none());
        assert!(view.resolve_file(view.root(), "missing.txt").is_none());
    }

    #[test]
    fn traversal_cannot_escape_the_root() {
        let (_dir, view) = fixture();
        assert!(view.resolve_dir(view.root(), "..").is_none());
        assert!(view.resolve_dir(view.root(), "docs/../..").is_none());
        assert!(view.resolve_file(view.root(), "../etc/passwd").is_none());
        // Dot-dot chains that stay inside the sandbox are fine.
        assert!(view.resolve_dir(view.root(), "docs/..").is_some());
    }

    #[test]
    fn renders_root_relative_paths() {
        let (_dir, view) = fixture();
        assert_eq!(view.display_path(view.root()), "/");
        let docs = view.resolve_dir(view.root(), "docs").unwrap();
        assert_eq!(view.display_path(&docs), "/docs");
    }

    #[tokio::test]
    async fn lists_directories_and_files() {
        let (_dir, view) = fixture();
        let listing = view.list_directory(view.root()).await.unwrap();
        assert!(listing.contains(">docs\r\n"));
        assert!(listing.contains("a.txt Size: 3 bytes\r\n"));
        assert!(listing.ends_with("\r\n\r\n"));
    }

    #[tokio::test]
    async fn empty_directory_lists_as_a_single_blank_line() {
        let dir = tempfile::tempdir().unwrap();
        let view = FsView::open(dir.path()).unwrap();
        let listing = view.list_directory(view.root()).await.unwrap();
        assert_eq!(listing, "\r\n");
    }

    #[tokio::test]
    async fn reads_file_bytes() {
        let (_dir, view) = fixture();
        let path = view.resolve_file(view.root(), "a.txt").unwrap();
        assert_eq!(view.read_file(&path).await.unwrap(), b"abc");
    }
}
