use std::{
    io,
    path::{Path, PathBuf},
};

/// File-system operations the generators depend on.
///
/// Paths are project-relative; implementations decide what they are relative to.
pub trait FileSystem {
    /// Check if a file or directory exists at the given path
    fn exists(&self, path: &Path) -> bool;

    /// Read a file as UTF-8 text
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write a file, creating parent directories as needed
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Remove a file or a directory tree. Returns `false` if nothing was there.
    fn remove(&self, path: &Path) -> io::Result<bool>;

    /// Create a directory and its parents
    fn create_dir(&self, path: &Path) -> io::Result<()>;
}

/// [`FileSystem`] backed by the local disk, resolving paths against a project root.
#[derive(Debug, Clone)]
pub struct LocalFs {
    root: PathBuf,
}

impl LocalFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        // symlink_metadata so dangling links still count as taken
        std::fs::symlink_metadata(self.resolve(path)).is_ok()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(self.resolve(path))
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        let path = self.resolve(path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
    }

    fn remove(&self, path: &Path) -> io::Result<bool> {
        let path = self.resolve(path);
        let metadata = match std::fs::symlink_metadata(&path) {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(e),
        };

        if metadata.is_dir() {
            std::fs::remove_dir_all(&path)?;
        } else {
            std::fs::remove_file(&path)?;
        }
        Ok(true)
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(self.resolve(path))
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite
    Always,
    /// Only create if file doesn't exist (generated entities, which users edit)
    IfMissing,
}

/// A file to be written through a [`FileSystem`]
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    overwrite: Overwrite,
}

impl File {
    /// Create a new file with the given path and content (default: always overwrite)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            overwrite: Overwrite::Always,
        }
    }

    /// Create a file that is only written when nothing exists at its path.
    pub fn create_once(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
            ..Self::new(path, content)
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the file according to its overwrite rule
    pub fn write(&self, fs: &dyn FileSystem) -> io::Result<WriteResult> {
        match self.overwrite {
            Overwrite::Always => {
                fs.write(&self.path, &self.content)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if fs.exists(&self.path) {
                    Ok(WriteResult::Skipped)
                } else {
                    fs.write(&self.path, &self.content)?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let local = LocalFs::new(temp.path());

        local
            .write(Path::new("./a/b/c/test.txt"), "nested")
            .unwrap();

        let path = temp.path().join("a/b/c/test.txt");
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_exists_and_read() {
        let temp = TempDir::new().unwrap();
        let local = LocalFs::new(temp.path());

        assert!(!local.exists(Path::new("test.txt")));
        fs::write(temp.path().join("test.txt"), "content").unwrap();
        assert!(local.exists(Path::new("test.txt")));
        assert_eq!(
            local.read_to_string(Path::new("test.txt")).unwrap(),
            "content"
        );
    }

    #[test]
    fn test_remove_file_and_directory() {
        let temp = TempDir::new().unwrap();
        let local = LocalFs::new(temp.path());

        local.write(Path::new("dir/inner/file.js"), "x").unwrap();
        local.write(Path::new("single.js"), "y").unwrap();

        assert!(local.remove(Path::new("single.js")).unwrap());
        assert!(local.remove(Path::new("dir")).unwrap());
        assert!(!temp.path().join("single.js").exists());
        assert!(!temp.path().join("dir").exists());
    }

    #[test]
    fn test_remove_missing_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        let local = LocalFs::new(temp.path());

        assert!(!local.remove(Path::new("nothing/here.js")).unwrap());
    }

    #[test]
    fn test_create_dir_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let local = LocalFs::new(temp.path());

        local.create_dir(Path::new("src/modules/core")).unwrap();
        local.create_dir(Path::new("src/modules/core")).unwrap();
        assert!(temp.path().join("src/modules/core").is_dir());
    }

    #[test]
    fn test_file_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let local = LocalFs::new(temp.path());
        fs::write(temp.path().join("test.txt"), "original").unwrap();

        let result = File::new("test.txt", "updated").write(&local).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("test.txt")).unwrap(),
            "updated"
        );
    }

    #[test]
    fn test_file_create_once_skips_existing() {
        let temp = TempDir::new().unwrap();
        let local = LocalFs::new(temp.path());
        fs::write(temp.path().join("existing.txt"), "original").unwrap();

        let result = File::create_once("existing.txt", "should not write")
            .write(&local)
            .unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(
            fs::read_to_string(temp.path().join("existing.txt")).unwrap(),
            "original"
        );
    }

    #[test]
    fn test_file_create_once_creates_new() {
        let temp = TempDir::new().unwrap();
        let local = LocalFs::new(temp.path());

        let result = File::create_once("new.txt", "new content")
            .write(&local)
            .unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("new.txt")).unwrap(),
            "new content"
        );
    }
}
