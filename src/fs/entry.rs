//! File entry representation

use std::fs;
use std::io;

/// Represents a single file or directory entry, as seen in a listing.
#[derive(Clone, Debug)]
pub struct FileEntry {
    /// File/directory name (not full path)
    pub name: String,
    /// Whether this is a directory (for symlinks, whether the target is)
    pub is_dir: bool,
    /// Whether this is a symbolic link
    pub is_symlink: bool,
}

impl FileEntry {
    /// Create a FileEntry from a raw directory entry.
    ///
    /// A symlink counts as a directory when its target resolves to one,
    /// so it can be descended into; broken links are plain entries.
    pub fn from_dir_entry(entry: &fs::DirEntry) -> io::Result<Self> {
        let name = entry.file_name().to_string_lossy().into_owned();
        let file_type = entry.file_type()?;

        let is_symlink = file_type.is_symlink();
        let is_dir = if is_symlink {
            fs::metadata(entry.path())
                .map(|m| m.is_dir())
                .unwrap_or(false)
        } else {
            file_type.is_dir()
        };

        Ok(Self {
            name,
            is_dir,
            is_symlink,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_named(dir: &std::path::Path, name: &str) -> FileEntry {
        let raw = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap())
            .find(|e| e.file_name().to_string_lossy() == name)
            .unwrap();
        FileEntry::from_dir_entry(&raw).unwrap()
    }

    #[test]
    fn test_file_and_dir_flags() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("plain.txt"), b"x").unwrap();

        let sub = entry_named(tmp.path(), "sub");
        assert!(sub.is_dir);
        assert!(!sub.is_symlink);

        let plain = entry_named(tmp.path(), "plain.txt");
        assert!(!plain.is_dir);
        assert_eq!(plain.name, "plain.txt");
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_directory_counts_as_directory() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("target")).unwrap();
        std::os::unix::fs::symlink(tmp.path().join("target"), tmp.path().join("link")).unwrap();

        let link = entry_named(tmp.path(), "link");
        assert!(link.is_symlink);
        assert!(link.is_dir);
    }

    #[cfg(unix)]
    #[test]
    fn test_broken_symlink_is_plain_entry() {
        let tmp = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(tmp.path().join("gone"), tmp.path().join("dangling")).unwrap();

        let link = entry_named(tmp.path(), "dangling");
        assert!(link.is_symlink);
        assert!(!link.is_dir);
    }
}
