//! Navigation state machine
//!
//! The navigator owns a three-level window onto the filesystem tree:
//! the parent directory's listing, the current directory's listing with
//! a cursor, and a preview of the selected subdirectory. Every
//! operation rebuilds the affected levels with fresh reads, so the
//! window always reflects the filesystem at the time of the last
//! action. Operations take the window by value and return a new one;
//! a failed read consumes the window, so callers never observe a
//! half-updated state.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::errors::{NavError, NavResult};
use crate::fs::{EntryFilter, FileEntry};

/// A snapshot of one directory's filtered listing plus its path.
///
/// Entries are in directory-read order, not sorted. Rebuilt wholesale
/// on every navigation action, never patched in place.
#[derive(Debug)]
pub struct DirectoryLevel {
    pub path: PathBuf,
    pub entries: Vec<FileEntry>,
}

impl DirectoryLevel {
    /// Full path of the entry at `index`.
    pub fn entry_path(&self, index: usize) -> PathBuf {
        self.path.join(&self.entries[index].name)
    }
}

/// The three visible levels plus selection state.
#[derive(Debug)]
pub struct NavWindow {
    /// Listing of the current path's parent; absent at filesystem root
    pub parent: Option<DirectoryLevel>,
    /// Listing of the current path
    pub current: DirectoryLevel,
    /// Listing of the selected entry, when it is a directory
    pub child: Option<DirectoryLevel>,
    /// Cursor position in `current.entries` (0 and meaningless when empty)
    pub selected: usize,
    /// Index in `parent.entries` of the entry named like the current
    /// path's base name, used to restore the cursor on ascend
    pub parent_selected: usize,
}

impl NavWindow {
    /// The entry under the cursor, if the current level is non-empty.
    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.current.entries.get(self.selected)
    }
}

/// Owns the entry filter and performs all directory reads.
pub struct Navigator {
    filter: Box<dyn EntryFilter>,
}

impl Navigator {
    pub fn new(filter: Box<dyn EntryFilter>) -> Self {
        Self { filter }
    }

    /// Build the initial window for `start`.
    ///
    /// Resolves the path to an absolute one without touching the
    /// filesystem, then stats it: a missing path is `NotFound`, a
    /// non-directory is `NotADirectory`.
    pub fn initialize(&self, start: &Path) -> NavResult<NavWindow> {
        let path = std::path::absolute(start).map_err(|e| NavError::read(start, e))?;
        let meta = fs::metadata(&path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                NavError::NotFound(path.clone())
            } else {
                NavError::read(&path, e)
            }
        })?;
        if !meta.is_dir() {
            return Err(NavError::NotADirectory(path));
        }
        self.rebuild(path, 0)
    }

    /// Move the cursor by `delta` entries, wrapping around both ends.
    ///
    /// No-op on an empty level. The child level is re-read because the
    /// selected entry changed; the parent level is untouched.
    pub fn move_selection(&self, mut window: NavWindow, delta: isize) -> NavResult<NavWindow> {
        let len = window.current.entries.len();
        if len == 0 {
            return Ok(window);
        }
        window.selected = (window.selected as isize + delta).rem_euclid(len as isize) as usize;
        window.child = self.read_child(&window.current, window.selected)?;
        Ok(window)
    }

    /// Enter the selected subdirectory.
    ///
    /// No-op when the level is empty or the selection is not a
    /// directory. The new window is built from scratch; if the entry
    /// vanished since the listing, the read error surfaces rather than
    /// being skipped.
    pub fn descend(&self, window: NavWindow) -> NavResult<NavWindow> {
        match window.selected_entry() {
            Some(entry) if entry.is_dir => {
                let next = window.current.entry_path(window.selected);
                self.rebuild(next, 0)
            }
            _ => Ok(window),
        }
    }

    /// Leave the current directory, landing the cursor back on it.
    ///
    /// No-op at filesystem root.
    pub fn ascend(&self, window: NavWindow) -> NavResult<NavWindow> {
        match &window.parent {
            Some(parent) => self.rebuild(parent.path.clone(), window.parent_selected),
            None => Ok(window),
        }
    }

    /// Build a complete window anchored at `path` with the cursor at
    /// `selected`, re-reading all three levels.
    fn rebuild(&self, path: PathBuf, selected: usize) -> NavResult<NavWindow> {
        let current = self.read_level(&path)?;

        // The directory may have shrunk since the index was taken.
        let selected = if current.entries.is_empty() {
            0
        } else {
            selected.min(current.entries.len() - 1)
        };

        let (parent, parent_selected) = match path.parent() {
            Some(parent_path) => {
                let level = self.read_level(parent_path)?;
                let base = path.file_name().map(|n| n.to_string_lossy());
                let index = base
                    .and_then(|name| level.entries.iter().position(|e| e.name == name))
                    .unwrap_or(0);
                (Some(level), index)
            }
            None => (None, 0),
        };

        let child = self.read_child(&current, selected)?;

        Ok(NavWindow {
            parent,
            current,
            child,
            selected,
            parent_selected,
        })
    }

    /// Read the preview level for the selection, if it is a directory.
    fn read_child(
        &self,
        current: &DirectoryLevel,
        selected: usize,
    ) -> NavResult<Option<DirectoryLevel>> {
        match current.entries.get(selected) {
            Some(entry) if entry.is_dir => {
                Ok(Some(self.read_level(&current.entry_path(selected))?))
            }
            _ => Ok(None),
        }
    }

    /// List `path` through the filter, preserving read order.
    ///
    /// Any failure aborts the whole read; partial levels are never
    /// exposed.
    fn read_level(&self, path: &Path) -> NavResult<DirectoryLevel> {
        let mut entries = Vec::new();
        for raw in fs::read_dir(path).map_err(|e| NavError::read(path, e))? {
            let raw = raw.map_err(|e| NavError::read(path, e))?;
            let entry = FileEntry::from_dir_entry(&raw).map_err(|e| NavError::read(path, e))?;
            if self.filter.should_include(path, &entry) {
                entries.push(entry);
            }
        }
        Ok(DirectoryLevel {
            path: path.to_path_buf(),
            entries,
        })
    }
}
