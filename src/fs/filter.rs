//! Entry visibility filters
//!
//! A filter decides whether a raw directory entry is visible to
//! navigation. Filters are pure predicates over (containing directory,
//! entry) and compose by logical AND, so new predicates can be added
//! without touching the navigator.

use std::path::Path;

use super::FileEntry;

/// Predicate deciding whether a directory entry is visible.
pub trait EntryFilter {
    fn should_include(&self, dir: &Path, entry: &FileEntry) -> bool;
}

/// The standard filter: hide dotfiles unless `include_hidden` is set.
#[derive(Clone, Copy, Debug, Default)]
pub struct DotFilter {
    pub include_hidden: bool,
}

impl EntryFilter for DotFilter {
    fn should_include(&self, _dir: &Path, entry: &FileEntry) -> bool {
        self.include_hidden || !entry.name.starts_with('.')
    }
}

/// Adapter turning any closure into a filter.
#[allow(dead_code)]
pub struct FilterFn<F>(pub F);

impl<F> EntryFilter for FilterFn<F>
where
    F: Fn(&Path, &FileEntry) -> bool,
{
    fn should_include(&self, dir: &Path, entry: &FileEntry) -> bool {
        (self.0)(dir, entry)
    }
}

/// AND-combinator: an entry is visible only if every inner filter
/// accepts it. An empty list accepts everything.
#[allow(dead_code)]
pub struct AllFilter(pub Vec<Box<dyn EntryFilter>>);

impl EntryFilter for AllFilter {
    fn should_include(&self, dir: &Path, entry: &FileEntry) -> bool {
        self.0.iter().all(|f| f.should_include(dir, entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> FileEntry {
        FileEntry {
            name: name.to_string(),
            is_dir: false,
            is_symlink: false,
        }
    }

    #[test]
    fn test_dot_filter_hides_dotfiles() {
        let filter = DotFilter {
            include_hidden: false,
        };
        let dir = Path::new("/tmp");
        assert!(!filter.should_include(dir, &entry(".git")));
        assert!(filter.should_include(dir, &entry("src")));
    }

    #[test]
    fn test_dot_filter_include_hidden_passes_everything() {
        let filter = DotFilter {
            include_hidden: true,
        };
        let dir = Path::new("/tmp");
        assert!(filter.should_include(dir, &entry(".git")));
        assert!(filter.should_include(dir, &entry("src")));
    }

    #[test]
    fn test_all_filter_is_logical_and() {
        let combined = AllFilter(vec![
            Box::new(DotFilter {
                include_hidden: false,
            }),
            Box::new(FilterFn(|_: &Path, e: &FileEntry| !e.name.ends_with('~'))),
        ]);
        let dir = Path::new("/tmp");
        assert!(combined.should_include(dir, &entry("notes.txt")));
        assert!(!combined.should_include(dir, &entry(".hidden")));
        assert!(!combined.should_include(dir, &entry("notes.txt~")));
    }

    #[test]
    fn test_empty_all_filter_passes_everything() {
        let combined = AllFilter(Vec::new());
        assert!(combined.should_include(Path::new("/"), &entry(".anything")));
    }
}
