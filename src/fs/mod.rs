//! Filesystem module

pub mod entry;
pub mod filter;

pub use entry::FileEntry;
pub use filter::{AllFilter, DotFilter, EntryFilter, FilterFn};
