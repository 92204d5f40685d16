//! Runtime options
//!
//! All configuration comes from the command line; nothing is persisted.

use std::path::PathBuf;

use crate::errors::{NavError, NavResult};

/// Options parsed from the command line.
#[derive(Debug, Clone)]
pub struct Options {
    /// Directory to start browsing in (defaults to the current one)
    pub start_path: PathBuf,
    /// Show entries whose name starts with a dot
    pub show_hidden: bool,
}

impl Options {
    /// Parse process arguments (excluding the program name).
    ///
    /// At most one positional argument is accepted; `-a`/`--all`
    /// toggles hidden entries.
    pub fn parse<I>(args: I) -> NavResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut start_path = None;
        let mut show_hidden = false;

        for arg in args {
            match arg.as_str() {
                "-a" | "--all" => show_hidden = true,
                flag if flag.starts_with('-') => {
                    return Err(NavError::UnknownOption(arg));
                }
                _ => {
                    if start_path.is_some() {
                        return Err(NavError::Usage);
                    }
                    start_path = Some(PathBuf::from(arg));
                }
            }
        }

        Ok(Self {
            start_path: start_path.unwrap_or_else(|| PathBuf::from(".")),
            show_hidden,
        })
    }

    /// Parse the real process arguments.
    pub fn from_env() -> NavResult<Self> {
        Self::parse(std::env::args().skip(1))
    }
}
