//! Application state

use std::path::Path;

use crate::errors::NavError;
use crate::fs::EntryFilter;
use crate::input::Action;

use super::navigator::{NavWindow, Navigator};

/// Top-level application state. The fatal state is terminal: browsing
/// never resumes after a failed read, the next input exits.
#[derive(Debug)]
pub enum State {
    Browsing(NavWindow),
    Fatal(NavError),
}

/// Main application state
pub struct App {
    navigator: Navigator,
    pub state: State,
    pub should_quit: bool,
}

impl App {
    /// Create the app anchored at `start`. A startup failure lands
    /// directly in the fatal state so the error can be shown before
    /// exit.
    pub fn new(start: &Path, filter: Box<dyn EntryFilter>) -> Self {
        let navigator = Navigator::new(filter);
        let state = match navigator.initialize(start) {
            Ok(window) => State::Browsing(window),
            Err(err) => State::Fatal(err),
        };
        Self {
            navigator,
            state,
            should_quit: false,
        }
    }

    /// Whether the app is in the fatal state.
    pub fn is_fatal(&self) -> bool {
        matches!(self.state, State::Fatal(_))
    }

    /// Dispatch one navigation action. Exactly one navigator operation
    /// runs per action; a failed operation discards the window and
    /// moves to the fatal state.
    pub fn apply(&mut self, action: Action) {
        if self.is_fatal() {
            // Any input acknowledges the error and exits.
            self.should_quit = true;
            return;
        }
        if action == Action::Quit {
            self.should_quit = true;
            return;
        }

        let State::Browsing(window) = std::mem::replace(
            &mut self.state,
            State::Fatal(NavError::Usage), // placeholder, always overwritten
        ) else {
            unreachable!("fatal state handled above");
        };

        let result = match action {
            Action::NextEntry => self.navigator.move_selection(window, 1),
            Action::PrevEntry => self.navigator.move_selection(window, -1),
            Action::Descend => self.navigator.descend(window),
            Action::Ascend => self.navigator.ascend(window),
            Action::Quit => unreachable!("quit handled above"),
        };

        self.state = match result {
            Ok(window) => State::Browsing(window),
            Err(err) => State::Fatal(err),
        };
    }
}
