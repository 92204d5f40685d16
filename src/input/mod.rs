//! Input handling
//!
//! Raw key events are mapped to named navigation actions through a
//! static key-binding table. The navigator never sees key events; the
//! table is the only place that knows about keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::state::App;

/// A named navigation operation, one per user action.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    NextEntry,
    PrevEntry,
    Descend,
    Ascend,
    Quit,
}

/// Static mapping from key events to actions.
pub struct Keymap {
    bindings: Vec<(KeyCode, KeyModifiers, Action)>,
}

impl Default for Keymap {
    fn default() -> Self {
        use Action::*;
        use KeyCode::*;
        let none = KeyModifiers::NONE;
        Self {
            bindings: vec![
                (Char('j'), none, NextEntry),
                (Down, none, NextEntry),
                (Char('k'), none, PrevEntry),
                (Up, none, PrevEntry),
                (Char('l'), none, Descend),
                (Right, none, Descend),
                (Enter, none, Descend),
                (Char('h'), none, Ascend),
                (Left, none, Ascend),
                (Char('q'), none, Quit),
                (Esc, none, Quit),
                (Char('c'), KeyModifiers::CONTROL, Quit),
            ],
        }
    }
}

impl Keymap {
    /// Look up the action bound to a key event, if any.
    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(code, mods, _)| *code == key.code && *mods == key.modifiers)
            .map(|(_, _, action)| *action)
    }
}

/// Handle a key event: press events only, one action per event.
pub fn handle_key(app: &mut App, keymap: &Keymap, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if app.is_fatal() {
        // Any key acknowledges the error screen.
        app.apply(Action::Quit);
        return;
    }
    if let Some(action) = keymap.action_for(&key) {
        app.apply(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_default_bindings() {
        let keymap = Keymap::default();
        assert_eq!(keymap.action_for(&press(KeyCode::Char('j'))), Some(Action::NextEntry));
        assert_eq!(keymap.action_for(&press(KeyCode::Up)), Some(Action::PrevEntry));
        assert_eq!(keymap.action_for(&press(KeyCode::Enter)), Some(Action::Descend));
        assert_eq!(keymap.action_for(&press(KeyCode::Char('h'))), Some(Action::Ascend));
        assert_eq!(keymap.action_for(&press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(
            keymap.action_for(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_unbound_keys_map_to_nothing() {
        let keymap = Keymap::default();
        assert_eq!(keymap.action_for(&press(KeyCode::Char('z'))), None);
        assert_eq!(keymap.action_for(&press(KeyCode::F(1))), None);
    }

    #[test]
    fn test_modifier_must_match() {
        let keymap = Keymap::default();
        let ctrl_j = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::CONTROL);
        assert_eq!(keymap.action_for(&ctrl_j), None);
    }
}
