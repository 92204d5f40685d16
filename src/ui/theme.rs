//! Color theme

use ratatui::style::{Color, Modifier, Style};

use crate::fs::FileEntry;

/// UI colors for panes, cursor and the error screen.
#[derive(Debug, Clone)]
pub struct Theme {
    pub panel_border: Color,
    pub panel_header: Color,
    pub file_normal: Color,
    pub file_directory: Color,
    pub file_symlink: Color,
    pub cursor_fg: Color,
    pub cursor_bg: Color,
    pub error_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            panel_border: Color::DarkGray,
            panel_header: Color::Cyan,
            file_normal: Color::Reset,
            file_directory: Color::LightBlue,
            file_symlink: Color::Magenta,
            cursor_fg: Color::Black,
            cursor_bg: Color::Cyan,
            error_fg: Color::Red,
        }
    }
}

impl Theme {
    /// Style for an entry row.
    pub fn entry_style(&self, entry: &FileEntry) -> Style {
        if entry.is_symlink {
            Style::default().fg(self.file_symlink)
        } else if entry.is_dir {
            Style::default()
                .fg(self.file_directory)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.file_normal)
        }
    }

    /// Style for the entry row under the cursor.
    pub fn cursor_style(&self) -> Style {
        Style::default().fg(self.cursor_fg).bg(self.cursor_bg)
    }
}
