//! Pane widgets for the three-level view

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::errors::NavError;
use crate::state::DirectoryLevel;
use super::Theme;

/// Widget rendering one directory level as a vertical listing.
///
/// An absent level (no parent at root, no child for a file selection)
/// renders as an empty pane.
pub struct LevelPane<'a> {
    level: Option<&'a DirectoryLevel>,
    cursor: Option<usize>,
    theme: &'a Theme,
}

impl<'a> LevelPane<'a> {
    pub fn new(level: Option<&'a DirectoryLevel>, theme: &'a Theme) -> Self {
        Self {
            level,
            cursor: None,
            theme,
        }
    }

    /// Highlight the entry at `index` (center pane only).
    pub fn with_cursor(mut self, index: usize) -> Self {
        self.cursor = Some(index);
        self
    }

    /// Format the header path, replacing $HOME with ~.
    fn format_path(level: &DirectoryLevel) -> String {
        let path_str = level.path.to_string_lossy();
        if let Ok(home) = std::env::var("HOME")
            && !home.is_empty()
            && path_str.starts_with(&home)
        {
            return format!("~{}", &path_str[home.len()..]);
        }
        path_str.into_owned()
    }

    /// First visible entry, chosen so the cursor stays on screen.
    fn scroll_offset(&self, rows: usize) -> usize {
        match self.cursor {
            Some(cursor) if rows > 0 && cursor >= rows => cursor + 1 - rows,
            _ => 0,
        }
    }
}

impl Widget for LevelPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.panel_border));
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(level) = self.level else {
            return;
        };
        if inner.height < 2 || inner.width < 2 {
            return;
        }

        let header = Self::format_path(level);
        buf.set_stringn(
            inner.x,
            inner.y,
            &header,
            inner.width as usize,
            Style::default().fg(self.theme.panel_header),
        );

        // One header row plus a blank separator row.
        let list_top = inner.y + 2;
        let rows = inner.height.saturating_sub(2) as usize;
        let start = self.scroll_offset(rows);

        for (row, (index, entry)) in level
            .entries
            .iter()
            .enumerate()
            .skip(start)
            .take(rows)
            .enumerate()
        {
            let mut name = entry.name.clone();
            if entry.is_dir {
                name.push('/');
            }

            let style = if self.cursor == Some(index) {
                self.theme.cursor_style()
            } else {
                self.theme.entry_style(entry)
            };

            let y = list_top + row as u16;
            if self.cursor == Some(index) {
                // Paint the full row so the cursor bar spans the pane.
                for x in inner.x..inner.x + inner.width {
                    buf[(x, y)].set_char(' ').set_style(style);
                }
            }
            buf.set_stringn(inner.x, y, &name, inner.width as usize, style);
        }
    }
}

/// Full-screen fatal error display.
pub struct ErrorScreen<'a> {
    error: &'a NavError,
    theme: &'a Theme,
}

impl<'a> ErrorScreen<'a> {
    pub fn new(error: &'a NavError, theme: &'a Theme) -> Self {
        Self { error, theme }
    }
}

impl Widget for ErrorScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                format!("Error occurred: {}", self.error),
                Style::default().fg(self.theme.error_fg),
            )),
            Line::default(),
            Line::from("Press any key to exit."),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
