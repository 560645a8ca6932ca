//! Input widget — single-line text input with a block cursor
//!
//! The prompt and border take the mode color while Insert mode is active
//! and fall back to dark gray in Normal mode. Long input scrolls
//! horizontally so the cursor stays visible.

use crate::tui::mode::InputMode;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const PROMPT: &str = "> ";

pub struct InputWidget<'a> {
    state: &'a TuiState,
}

impl<'a> InputWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for InputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let active = self.state.mode == InputMode::Insert;
        let color = if active {
            self.state.mode.color()
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Describe the situation ")
            .style(Style::default().fg(color));

        let line = if active {
            build_active_line(&self.state.input, self.state.cursor_pos, color)
        } else {
            Line::from(vec![
                Span::styled(PROMPT, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled(self.state.input.clone(), Style::default().fg(color)),
            ])
        };

        // Horizontal scroll keeps the cursor inside the visible window
        let inner_width = area
            .width
            .saturating_sub(2 + PROMPT.len() as u16) // borders + prompt
            .max(1) as usize;
        let cursor_col = self.state.input[..self.state.cursor_pos].chars().count();
        let x_scroll = cursor_col.saturating_sub(inner_width - 1) as u16;

        Paragraph::new(line)
            .block(block)
            .scroll((0, x_scroll))
            .render(area, buf);
    }
}

/// Build the input line with a block cursor at the cursor position
fn build_active_line(text: &str, cursor_pos: usize, color: Color) -> Line<'static> {
    let cursor_style = Style::default().fg(Color::Black).bg(color);
    let mut spans: Vec<Span<'static>> = vec![Span::styled(
        PROMPT,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];

    let before = &text[..cursor_pos];
    let after = &text[cursor_pos..];

    spans.push(Span::raw(before.to_string()));

    if after.is_empty() {
        // Cursor at end — show block cursor on a space
        spans.push(Span::styled(" ", cursor_style));
    } else {
        let ch_len = after
            .chars()
            .next()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        spans.push(Span::styled(after[..ch_len].to_string(), cursor_style));
        if ch_len < after.len() {
            spans.push(Span::raw(after[ch_len..].to_string()));
        }
    }

    Line::from(spans)
}
