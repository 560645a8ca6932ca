//! TUI layout
//!
//! Single vertical arrangement: header, conversation pane, input box,
//! status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct MainLayout {
    pub header: Rect,
    pub conversation: Rect,
    pub input: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: chunks[0],
            conversation: chunks[1],
            input: chunks[2],
            status_bar: chunks[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_partitions_full_height() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = MainLayout::compute(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.input.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.conversation.height, 24 - 3 - 3 - 1);
        assert_eq!(
            layout.status_bar.y,
            layout.input.y + layout.input.height
        );
    }
}
