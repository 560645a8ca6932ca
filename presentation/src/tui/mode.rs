//! TUI mode system (vim-like mode switching)
//!
//! Two modes only: Insert for typing the next scenario, Normal for
//! scrolling, copying the drafted reply, and quitting. The application
//! starts in Insert mode so the chat box is immediately usable.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Text input
    #[default]
    Insert,
    /// Navigation and actions
    Normal,
}

impl InputMode {
    /// Mode indicator string for the status bar
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Insert => "INSERT",
            Self::Normal => "NORMAL",
        }
    }

    /// Mode color for the status bar
    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Self::Insert => Color::Green,
            Self::Normal => Color::Blue,
        }
    }
}

/// User action derived from key events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Enter insert mode
    EnterInsert,
    /// Exit to normal mode
    ExitToNormal,
    /// Submit current input (Enter in Insert mode)
    Submit,
    /// Insert character
    InsertChar(char),
    /// Delete character before the cursor (Backspace)
    DeleteChar,
    /// Move cursor left
    CursorLeft,
    /// Move cursor right
    CursorRight,
    /// Move to start of input
    CursorStart,
    /// Move to end of input
    CursorEnd,
    /// Scroll conversation up (towards older turns)
    ScrollUp,
    /// Scroll conversation down (towards newer turns)
    ScrollDown,
    /// Jump to the oldest turn
    ScrollTop,
    /// Jump to the newest turn
    ScrollBottom,
    /// Copy the most recent drafted reply to the clipboard
    CopyReply,
    /// Quit application
    Quit,
    /// No action
    None,
}

/// Key event handler - maps key events to actions based on current mode
pub struct KeyHandler;

impl KeyHandler {
    /// Handle key event in the given mode
    pub fn handle(mode: InputMode, key: KeyEvent) -> KeyAction {
        // Ctrl+C quits from any mode
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match mode {
            InputMode::Insert => Self::handle_insert(key),
            InputMode::Normal => Self::handle_normal(key),
        }
    }

    fn handle_insert(key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Esc => KeyAction::ExitToNormal,
            KeyCode::Enter => KeyAction::Submit,
            KeyCode::Backspace => KeyAction::DeleteChar,
            KeyCode::Left => KeyAction::CursorLeft,
            KeyCode::Right => KeyAction::CursorRight,
            KeyCode::Home => KeyAction::CursorStart,
            KeyCode::End => KeyAction::CursorEnd,
            KeyCode::Up => KeyAction::ScrollUp,
            KeyCode::Down => KeyAction::ScrollDown,
            KeyCode::Char(c) => KeyAction::InsertChar(c),
            _ => KeyAction::None,
        }
    }

    fn handle_normal(key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char('i') | KeyCode::Char('a') => KeyAction::EnterInsert,
            KeyCode::Char('k') | KeyCode::Up => KeyAction::ScrollUp,
            KeyCode::Char('j') | KeyCode::Down => KeyAction::ScrollDown,
            KeyCode::Char('g') => KeyAction::ScrollTop,
            KeyCode::Char('G') => KeyAction::ScrollBottom,
            KeyCode::Char('y') => KeyAction::CopyReply,
            KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn test_insert_mode_typing_and_submit() {
        assert_eq!(
            KeyHandler::handle(InputMode::Insert, key(KeyCode::Char('x'))),
            KeyAction::InsertChar('x')
        );
        assert_eq!(
            KeyHandler::handle(InputMode::Insert, key(KeyCode::Enter)),
            KeyAction::Submit
        );
        assert_eq!(
            KeyHandler::handle(InputMode::Insert, key(KeyCode::Esc)),
            KeyAction::ExitToNormal
        );
    }

    #[test]
    fn test_normal_mode_navigation() {
        assert_eq!(
            KeyHandler::handle(InputMode::Normal, key(KeyCode::Char('i'))),
            KeyAction::EnterInsert
        );
        assert_eq!(
            KeyHandler::handle(InputMode::Normal, key(KeyCode::Char('j'))),
            KeyAction::ScrollDown
        );
        assert_eq!(
            KeyHandler::handle(InputMode::Normal, key(KeyCode::Char('y'))),
            KeyAction::CopyReply
        );
        assert_eq!(
            KeyHandler::handle(InputMode::Normal, key(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_normal_mode_typing_is_ignored() {
        assert_eq!(
            KeyHandler::handle(InputMode::Normal, key(KeyCode::Char('x'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_ctrl_c_quits_from_any_mode() {
        let ctrl_c = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        };
        assert_eq!(KeyHandler::handle(InputMode::Insert, ctrl_c), KeyAction::Quit);
        assert_eq!(KeyHandler::handle(InputMode::Normal, ctrl_c), KeyAction::Quit);
    }
}
