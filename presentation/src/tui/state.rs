//! TUI application state
//!
//! Single source of truth for everything the TUI renders. Conversation
//! content arrives as [`UiEvent`]s from the orchestrator and is mirrored
//! here for display; input editing, scrolling, and flash messages are
//! purely local.

use super::mode::InputMode;
use replymate_application::UiEvent;
use replymate_domain::{Role, Turn};
use std::time::{Duration, Instant};

/// Braille spinner shown while a reply is being drafted.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Central TUI state — owned by the TuiApp select! loop
pub struct TuiState {
    // -- Mode --
    pub mode: InputMode,

    // -- Input buffer --
    pub input: String,
    pub cursor_pos: usize,

    // -- Conversation mirror --
    pub turns: Vec<Turn>,
    pub busy: bool,
    pub spinner_frame: usize,

    // -- Scrolling (offset 0 = pinned to the newest turn) --
    pub scroll_offset: usize,
    pub auto_scroll: bool,

    // -- Status bar --
    pub model_name: String,
    pub flash_message: Option<(String, Instant)>,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl TuiState {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            mode: InputMode::default(),
            input: String::new(),
            cursor_pos: 0,
            turns: Vec::new(),
            busy: false,
            spinner_frame: 0,
            scroll_offset: 0,
            auto_scroll: true,
            model_name: model_name.into(),
            flash_message: None,
            should_quit: false,
        }
    }

    /// Apply one orchestrator event to the display state.
    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::TurnAppended(turn) => {
                self.turns.push(turn);
                if self.auto_scroll {
                    self.scroll_offset = 0;
                }
            }
            UiEvent::BusyChanged(busy) => {
                self.busy = busy;
            }
        }
    }

    // -- Input editing --

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        if self.cursor_pos > 0 {
            let prev_char_len = self.input[..self.cursor_pos]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.input.remove(self.cursor_pos - prev_char_len);
            self.cursor_pos -= prev_char_len;
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor_pos > 0 {
            let prev_char_len = self.input[..self.cursor_pos]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor_pos -= prev_char_len;
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor_pos < self.input.len() {
            let next_char_len = self.input[self.cursor_pos..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor_pos += next_char_len;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_pos = self.input.len();
    }

    /// Take the current input buffer contents and clear it
    pub fn take_input(&mut self) -> String {
        self.cursor_pos = 0;
        std::mem::take(&mut self.input)
    }

    // -- Scrolling --

    pub fn scroll_up(&mut self) {
        self.auto_scroll = false;
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll_offset > 0 {
            self.scroll_offset -= 1;
        } else {
            self.auto_scroll = true;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.auto_scroll = false;
        self.scroll_offset = usize::MAX; // Clamped during render
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
        self.auto_scroll = true;
    }

    // -- Busy spinner --

    /// Advance the spinner one frame; called from the tick arm.
    pub fn advance_spinner(&mut self) {
        if self.busy {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    // -- Copy target --

    /// Text of the most recent model turn, if any.
    pub fn last_reply(&self) -> Option<&str> {
        self.turns
            .iter()
            .rev()
            .find(|t| t.is_model())
            .map(|t| t.text.as_str())
    }

    // -- Flash messages --

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() > max_age
        {
            self.flash_message = None;
        }
    }
}

/// Display label for a turn's originator.
pub fn role_label(role: Role) -> &'static str {
    match role {
        Role::User => "You",
        Role::Model => "Assistant",
    }
}

/// Display color for a turn's originator.
pub fn role_color(role: Role) -> ratatui::style::Color {
    use ratatui::style::Color;
    match role {
        Role::User => Color::Cyan,
        Role::Model => Color::Green,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_editing() {
        let mut state = TuiState::new("test-model");

        state.insert_char('h');
        state.insert_char('i');
        assert_eq!(state.input, "hi");
        assert_eq!(state.cursor_pos, 2);

        state.delete_char();
        assert_eq!(state.input, "h");
        assert_eq!(state.cursor_pos, 1);
    }

    #[test]
    fn test_multibyte_input_editing() {
        let mut state = TuiState::new("test-model");

        state.insert_char('é');
        state.insert_char('!');
        assert_eq!(state.input, "é!");

        state.cursor_left();
        state.cursor_left();
        assert_eq!(state.cursor_pos, 0);

        state.cursor_right();
        assert_eq!(state.cursor_pos, 'é'.len_utf8());
    }

    #[test]
    fn test_take_input_clears() {
        let mut state = TuiState::new("test-model");
        state.input = "hello".into();
        state.cursor_pos = 5;

        let taken = state.take_input();
        assert_eq!(taken, "hello");
        assert!(state.input.is_empty());
        assert_eq!(state.cursor_pos, 0);
    }

    #[test]
    fn test_apply_turn_appended_keeps_order() {
        let mut state = TuiState::new("test-model");
        state.apply(UiEvent::TurnAppended(Turn::model("greeting")));
        state.apply(UiEvent::TurnAppended(Turn::user("scenario")));

        assert_eq!(state.turns.len(), 2);
        assert_eq!(state.turns[0].text, "greeting");
        assert_eq!(state.turns[1].text, "scenario");
    }

    #[test]
    fn test_apply_busy_changed() {
        let mut state = TuiState::new("test-model");
        state.apply(UiEvent::BusyChanged(true));
        assert!(state.busy);
        state.apply(UiEvent::BusyChanged(false));
        assert!(!state.busy);
    }

    #[test]
    fn test_scroll_behavior() {
        let mut state = TuiState::new("test-model");
        assert!(state.auto_scroll);

        state.scroll_up();
        assert!(!state.auto_scroll);
        assert_eq!(state.scroll_offset, 1);

        state.scroll_to_bottom();
        assert!(state.auto_scroll);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_new_turn_repins_when_auto_scrolling() {
        let mut state = TuiState::new("test-model");
        state.scroll_up();
        state.scroll_down(); // back to offset 0 and auto_scroll restored

        state.scroll_up();
        state.apply(UiEvent::TurnAppended(Turn::model("x")));
        assert_eq!(state.scroll_offset, 1, "manual scroll position is kept");

        state.scroll_to_bottom();
        state.apply(UiEvent::TurnAppended(Turn::model("y")));
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_spinner_advances_only_while_busy() {
        let mut state = TuiState::new("test-model");
        state.advance_spinner();
        assert_eq!(state.spinner_frame, 0);

        state.busy = true;
        state.advance_spinner();
        assert_eq!(state.spinner_frame, 1);
    }

    #[test]
    fn test_last_reply_skips_user_turns() {
        let mut state = TuiState::new("test-model");
        assert!(state.last_reply().is_none());

        state.apply(UiEvent::TurnAppended(Turn::model("greeting")));
        state.apply(UiEvent::TurnAppended(Turn::user("scenario")));
        assert_eq!(state.last_reply(), Some("greeting"));

        state.apply(UiEvent::TurnAppended(Turn::model("drafted reply")));
        assert_eq!(state.last_reply(), Some("drafted reply"));
    }

    #[test]
    fn test_flash_message() {
        let mut state = TuiState::new("test-model");
        state.set_flash("Reply copied");
        assert!(state.flash_message.is_some());

        // Should not expire immediately
        state.expire_flash(Duration::from_secs(5));
        assert!(state.flash_message.is_some());

        state.expire_flash(Duration::ZERO);
        assert!(state.flash_message.is_none());
    }
}
