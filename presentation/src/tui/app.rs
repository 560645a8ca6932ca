//! TUI application — main loop
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                 ChatOrchestrator (tokio::spawn)
//!   ├─ crossterm EventStream             ├─ commands.recv()
//!   ├─ event_rx (UiEvent)                ├─ pending reply future
//!   └─ tick_interval (spinner/flash)     │
//!        └── command_tx ────────────>────┘
//! ```
//!
//! The TUI forwards raw submissions and renders whatever events come
//! back; all conversation rules (trimming, busy gating, fallback turns)
//! live in the orchestrator.

use super::clipboard;
use super::layout::MainLayout;
use super::mode::{InputMode, KeyAction, KeyHandler};
use super::state::TuiState;
use super::widgets::{ConversationWidget, HeaderWidget, InputWidget, StatusBarWidget};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use replymate_application::{ChatCommand, UiEvent};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Main TUI application
pub struct TuiApp {
    commands: mpsc::UnboundedSender<ChatCommand>,
    events: mpsc::UnboundedReceiver<UiEvent>,
    state: TuiState,
}

impl TuiApp {
    /// Create a TUI wired to an orchestrator's channels
    pub fn new(
        commands: mpsc::UnboundedSender<ChatCommand>,
        events: mpsc::UnboundedReceiver<UiEvent>,
        model_name: impl Into<String>,
    ) -> Self {
        Self {
            commands,
            events,
            state: TuiState::new(model_name),
        }
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(120));

        loop {
            let state = &self.state;
            terminal.draw(|frame| {
                let layout = MainLayout::compute(frame.area());
                frame.render_widget(HeaderWidget::new(state), layout.header);
                frame.render_widget(ConversationWidget::new(state), layout.conversation);
                frame.render_widget(InputWidget::new(state), layout.input);
                frame.render_widget(StatusBarWidget::new(state), layout.status_bar);
            })?;

            if self.state.should_quit {
                break;
            }

            tokio::select! {
                // Terminal events (keyboard, resize)
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(term_event);
                }

                // Conversation events from the orchestrator
                Some(event) = self.events.recv() => {
                    self.state.apply(event);
                }

                // Tick for spinner animation and flash expiry
                _ = tick.tick() => {
                    self.state.advance_spinner();
                    self.state.expire_flash(Duration::from_secs(3));
                }
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) {
        if let Event::Key(key) = event
            && key.kind != KeyEventKind::Release
        {
            let action = KeyHandler::handle(self.state.mode, key);
            self.dispatch(action);
        }
        // Resize is handled implicitly by the next draw
    }

    fn dispatch(&mut self, action: KeyAction) {
        match action {
            KeyAction::EnterInsert => self.state.mode = InputMode::Insert,
            KeyAction::ExitToNormal => self.state.mode = InputMode::Normal,
            KeyAction::Submit => {
                // Forward raw text; validation and busy gating happen in
                // the orchestrator.
                let text = self.state.take_input();
                let _ = self.commands.send(ChatCommand::Submit(text));
            }
            KeyAction::InsertChar(c) => self.state.insert_char(c),
            KeyAction::DeleteChar => self.state.delete_char(),
            KeyAction::CursorLeft => self.state.cursor_left(),
            KeyAction::CursorRight => self.state.cursor_right(),
            KeyAction::CursorStart => self.state.cursor_home(),
            KeyAction::CursorEnd => self.state.cursor_end(),
            KeyAction::ScrollUp => self.state.scroll_up(),
            KeyAction::ScrollDown => self.state.scroll_down(),
            KeyAction::ScrollTop => self.state.scroll_to_top(),
            KeyAction::ScrollBottom => self.state.scroll_to_bottom(),
            KeyAction::CopyReply => self.copy_last_reply(),
            KeyAction::Quit => {
                self.state.should_quit = true;
                let _ = self.commands.send(ChatCommand::Shutdown);
            }
            KeyAction::None => {}
        }
    }

    fn copy_last_reply(&mut self) {
        let Some(reply) = self.state.last_reply().map(str::to_owned) else {
            self.state.set_flash("No reply to copy yet");
            return;
        };

        if clipboard::copy_text(&reply) {
            self.state.set_flash("Reply copied");
        } else {
            self.state.set_flash("Clipboard unavailable");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use replymate_domain::Turn;

    fn app() -> (TuiApp, mpsc::UnboundedReceiver<ChatCommand>) {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (_event_tx, event_rx) = mpsc::unbounded_channel();
        (TuiApp::new(cmd_tx, event_rx, "test-model"), cmd_rx)
    }

    #[test]
    fn test_submit_forwards_raw_input_and_clears_buffer() {
        let (mut app, mut cmd_rx) = app();
        app.state.input = "  my boss called  ".into();
        app.state.cursor_pos = app.state.input.len();

        app.dispatch(KeyAction::Submit);

        assert!(app.state.input.is_empty());
        match cmd_rx.try_recv().unwrap() {
            ChatCommand::Submit(text) => assert_eq!(text, "  my boss called  "),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_quit_sends_shutdown() {
        let (mut app, mut cmd_rx) = app();
        app.dispatch(KeyAction::Quit);

        assert!(app.state.should_quit);
        assert!(matches!(
            cmd_rx.try_recv().unwrap(),
            ChatCommand::Shutdown
        ));
    }

    #[test]
    fn test_copy_without_reply_flashes() {
        let (mut app, _cmd_rx) = app();
        app.dispatch(KeyAction::CopyReply);
        let (flash, _) = app.state.flash_message.as_ref().unwrap();
        assert_eq!(flash, "No reply to copy yet");
    }

    #[test]
    fn test_mode_switching() {
        let (mut app, _cmd_rx) = app();
        assert_eq!(app.state.mode, InputMode::Insert);

        app.dispatch(KeyAction::ExitToNormal);
        assert_eq!(app.state.mode, InputMode::Normal);

        app.dispatch(KeyAction::EnterInsert);
        assert_eq!(app.state.mode, InputMode::Insert);
    }

    #[test]
    fn test_typing_edits_state_buffer() {
        let (mut app, _cmd_rx) = app();
        app.dispatch(KeyAction::InsertChar('h'));
        app.dispatch(KeyAction::InsertChar('i'));
        app.dispatch(KeyAction::DeleteChar);
        assert_eq!(app.state.input, "h");
    }

    #[test]
    fn test_events_mirror_into_state() {
        let (cmd_tx, _cmd_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let mut app = TuiApp::new(cmd_tx, event_rx, "test-model");

        event_tx.send(UiEvent::TurnAppended(Turn::model("hi"))).unwrap();
        event_tx.send(UiEvent::BusyChanged(true)).unwrap();
        drop(event_tx);

        while let Ok(event) = app.events.try_recv() {
            app.state.apply(event);
        }

        assert_eq!(app.state.turns.len(), 1);
        assert!(app.state.busy);
    }
}
