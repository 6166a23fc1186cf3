//! State and key handling of the quote app.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use marquee_api::Config;
use marquee_core::quote::ClipboardSink;
use marquee_core::{Mood, ThemeMode};

use super::{quote_view, Alert, Tui};
use crate::clipboard::SystemClipboard;
use crate::quotes::QuoteController;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteButton {
    GetQuote,
    Copy,
    Save,
    ToggleTheme,
}

impl QuoteButton {
    pub const ALL: [Self; 4] = [Self::GetQuote, Self::Copy, Self::Save, Self::ToggleTheme];

    pub fn label(self, theme: ThemeMode) -> &'static str {
        match self {
            Self::GetQuote => "Get Quote",
            Self::Copy => "Copy to Clipboard",
            Self::Save => "Save to Favorites",
            Self::ToggleTheme => theme.toggle_label(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteFocus {
    Mood,
    Button(usize),
}

/// Application state for the quote TUI.
#[derive(Debug)]
pub struct QuoteApp {
    controller: QuoteController,
    clipboard: Box<dyn ClipboardSink>,
    pub theme: ThemeMode,
    pub mood: Mood,
    pub focus: QuoteFocus,
    pub alert: Option<Alert>,
    pub should_quit: bool,
}

impl QuoteApp {
    pub fn new(controller: QuoteController, clipboard: Box<dyn ClipboardSink>) -> Self {
        Self {
            controller,
            clipboard,
            theme: ThemeMode::Light,
            mood: Mood::default(),
            focus: QuoteFocus::Mood,
            alert: None,
            should_quit: false,
        }
    }

    /// The quote shown in the pane, or "" before the first fetch.
    pub fn quote_text(&self) -> &str {
        self.controller.current().unwrap_or("")
    }

    pub async fn handle_key(&mut self, key: KeyCode) {
        if self.alert.is_some() {
            if super::dismisses_alert(key) {
                self.alert = None;
            }
            return;
        }

        let count = QuoteButton::ALL.len();
        match (key, self.focus) {
            (KeyCode::Esc, _) => self.should_quit = true,
            (KeyCode::Tab, QuoteFocus::Mood) => self.focus = QuoteFocus::Button(0),
            (KeyCode::Tab, QuoteFocus::Button(i)) if i + 1 < count => {
                self.focus = QuoteFocus::Button(i + 1);
            }
            (KeyCode::Tab, QuoteFocus::Button(_)) | (KeyCode::BackTab, QuoteFocus::Button(0)) => {
                self.focus = QuoteFocus::Mood;
            }
            (KeyCode::BackTab, QuoteFocus::Button(i)) => self.focus = QuoteFocus::Button(i - 1),
            (KeyCode::BackTab, QuoteFocus::Mood) => self.focus = QuoteFocus::Button(count - 1),
            (KeyCode::F(n @ 1..=4), _) => self.press(QuoteButton::ALL[usize::from(n) - 1]).await,
            (KeyCode::Right | KeyCode::Down, QuoteFocus::Mood) => self.mood = self.mood.next(),
            (KeyCode::Left | KeyCode::Up, QuoteFocus::Mood) => self.mood = self.mood.prev(),
            (KeyCode::Enter, QuoteFocus::Mood) => self.press(QuoteButton::GetQuote).await,
            (KeyCode::Right, QuoteFocus::Button(i)) => self.focus = QuoteFocus::Button((i + 1) % count),
            (KeyCode::Left, QuoteFocus::Button(i)) => {
                self.focus = QuoteFocus::Button((i + count - 1) % count);
            }
            (KeyCode::Enter | KeyCode::Char(' '), QuoteFocus::Button(i)) => {
                self.press(QuoteButton::ALL[i]).await;
            }
            _ => {}
        }
    }

    pub async fn press(&mut self, button: QuoteButton) {
        match button {
            QuoteButton::GetQuote => {
                if let Err(e) = self.controller.generate(self.mood).await {
                    log::debug!("Quote fetch failed: {:#}", e);
                    self.alert = Some(Alert::error("Error", format!("Failed to fetch quote.\n{e}")));
                }
            }
            QuoteButton::Copy => match self.controller.copy(self.clipboard.as_mut()) {
                Ok(true) => self.alert = Some(Alert::info("Copied", "Quote copied to clipboard!")),
                Ok(false) => {}
                Err(e) => {
                    self.alert = Some(Alert::error("Error", format!("Failed to copy quote.\n{e}")));
                }
            },
            QuoteButton::Save => match self.controller.save() {
                Ok(true) => self.alert = Some(Alert::info("Saved", "Quote saved to favorites.txt!")),
                Ok(false) => {}
                Err(e) => {
                    self.alert = Some(Alert::error("Error", format!("Failed to save quote.\n{e}")));
                }
            },
            QuoteButton::ToggleTheme => self.theme.toggle(),
        }
    }
}

/// Run the quote TUI.
pub async fn run(config: &Config) -> Result<()> {
    let controller = QuoteController::from_config(config)?;
    let app = QuoteApp::new(controller, Box::new(SystemClipboard::default()));

    let mut terminal = super::setup_terminal()?;
    let result = run_event_loop(&mut terminal, app).await;
    super::restore_terminal(&mut terminal)?;

    result
}

async fn run_event_loop(terminal: &mut Tui, mut app: QuoteApp) -> Result<()> {
    loop {
        terminal.draw(|frame| quote_view::render(frame, &app))?;

        if let Event::Key(key) = event::read()? {
            if super::is_interrupt(&key) {
                return Ok(());
            }
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code).await;
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::AlertKind;
    use marquee_api::QuotesClient;
    use marquee_core::QuoteFavorites;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[derive(Debug, Clone, Default)]
    struct SharedClipboard(Arc<Mutex<Option<String>>>);

    impl ClipboardSink for SharedClipboard {
        fn set_text(&mut self, text: &str) -> marquee_core::Result<()> {
            *self.0.lock().unwrap() = Some(text.to_string());
            Ok(())
        }
    }

    fn app(dir: &TempDir) -> (QuoteApp, SharedClipboard) {
        let clipboard = SharedClipboard::default();
        let controller = QuoteController::new(
            QuotesClient::new("http://127.0.0.1:9/quotes").unwrap(),
            QuoteFavorites::in_dir(dir.path()),
        );
        (QuoteApp::new(controller, Box::new(clipboard.clone())), clipboard)
    }

    #[test]
    fn test_initial_state() {
        let dir = TempDir::new().unwrap();
        let (app, _) = app(&dir);
        assert_eq!(app.theme, ThemeMode::Light);
        assert_eq!(app.mood, Mood::Happy);
        assert_eq!(app.quote_text(), "");
        assert_eq!(QuoteButton::ToggleTheme.label(app.theme), "Dark Mode");
    }

    #[tokio::test]
    async fn test_mood_selector_cycles() {
        let dir = TempDir::new().unwrap();
        let (mut app, _) = app(&dir);

        app.handle_key(KeyCode::Right).await;
        assert_eq!(app.mood, Mood::Sad);
        app.handle_key(KeyCode::Left).await;
        app.handle_key(KeyCode::Left).await;
        assert_eq!(app.mood, Mood::ALL[Mood::ALL.len() - 1]);
    }

    #[tokio::test]
    async fn test_copy_and_save_without_quote_do_nothing() {
        let dir = TempDir::new().unwrap();
        let (mut app, clipboard) = app(&dir);

        app.handle_key(KeyCode::F(2)).await;
        app.handle_key(KeyCode::F(3)).await;

        assert!(app.alert.is_none());
        assert!(clipboard.0.lock().unwrap().is_none());
        assert!(!dir.path().join("favorites.txt").exists());
    }

    #[tokio::test]
    async fn test_fetch_failure_shows_error_alert() {
        let dir = TempDir::new().unwrap();
        let (mut app, _) = app(&dir);

        app.handle_key(KeyCode::Enter).await;
        let alert = app.alert.clone().unwrap();
        assert_eq!(alert.kind, AlertKind::Error);
        assert_eq!(alert.title, "Error");
        assert!(alert.message.starts_with("Failed to fetch quote."));

        app.handle_key(KeyCode::Char('x')).await;
        assert!(app.alert.is_some());
        app.handle_key(KeyCode::Esc).await;
        assert!(app.alert.is_none());
        assert!(!app.should_quit);
    }

    #[tokio::test]
    async fn test_focus_and_theme_button() {
        let dir = TempDir::new().unwrap();
        let (mut app, _) = app(&dir);

        app.handle_key(KeyCode::BackTab).await;
        assert_eq!(app.focus, QuoteFocus::Button(3));
        app.handle_key(KeyCode::Char(' ')).await;
        assert_eq!(app.theme, ThemeMode::Dark);

        app.handle_key(KeyCode::Tab).await;
        assert_eq!(app.focus, QuoteFocus::Mood);
        app.handle_key(KeyCode::Esc).await;
        assert!(app.should_quit);
    }
}
