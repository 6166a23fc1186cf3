//! State and key handling of the movie app.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use marquee_api::{Config, Poster};
use marquee_core::{display, AppendOutcome, MovieRecord, ThemeMode};

use super::{movie_view, Alert, AlertKind, Tui};
use crate::movies::{MovieController, MovieError};

/// The buttons of the movie app, in F-key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Search,
    History,
    DeleteHistory,
    Recommend,
    AddFavorite,
    ShowFavorites,
    RemoveFavorite,
    ToggleTheme,
}

impl Button {
    pub const ALL: [Self; 8] = [
        Self::Search,
        Self::History,
        Self::DeleteHistory,
        Self::Recommend,
        Self::AddFavorite,
        Self::ShowFavorites,
        Self::RemoveFavorite,
        Self::ToggleTheme,
    ];

    pub fn label(self, theme: ThemeMode) -> &'static str {
        match self {
            Self::Search => "\u{1f50d} Search",
            Self::History => "\u{1f4dc} History",
            Self::DeleteHistory => "\u{1f5d1}\u{fe0f} Delete History",
            Self::Recommend => "\u{1f3b2} Recommend",
            Self::AddFavorite => "\u{2764}\u{fe0f} Add to Favorites",
            Self::ShowFavorites => "\u{2b50} Show Favorites",
            Self::RemoveFavorite => "\u{1f5d1}\u{fe0f} Remove from Favorites",
            Self::ToggleTheme => theme.toggle_label(),
        }
    }

    fn for_function_key(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }
}

/// Which control receives typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Title,
    Genre,
    Button(usize),
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Self::Title => Self::Genre,
            Self::Genre => Self::Button(0),
            Self::Button(i) if i + 1 < Button::ALL.len() => Self::Button(i + 1),
            Self::Button(_) => Self::Title,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Title => Self::Button(Button::ALL.len() - 1),
            Self::Genre => Self::Title,
            Self::Button(0) => Self::Genre,
            Self::Button(i) => Self::Button(i - 1),
        }
    }
}

/// What the result pane shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Pane {
    Empty,
    Movie(MovieRecord),
    Listing(String),
}

impl Pane {
    pub fn text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Movie(record) => display::movie_info(record),
            Self::Listing(text) => text.clone(),
        }
    }
}

#[derive(Debug)]
pub enum Modal {
    Alert(Alert),
    ConfirmDeleteHistory,
}

/// Application state for the movie TUI.
#[derive(Debug)]
pub struct MovieApp {
    controller: MovieController,
    pub theme: ThemeMode,
    pub title_input: String,
    pub genres: Vec<String>,
    pub genre_choice: Option<usize>,
    pub focus: Focus,
    pub pane: Pane,
    pub poster: Option<Poster>,
    pub modal: Option<Modal>,
    pub should_quit: bool,
}

impl MovieApp {
    pub fn new(controller: MovieController) -> Self {
        let genres = controller.genres();
        Self {
            controller,
            theme: ThemeMode::Dark,
            title_input: String::new(),
            genres,
            genre_choice: None,
            focus: Focus::Title,
            pane: Pane::Empty,
            poster: None,
            modal: None,
            should_quit: false,
        }
    }

    /// The genre shown in the selector, or "" if none is chosen.
    pub fn selected_genre(&self) -> &str {
        self.genre_choice
            .and_then(|i| self.genres.get(i))
            .map_or("", String::as_str)
    }

    pub async fn handle_key(&mut self, key: KeyCode) {
        if let Some(modal) = self.modal.take() {
            self.handle_modal_key(modal, key);
            return;
        }

        match key {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::F(n) => {
                if let Some(button) = Button::for_function_key(n) {
                    self.press(button).await;
                }
            }
            _ => match self.focus {
                Focus::Title => self.handle_title_key(key).await,
                Focus::Genre => self.handle_genre_key(key).await,
                Focus::Button(i) => self.handle_button_key(i, key).await,
            },
        }
    }

    fn handle_modal_key(&mut self, modal: Modal, key: KeyCode) {
        match modal {
            Modal::Alert(_) if super::dismisses_alert(key) => {}
            Modal::ConfirmDeleteHistory => match key {
                KeyCode::Char('y' | 'Y') | KeyCode::Enter => self.delete_history(),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => {}
                _ => self.modal = Some(Modal::ConfirmDeleteHistory),
            },
            modal @ Modal::Alert(_) => self.modal = Some(modal),
        }
    }

    async fn handle_title_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char(c) => self.title_input.push(c),
            KeyCode::Backspace => {
                self.title_input.pop();
            }
            KeyCode::Enter => self.press(Button::Search).await,
            _ => {}
        }
    }

    async fn handle_genre_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Right | KeyCode::Down => self.cycle_genre(true),
            KeyCode::Left | KeyCode::Up => self.cycle_genre(false),
            KeyCode::Enter => self.recommend().await,
            _ => {}
        }
    }

    async fn handle_button_key(&mut self, index: usize, key: KeyCode) {
        let count = Button::ALL.len();
        match key {
            KeyCode::Right => self.focus = Focus::Button((index + 1) % count),
            KeyCode::Left => self.focus = Focus::Button((index + count - 1) % count),
            KeyCode::Enter | KeyCode::Char(' ') => self.press(Button::ALL[index]).await,
            _ => {}
        }
    }

    fn cycle_genre(&mut self, forward: bool) {
        let len = self.genres.len();
        if len == 0 {
            return;
        }
        self.genre_choice = Some(match (self.genre_choice, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        });
    }

    pub async fn press(&mut self, button: Button) {
        match button {
            Button::Search => self.search().await,
            Button::History => self.show_history(),
            Button::DeleteHistory => self.ask_delete_history(),
            Button::Recommend => self.recommend().await,
            Button::AddFavorite => self.add_favorite().await,
            Button::ShowFavorites => self.show_favorites(),
            Button::RemoveFavorite => self.remove_favorite(),
            Button::ToggleTheme => self.theme.toggle(),
        }
    }

    fn alert(&mut self, alert: Alert) {
        self.modal = Some(Modal::Alert(alert));
    }

    fn fail(&mut self, err: &MovieError) {
        let kind = if err.is_notice() {
            AlertKind::Info
        } else if matches!(err, MovieError::Input { .. }) {
            AlertKind::Warning
        } else {
            AlertKind::Error
        };
        self.alert(Alert {
            kind,
            title: err.heading().to_string(),
            message: err.to_string(),
        });
    }

    async fn show_movie(&mut self, record: MovieRecord) {
        self.poster = self.controller.poster(&record).await;
        self.pane = Pane::Movie(record);
    }

    fn show_listing(&mut self, text: String) {
        self.pane = Pane::Listing(text);
        self.poster = None;
    }

    fn refresh_genres(&mut self) {
        self.genres = self.controller.genres();
        self.genre_choice = None;
    }

    async fn search(&mut self) {
        match self.controller.search(&self.title_input).await {
            Ok(record) => {
                self.show_movie(record).await;
                self.refresh_genres();
            }
            Err(e) => self.fail(&e),
        }
    }

    fn show_history(&mut self) {
        let history = self.controller.history();
        if history.is_empty() {
            self.alert(Alert::info("History", "No search history found."));
        } else {
            self.show_listing(display::history_listing(&history));
        }
    }

    fn ask_delete_history(&mut self) {
        if self.controller.has_history() {
            self.modal = Some(Modal::ConfirmDeleteHistory);
        } else {
            self.alert(Alert::info("No History", "There is no history to delete."));
        }
    }

    fn delete_history(&mut self) {
        match self.controller.delete_history() {
            Ok(true) => {
                self.pane = Pane::Empty;
                self.poster = None;
                self.genres.clear();
                self.genre_choice = None;
                self.alert(Alert::info("Deleted", "Search history deleted successfully."));
            }
            Ok(false) => self.alert(Alert::info("No History", "There is no history to delete.")),
            Err(e) => self.fail(&e),
        }
    }

    async fn recommend(&mut self) {
        let genre = self.selected_genre().to_string();
        match self.controller.recommend(&genre) {
            Ok(record) => self.show_movie(record).await,
            Err(e) => self.fail(&e),
        }
    }

    async fn add_favorite(&mut self) {
        match self.controller.add_favorite(&self.title_input).await {
            Ok((record, outcome)) => {
                let name = record.title.unwrap_or_default();
                match outcome {
                    AppendOutcome::Added => self.alert(Alert::info(
                        "Added to Favorites",
                        format!("{name} was added to your favorites."),
                    )),
                    AppendOutcome::Duplicate => self.alert(Alert::info(
                        "Already in Favorites",
                        format!("{name} is already in your favorites."),
                    )),
                    AppendOutcome::Untitled => {}
                }
            }
            Err(e) => self.fail(&e),
        }
    }

    fn show_favorites(&mut self) {
        let favorites = self.controller.favorites();
        if favorites.is_empty() {
            self.alert(Alert::info("Favorites", "No favorite movies yet."));
        } else {
            self.show_listing(display::favorites_listing(&favorites));
        }
    }

    fn remove_favorite(&mut self) {
        let title = self.title_input.trim().to_string();
        match self.controller.remove_favorite(&title) {
            Ok(true) => self.alert(Alert::info(
                "Removed",
                format!("'{title}' was removed from your favorites."),
            )),
            Ok(false) => self.alert(Alert::info(
                "Not Found",
                format!("'{title}' was not found in your favorites."),
            )),
            Err(e) => self.fail(&e),
        }
    }
}

/// Run the movie TUI.
///
/// Sets up the terminal, runs the main event loop, and restores the terminal
/// on exit (including on error).
pub async fn run(config: &Config) -> Result<()> {
    let controller = MovieController::from_config(config)?;
    let app = MovieApp::new(controller);

    let mut terminal = super::setup_terminal()?;
    let result = run_event_loop(&mut terminal, app).await;
    super::restore_terminal(&mut terminal)?;

    result
}

async fn run_event_loop(terminal: &mut Tui, mut app: MovieApp) -> Result<()> {
    loop {
        terminal.draw(|frame| movie_view::render(frame, &app))?;

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
    use marquee_api::OmdbClient;
    use marquee_core::RecordStore;
    use tempfile::TempDir;

    fn app_in(dir: &TempDir) -> MovieApp {
        let omdb = OmdbClient::new("http://127.0.0.1:9/", "test-key").unwrap();
        MovieApp::new(MovieController::new(
            RecordStore::history(dir.path()),
            RecordStore::favorites(dir.path()),
            omdb,
        ))
    }

    fn seed_history(dir: &TempDir) {
        let history = RecordStore::history(dir.path());
        history
            .append(MovieRecord::new("Rush Hour", "tt0120812").with_year("1998").with_genre("Action, Comedy"))
            .unwrap();
        history
            .append(MovieRecord::new("Amélie", "tt0211915").with_year("2001").with_genre("Comedy, Romance"))
            .unwrap();
    }

    async fn type_text(app: &mut MovieApp, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c)).await;
        }
    }

    fn alert_title(app: &MovieApp) -> Option<&str> {
        match &app.modal {
            Some(Modal::Alert(alert)) => Some(alert.title.as_str()),
            _ => None,
        }
    }

    #[tokio::test]
    async fn test_initial_state() {
        let dir = TempDir::new().unwrap();
        seed_history(&dir);
        let app = app_in(&dir);

        assert_eq!(app.theme, ThemeMode::Dark);
        assert_eq!(app.focus, Focus::Title);
        assert_eq!(app.genres, vec!["action", "comedy", "romance"]);
        assert_eq!(app.selected_genre(), "");
    }

    #[tokio::test]
    async fn test_typing_and_backspace() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        type_text(&mut app, "Alienx").await;
        app.handle_key(KeyCode::Backspace).await;
        assert_eq!(app.title_input, "Alien");
    }

    #[tokio::test]
    async fn test_search_with_blank_title_warns() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        type_text(&mut app, "   ").await;
        app.handle_key(KeyCode::Enter).await;

        let Some(Modal::Alert(alert)) = &app.modal else {
            panic!("expected an alert");
        };
        assert_eq!(alert.kind, AlertKind::Warning);
        assert_eq!(alert.title, "Input Error");
        assert_eq!(alert.message, "Please enter a movie title.");
    }

    #[tokio::test]
    async fn test_search_network_failure_alerts() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        type_text(&mut app, "Alien").await;
        app.handle_key(KeyCode::F(1)).await;

        assert_eq!(alert_title(&app), Some("Network Error"));
        assert_eq!(app.pane, Pane::Empty);
    }

    #[tokio::test]
    async fn test_alert_blocks_input_until_dismissed() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        app.handle_key(KeyCode::F(2)).await;
        assert_eq!(alert_title(&app), Some("History"));

        app.handle_key(KeyCode::Char('x')).await;
        assert!(app.modal.is_some());
        assert!(app.title_input.is_empty());

        app.handle_key(KeyCode::Enter).await;
        assert!(app.modal.is_none());
        assert!(!app.should_quit);
    }

    #[tokio::test]
    async fn test_show_history_listing() {
        let dir = TempDir::new().unwrap();
        seed_history(&dir);
        let mut app = app_in(&dir);

        app.press(Button::History).await;
        let text = app.pane.text();
        assert!(text.starts_with("\u{1f4dc} Search History:"));
        assert!(text.contains("Rush Hour (1998) - Action, Comedy"));
    }

    #[tokio::test]
    async fn test_focus_cycles_through_every_control() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        app.handle_key(KeyCode::Tab).await;
        assert_eq!(app.focus, Focus::Genre);
        for i in 0..Button::ALL.len() {
            app.handle_key(KeyCode::Tab).await;
            assert_eq!(app.focus, Focus::Button(i));
        }
        app.handle_key(KeyCode::Tab).await;
        assert_eq!(app.focus, Focus::Title);
        app.handle_key(KeyCode::BackTab).await;
        assert_eq!(app.focus, Focus::Button(Button::ALL.len() - 1));
    }

    #[tokio::test]
    async fn test_recommend_from_selected_genre() {
        let dir = TempDir::new().unwrap();
        seed_history(&dir);
        let mut app = app_in(&dir);

        app.handle_key(KeyCode::Tab).await;
        app.handle_key(KeyCode::Enter).await;
        assert_eq!(alert_title(&app), Some("No Genre"));
        app.handle_key(KeyCode::Esc).await;

        // action -> comedy -> romance
        app.handle_key(KeyCode::Right).await;
        app.handle_key(KeyCode::Right).await;
        app.handle_key(KeyCode::Right).await;
        assert_eq!(app.selected_genre(), "romance");

        app.handle_key(KeyCode::Enter).await;
        let Pane::Movie(record) = &app.pane else {
            panic!("expected a recommended movie");
        };
        assert_eq!(record.title.as_deref(), Some("Amélie"));

        app.handle_key(KeyCode::Left).await;
        assert_eq!(app.selected_genre(), "comedy");
    }

    /// Serve one PNG poster over HTTP and return its URL.
    async fn serve_poster() -> String {
        use image::{ImageOutputFormat, Rgb, RgbImage};
        use std::io::Cursor;
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let mut png = Vec::new();
        RgbImage::from_pixel(10, 10, Rgb([200, 30, 30]))
            .write_to(&mut Cursor::new(&mut png), ImageOutputFormat::Png)
            .unwrap();

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _read = socket.read(&mut request).await.unwrap();
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                png.len()
            );
            socket.write_all(head.as_bytes()).await.unwrap();
            socket.write_all(&png).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}/poster.png")
    }

    #[tokio::test]
    async fn test_recommend_shows_poster() {
        let dir = TempDir::new().unwrap();
        let url = serve_poster().await;
        RecordStore::history(dir.path())
            .append(
                MovieRecord::new("Heat", "tt0113277")
                    .with_genre("Crime")
                    .with_poster(url),
            )
            .unwrap();
        let mut app = app_in(&dir);
        app.poster = None;

        app.handle_key(KeyCode::Tab).await;
        app.handle_key(KeyCode::Right).await;
        app.handle_key(KeyCode::Enter).await;

        assert!(matches!(&app.pane, Pane::Movie(r) if r.title.as_deref() == Some("Heat")));
        let poster = app.poster.as_ref().expect("recommended movie should show its poster");
        assert_eq!(poster.pixel(0, 0), [200, 30, 30]);
    }

    #[tokio::test]
    async fn test_delete_history_needs_confirmation() {
        let dir = TempDir::new().unwrap();
        seed_history(&dir);
        let mut app = app_in(&dir);

        app.handle_key(KeyCode::F(3)).await;
        assert!(matches!(app.modal, Some(Modal::ConfirmDeleteHistory)));
        app.handle_key(KeyCode::Char('n')).await;
        assert!(app.modal.is_none());
        assert_eq!(app.genres.len(), 3);

        app.handle_key(KeyCode::F(3)).await;
        app.handle_key(KeyCode::Char('y')).await;
        assert_eq!(alert_title(&app), Some("Deleted"));
        assert!(app.genres.is_empty());
        assert!(RecordStore::history(dir.path()).load().is_empty());

        app.handle_key(KeyCode::Enter).await;
        app.handle_key(KeyCode::F(3)).await;
        assert_eq!(alert_title(&app), Some("No History"));
    }

    #[tokio::test]
    async fn test_favorites_show_and_remove() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        app.press(Button::ShowFavorites).await;
        assert_eq!(alert_title(&app), Some("Favorites"));
        app.handle_key(KeyCode::Enter).await;

        RecordStore::favorites(dir.path())
            .append(MovieRecord::new("Inception", "tt1375666").with_year("2010"))
            .unwrap();
        app.press(Button::ShowFavorites).await;
        assert!(app.pane.text().starts_with("\u{2b50} Favorites List:"));

        type_text(&mut app, " INCEPTION ").await;
        app.press(Button::RemoveFavorite).await;
        assert_eq!(alert_title(&app), Some("Removed"));
        app.handle_key(KeyCode::Enter).await;

        app.press(Button::RemoveFavorite).await;
        assert_eq!(alert_title(&app), Some("Not Found"));
    }

    #[tokio::test]
    async fn test_remove_favorite_blank_title_warns() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        app.press(Button::RemoveFavorite).await;
        assert_eq!(alert_title(&app), Some("Input Error"));
    }

    #[tokio::test]
    async fn test_toggle_theme_and_label() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        assert_eq!(Button::ToggleTheme.label(app.theme), "Light Mode");
        app.handle_key(KeyCode::F(8)).await;
        assert_eq!(app.theme, ThemeMode::Light);
        assert_eq!(Button::ToggleTheme.label(app.theme), "Dark Mode");
    }

    #[tokio::test]
    async fn test_button_focus_wraps_and_activates() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.focus = Focus::Button(0);

        app.handle_key(KeyCode::Left).await;
        assert_eq!(app.focus, Focus::Button(7));
        app.handle_key(KeyCode::Enter).await;
        assert_eq!(app.theme, ThemeMode::Light);
    }

    #[tokio::test]
    async fn test_escape_quits() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.handle_key(KeyCode::Esc).await;
        assert!(app.should_quit);
    }
}
