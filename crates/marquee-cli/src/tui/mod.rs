//! Interactive terminal front-ends for both apps.
//!
//! Each app keeps all of its state in one struct. Rendering is a pure
//! function of that struct, redrawn after every key press, so switching
//! the theme simply changes which palette the next frame uses.

use std::io;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use marquee_core::theme::Rgb;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub mod movie;
pub mod movie_view;
pub mod poster;
pub mod quote;
pub mod quote_view;

pub type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Severity of an alert, which picks its border color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Warning,
    Error,
}

/// A modal message box. Any of Enter, Esc or Space dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(AlertKind::Info, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(AlertKind::Warning, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(AlertKind::Error, title, message)
    }

    fn new(kind: AlertKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }
}

fn dismisses_alert(key: KeyCode) -> bool {
    matches!(key, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' '))
}

/// Ctrl-C quits from anywhere, even while typing.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

pub const fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Enter raw mode and the alternate screen.
pub fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Leave the alternate screen and raw mode.
pub fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// A rectangle `percent_x` wide and `height` rows tall, centred in `area`.
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Draw a modal box over the current frame. `footer` is shown under the
/// message, e.g. the choices of a confirmation.
pub fn render_modal(
    frame: &mut Frame,
    alert: &Alert,
    footer: &str,
    background: Color,
    foreground: Color,
) {
    let border = match alert.kind {
        AlertKind::Info => Color::Cyan,
        AlertKind::Warning => Color::Yellow,
        AlertKind::Error => Color::Red,
    };

    let mut lines: Vec<Line<'_>> = alert.message.lines().map(Line::from).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        footer,
        Style::default().add_modifier(Modifier::DIM),
    )));

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(4);
    let area = centered_rect(60, height, frame.area());

    let modal = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(background).fg(foreground))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(Span::styled(
                    format!(" {} ", alert.title),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(modal, area);
}
