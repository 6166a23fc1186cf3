use marquee_core::theme::MoviePalette;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::movie::{Button, Focus, Modal, MovieApp};
use super::{color, poster, render_modal, Alert};
use crate::movies::CONFIRM_DELETE_HISTORY;

/// Poster size in cells. Each cell holds two pixel rows, which keeps the
/// 140x200 aspect on a terminal with 1:2 cells.
const POSTER_COLS: u16 = 28;
const POSTER_ROWS: u16 = 20;

/// Render the movie app.
pub fn render(frame: &mut Frame, app: &MovieApp) {
    let palette = MoviePalette::for_mode(app.theme);
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(color(palette.background))),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Title entry and genre selector
            Constraint::Length(4), // Buttons
            Constraint::Min(5),    // Poster and result pane
            Constraint::Length(1), // Help
        ])
        .split(area);

    render_title(frame, palette, chunks[0]);
    render_inputs(frame, app, palette, chunks[1]);
    render_buttons(frame, app, palette, chunks[2]);
    render_result(frame, app, palette, chunks[3]);
    render_help(frame, palette, chunks[4]);

    match &app.modal {
        Some(Modal::Alert(alert)) => render_modal(
            frame,
            alert,
            "Enter OK",
            color(palette.frame),
            color(palette.foreground),
        ),
        Some(Modal::ConfirmDeleteHistory) => render_modal(
            frame,
            &Alert::warning("Confirm", CONFIRM_DELETE_HISTORY),
            "y Yes  n No",
            color(palette.frame),
            color(palette.foreground),
        ),
        None => {}
    }
}

fn render_title(frame: &mut Frame, palette: &MoviePalette, area: Rect) {
    let title = Paragraph::new("\u{1f3ac} Movie Info Finder")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(color(palette.accent))
                .bg(color(palette.frame))
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn input_block(title: &str, focused: bool, palette: &MoviePalette) -> Block<'static> {
    let border = if focused {
        palette.accent
    } else {
        palette.frame
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color(border)))
        .title(format!(" {title} "))
}

fn render_inputs(frame: &mut Frame, app: &MovieApp, palette: &MoviePalette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let entry_style = Style::default()
        .fg(color(palette.foreground))
        .bg(color(palette.entry));

    let title_focused = app.focus == Focus::Title;
    let cursor = if title_focused { "_" } else { "" };
    let entry = Paragraph::new(format!("{}{}", app.title_input, cursor))
        .style(entry_style)
        .block(input_block("Movie Title", title_focused, palette));
    frame.render_widget(entry, chunks[0]);

    let genre_focused = app.focus == Focus::Genre;
    let genre = match app.selected_genre() {
        "" if app.genres.is_empty() => "(search to build genres)".to_string(),
        "" => "\u{25c2} choose \u{25b8}".to_string(),
        g => format!("\u{25c2} {g} \u{25b8}"),
    };
    let selector = Paragraph::new(genre)
        .style(entry_style)
        .block(input_block("Genre", genre_focused, palette));
    frame.render_widget(selector, chunks[1]);
}

fn render_buttons(frame: &mut Frame, app: &MovieApp, palette: &MoviePalette, area: Rect) {
    let focused = match app.focus {
        Focus::Button(i) => Some(i),
        _ => None,
    };

    let spans: Vec<Span<'_>> = Button::ALL
        .iter()
        .enumerate()
        .map(|(i, button)| {
            let bg = if focused == Some(i) {
                palette.button_hover
            } else {
                palette.button
            };
            Span::styled(
                format!(" F{} {} ", i + 1, button.label(app.theme)),
                Style::default()
                    .fg(color(palette.button_foreground))
                    .bg(color(bg)),
            )
        })
        .flat_map(|span| [span, Span::raw(" ")])
        .collect();

    let buttons = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(color(palette.background)));
    frame.render_widget(buttons, area);
}

fn render_result(frame: &mut Frame, app: &MovieApp, palette: &MoviePalette, area: Rect) {
    let text_area = match &app.poster {
        Some(image) => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(POSTER_COLS + 2), Constraint::Min(10)])
                .split(area);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color(palette.frame)));
            let inner = block.inner(chunks[0]);
            frame.render_widget(block, chunks[0]);
            let poster_area = Rect {
                width: inner.width.min(POSTER_COLS),
                height: inner.height.min(POSTER_ROWS),
                ..inner
            };
            poster::render(frame, image, poster_area);
            chunks[1]
        }
        None => area,
    };

    let result = Paragraph::new(app.pane.text())
        .wrap(Wrap { trim: false })
        .style(
            Style::default()
                .fg(color(palette.foreground))
                .bg(color(palette.text_area)),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color(palette.frame))),
        );
    frame.render_widget(result, text_area);
}

fn render_help(frame: &mut Frame, palette: &MoviePalette, area: Rect) {
    let help = Paragraph::new("  Tab Next field  \u{2190}/\u{2192} Choose  Enter Activate  Esc Quit")
        .style(
            Style::default()
                .fg(color(palette.foreground))
                .bg(color(palette.background))
                .add_modifier(Modifier::DIM),
        );
    frame.render_widget(help, area);
}
