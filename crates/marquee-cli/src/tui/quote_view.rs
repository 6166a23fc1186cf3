use marquee_core::theme::QuotePalette;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::quote::{QuoteApp, QuoteButton, QuoteFocus};
use super::{color, render_modal};

/// Render the quote app.
pub fn render(frame: &mut Frame, app: &QuoteApp) {
    let palette = QuotePalette::for_mode(app.theme);
    let base = Style::default()
        .fg(color(palette.foreground))
        .bg(color(palette.background));

    frame.render_widget(Block::default().style(base), frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Mood selector
            Constraint::Min(5),    // Quote
            Constraint::Length(1), // Buttons
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let mood_border = if app.focus == QuoteFocus::Mood {
        Modifier::BOLD
    } else {
        Modifier::DIM
    };
    let mood = Paragraph::new(format!("\u{25c2} {} \u{25b8}", app.mood))
        .style(base.bg(color(palette.entry)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(base.add_modifier(mood_border))
                .title(" Select your mood "),
        );
    frame.render_widget(mood, chunks[0]);

    let quote = Paragraph::new(app.quote_text())
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center)
        .style(base.bg(color(palette.entry)))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(quote, chunks[1]);

    let spans: Vec<Span<'_>> = QuoteButton::ALL
        .iter()
        .enumerate()
        .map(|(i, button)| {
            let mut style = base.bg(color(palette.button));
            if app.focus == QuoteFocus::Button(i) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Span::styled(format!(" F{} {} ", i + 1, button.label(app.theme)), style)
        })
        .flat_map(|span| [span, Span::raw(" ")])
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)).style(base), chunks[2]);

    let help = Paragraph::new("  Tab Next  \u{2190}/\u{2192} Mood  Enter Activate  Esc Quit")
        .style(base.add_modifier(Modifier::DIM));
    frame.render_widget(help, chunks[3]);

    if let Some(alert) = &app.alert {
        render_modal(
            frame,
            alert,
            "Enter OK",
            color(palette.button),
            color(palette.foreground),
        );
    }
}
