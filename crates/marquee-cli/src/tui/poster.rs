use marquee_api::Poster;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Upper half block: the foreground paints the top pixel, the background
/// the bottom one, so each cell shows two poster rows.
const HALF_BLOCK: &str = "\u{2580}";

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(r, g, b)
}

/// Sample `poster` into `width` x `height` terminal cells.
pub fn poster_lines(poster: &Poster, width: u16, height: u16) -> Vec<Line<'static>> {
    let cols = u32::from(width);
    let pixel_rows = u32::from(height) * 2;
    if cols == 0 || pixel_rows == 0 {
        return Vec::new();
    }

    (0..u32::from(height))
        .map(|row| {
            let top_y = (2 * row) * poster.height() / pixel_rows;
            let bottom_y = (2 * row + 1) * poster.height() / pixel_rows;
            let spans: Vec<Span<'static>> = (0..cols)
                .map(|col| {
                    let x = col * poster.width() / cols;
                    Span::styled(
                        HALF_BLOCK,
                        Style::default()
                            .fg(rgb(poster.pixel(x, top_y)))
                            .bg(rgb(poster.pixel(x, bottom_y))),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

pub fn render(frame: &mut Frame, poster: &Poster, area: Rect) {
    let lines = poster_lines(poster, area.width, area.height);
    frame.render_widget(Paragraph::new(lines), area);
}
