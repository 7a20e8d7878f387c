use super::Frame;
use crate::state::State;
use crate::ui::theme::Palette;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the page shown for unknown routes.
///
pub fn not_found(frame: &mut Frame, size: Rect, _state: &State, palette: &Palette) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("404", styling::banner_style(palette))),
        Line::from(Span::styled(
            "Page not found",
            styling::normal_text_style(palette),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Back to Home [Enter] ",
            styling::button_style(palette),
        )),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(palette));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        size,
    );
}
