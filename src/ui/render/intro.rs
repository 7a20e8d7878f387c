use super::Frame;
use crate::state::State;
use crate::ui::theme::Palette;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

const CONTINUE_PROMPT: &str = "Let's go  [Enter]";

/// Render the intro screen with fireflies and the owner's name. The
/// continue prompt appears once the intro delay has passed.
///
pub fn intro(frame: &mut Frame, size: Rect, state: &State, palette: &Palette) {
    frame.render_widget(
        state.get_fireflies().widget(palette.firefly.to_color()),
        size,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(size);

    let owner = &state.get_content().owner;
    let mut lines = vec![
        Line::from(Span::styled(owner.name.clone(), styling::banner_style(palette))),
        Line::from(Span::styled(
            owner.role.clone(),
            styling::secondary_text_style(palette),
        )),
        Line::from(""),
    ];
    if state.intro_ready() {
        lines.push(Line::from(Span::styled(
            CONTINUE_PROMPT,
            styling::button_style(palette),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        rows[1],
    );
}
