use super::Frame;
use crate::state::{Focus, Page, State};
use crate::theme::THEME_ATTRIBUTE;
use crate::ui::theme::Palette;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the key hints for the current page and focus.
///
fn hints(state: &State) -> &'static str {
    if state.is_typing() {
        return " Type to edit | Tab/Shift+Tab: next/prev field | Enter: send | Esc: leave field | Ctrl+t: theme";
    }
    if state.current_focus() == Focus::Menu {
        return " h/l: select page | Enter: open | Tab: page | t: theme | d: log | q: quit";
    }
    match state.current_page() {
        Page::Intro => " Enter: continue | t: theme | q: quit",
        Page::Main => " j/k: select card | Enter: open | Tab: menu | t: theme | q: quit",
        Page::Projects => " j/k: select project | Esc: back | Tab: menu | t: theme | q: quit",
        Page::Contact => {
            " j/k: select method | y: copy | Enter: write message | Esc: back | t: theme | q: quit"
        }
        _ => " Enter: home | Esc: back | Tab: menu | t: theme | q: quit",
    }
}

/// Render footer with key hints and the current theme marker.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State, palette: &Palette) {
    let surface = state_surface(state);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(surface.len() as u16 + 1)])
        .split(size);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints(state),
            styling::muted_text_style(palette),
        ))),
        columns[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            surface,
            styling::secondary_text_style(palette),
        )))
        .alignment(Alignment::Right),
        columns[1],
    );
}

/// Format the root surface markers, e.g. `data-theme="dark" .dark-theme`.
///
fn state_surface(state: &State) -> String {
    let surface = state.get_surface();
    format!(
        "{}=\"{}\" .{}",
        THEME_ATTRIBUTE,
        surface.attribute(THEME_ATTRIBUTE).unwrap_or_default(),
        surface.container_class()
    )
}
