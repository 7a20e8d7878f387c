use super::*;
use crate::state::{Page, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
};

const LOG_HEIGHT: u16 = 8;

/// Render all widgets according to state. The palette is looked up from the
/// current theme on every frame.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let palette = Palette::for_theme(state.get_theme());
    let size = frame.size();
    frame.render_widget(Block::default().style(styling::background_style(&palette)), size);

    let log_height = if state.is_log_visible() { LOG_HEIGHT } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(log_height),
            Constraint::Length(1),
        ])
        .split(size);

    match state.current_page() {
        Page::Intro => {
            let body = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(log_height)])
                .split(rows[0].union(rows[1]).union(rows[2]));
            intro(frame, body[0], state, &palette);
        }
        page => {
            top_menu(frame, rows[0], state, &palette);
            match page {
                Page::Main => home(frame, rows[1], state, &palette),
                Page::Projects => projects(frame, rows[1], state, &palette),
                Page::About => about(frame, rows[1], state, &palette),
                Page::Contact => contact(frame, rows[1], state, &palette),
                _ => not_found(frame, rows[1], state, &palette),
            }
        }
    }

    if state.is_log_visible() {
        log(frame, rows[2], state, &palette);
    }
    footer(frame, rows[3], state, &palette);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ContactField;
    use crate::theme::Theme;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &mut State) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| all(frame, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn renders_every_page() {
        for route in ["/", "/main", "/projects", "/about", "/contact", "/missing"] {
            let mut state = State::default();
            state.navigate_to_route(route);
            assert!(!draw(&mut state).trim().is_empty(), "{} rendered blank", route);
        }
    }

    #[test]
    fn menu_lists_pages() {
        let mut state = State::default();
        state.navigate_to(Page::Main);
        let screen = draw(&mut state);
        for title in ["Home", "Projects", "About", "Contact"] {
            assert!(screen.contains(title));
        }
    }

    #[test]
    fn footer_shows_theme_attribute() {
        let mut state = State::default();
        state.navigate_to(Page::Main);
        assert!(draw(&mut state).contains("data-theme=\"dark\""));
        state.toggle_theme();
        assert!(draw(&mut state).contains("data-theme=\"light\""));
    }

    #[test]
    fn contact_errors_only_after_touch() {
        let mut state = State::default();
        state.navigate_to(Page::Contact);
        assert!(!draw(&mut state).contains("This field is required"));
        state.focus_field(ContactField::Name).next_field();
        assert!(draw(&mut state).contains("This field is required"));
    }

    #[test]
    fn renders_light_theme() {
        let mut state = State::default();
        state.set_theme(Theme::Light).navigate_to(Page::About);
        assert!(draw(&mut state).contains("About"));
    }
}
