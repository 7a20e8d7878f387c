use super::Frame;
use crate::content::{sub_sections, SubSection};
use crate::state::{Focus, State};
use crate::ui::theme::{crystal_colors, Palette};
use crate::ui::widgets::{crystal, styling};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the landing page cards.
///
pub fn home(frame: &mut Frame, size: Rect, state: &State, palette: &Palette) {
    frame.render_widget(
        state.get_fireflies().widget(palette.firefly.to_color()),
        size,
    );
    let sections = sub_sections();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            sections
                .iter()
                .map(|_| Constraint::Ratio(1, sections.len() as u32))
                .collect::<Vec<_>>(),
        )
        .split(size);
    for (i, section) in sections.iter().enumerate() {
        let selected = state.current_focus() == Focus::Page && state.get_section_index() == i;
        card(frame, rows[i], section, selected, state, palette);
    }
}

fn card(
    frame: &mut Frame,
    size: Rect,
    section: &SubSection,
    selected: bool,
    state: &State,
    palette: &Palette,
) {
    let border_style = if selected {
        styling::active_block_border_style(palette)
    } else {
        styling::normal_block_border_style(palette)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let crystal_width = Constraint::Length(crystal::WIDTH + 2);
    let constraints = if section.reversed {
        [Constraint::Min(0), crystal_width]
    } else {
        [crystal_width, Constraint::Min(0)]
    };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);
    let (crystal_area, text_area) = if section.reversed {
        (columns[1], columns[0])
    } else {
        (columns[0], columns[1])
    };

    let theme = state.get_theme();
    frame.render_widget(
        Paragraph::new(crystal::lines(section.crystal, theme)),
        crystal_area,
    );

    let colors = crystal_colors(Some(section.crystal), theme);
    let button_style = if selected {
        styling::button_style(palette)
    } else {
        styling::muted_text_style(palette)
    };
    let lines = vec![
        Line::from(Span::styled(
            section.title,
            styling::active_block_title_style().fg(colors.title.to_color()),
        )),
        Line::from(Span::styled(
            section.subtitle,
            ratatui::style::Style::default().fg(colors.encrypted.to_color()),
        )),
        Line::from(Span::styled(
            section.description,
            styling::normal_text_style(palette),
        )),
        Line::from(Span::styled(format!(" {} ", section.button_text), button_style)),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), text_area);
}
