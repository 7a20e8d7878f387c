use super::Frame;
use crate::state::{Focus, State};
use crate::ui::theme::Palette;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

/// Render the project list beside the selected project's details.
///
pub fn projects(frame: &mut Frame, size: Rect, state: &State, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(size);

    let projects = &state.get_content().projects;
    let focused = state.current_focus() == Focus::Page;
    let border_style = if focused {
        styling::active_block_border_style(palette)
    } else {
        styling::normal_block_border_style(palette)
    };

    let items: Vec<ListItem> = projects
        .iter()
        .map(|project| ListItem::new(project.title.clone()))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Projects"),
        )
        .style(styling::normal_text_style(palette))
        .highlight_style(styling::active_list_item_style(palette))
        .highlight_symbol("> ");
    let mut list_state = ListState::default();
    if !projects.is_empty() {
        list_state.select(Some(state.get_project_index()));
    }
    frame.render_stateful_widget(list, columns[0], &mut list_state);

    let detail_block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(palette));
    let lines = match projects.get(state.get_project_index()) {
        Some(project) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    project.title.clone(),
                    styling::banner_style(palette),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    project.description.clone(),
                    styling::normal_text_style(palette),
                )),
            ];
            if !project.technologies.is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    project.technologies.join(" · "),
                    styling::secondary_text_style(palette),
                )));
            }
            lines
        }
        None => vec![Line::from(Span::styled(
            "No projects yet.",
            styling::muted_text_style(palette),
        ))],
    };
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(detail_block),
        columns[1],
    );
}
