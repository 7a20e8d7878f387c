use super::Frame;
use crate::state::{ContactField, Focus, State, SubmitStatus};
use crate::ui::theme::Palette;
use crate::ui::widgets::styling;
use crate::validation::FormFields;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
const FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";
const NOT_CONFIGURED_HINT: &str =
    "Email relay is not configured. Add relay credentials to the config file to send messages.";

/// Render contact methods beside the contact form.
///
pub fn contact(frame: &mut Frame, size: Rect, state: &State, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(size);
    contact_methods(frame, columns[0], state, palette);
    form(frame, columns[1], state, palette);
}

fn contact_methods(frame: &mut Frame, size: Rect, state: &State, palette: &Palette) {
    let methods = &state.get_content().contact_methods;
    let focused = state.current_focus() == Focus::Page && !state.is_typing();
    let border_style = if focused {
        styling::active_block_border_style(palette)
    } else {
        styling::normal_block_border_style(palette)
    };
    let items: Vec<ListItem> = methods
        .iter()
        .map(|method| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    method.title.clone(),
                    styling::current_list_item_style(palette),
                )),
                Line::from(Span::styled(
                    method.value.clone(),
                    styling::secondary_text_style(palette),
                )),
                Line::from(Span::styled(
                    method.description.clone(),
                    styling::muted_text_style(palette),
                )),
            ])
        })
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Get in Touch (y: copy)"),
        )
        .highlight_style(styling::active_list_item_style(palette))
        .highlight_symbol("> ");
    let mut list_state = ListState::default();
    if !methods.is_empty() {
        list_state.select(Some(state.get_contact_method_index()));
    }
    frame.render_stateful_widget(list, size, &mut list_state);
}

fn field_height(field: ContactField) -> u16 {
    match field {
        ContactField::Message => 6,
        _ => 3,
    }
}

fn form(frame: &mut Frame, size: Rect, state: &State, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(palette))
        .title(Span::styled(
            "Send a Message",
            styling::active_block_title_style(),
        ));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let mut constraints: Vec<Constraint> = ContactField::ALL
        .iter()
        .flat_map(|field| [Constraint::Length(field_height(*field)), Constraint::Length(1)])
        .collect();
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let form = state.get_contact_form();
    let required = |field: ContactField| {
        form.schema()
            .config(field)
            .map_or(false, |config| config.required)
    };
    for (i, field) in ContactField::ALL.iter().enumerate() {
        let field = *field;
        let active = state.is_typing() && state.get_active_field() == Some(field);
        let value = form.value(field);
        let title = if required(field) {
            format!("{} *", field.placeholder())
        } else {
            field.placeholder().to_string()
        };
        let border_style = if active {
            styling::active_block_border_style(palette)
        } else {
            styling::normal_block_border_style(palette)
        };
        let text = if value.is_empty() && !active {
            Span::styled(field.placeholder(), styling::muted_text_style(palette))
        } else {
            Span::styled(value, styling::normal_text_style(palette))
        };
        let input_area = rows[i * 2];
        let input = Paragraph::new(Line::from(text))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(title),
            );
        frame.render_widget(input, input_area);

        if active && field != ContactField::Message {
            frame.set_cursor(cursor_x(input_area, value), input_area.y + 1);
        }

        if form.is_touched(field) {
            if let Some(error) = form.error(field) {
                frame.render_widget(
                    Paragraph::new(Span::styled(error, styling::error_text_style(palette))),
                    rows[i * 2 + 1],
                );
            }
        }
    }

    let mut lines = vec![Line::from(Span::styled(
        if state.get_submit_status() == SubmitStatus::Sending {
            " Sending... "
        } else {
            " Send Message [Enter] "
        },
        styling::button_style(palette),
    ))];
    match state.get_submit_status() {
        SubmitStatus::Success => lines.push(Line::from(Span::styled(
            SUCCESS_MESSAGE,
            styling::success_text_style(palette),
        ))),
        SubmitStatus::Error => {
            lines.push(Line::from(Span::styled(
                FAILURE_MESSAGE,
                styling::error_text_style(palette),
            )));
            if let Some(reason) = state.get_submit_error() {
                lines.push(Line::from(Span::styled(
                    reason,
                    styling::muted_text_style(palette),
                )));
            }
        }
        _ => (),
    }
    if !state.get_relay_status().is_configured {
        lines.push(Line::from(Span::styled(
            NOT_CONFIGURED_HINT,
            styling::muted_text_style(palette).fg(palette.warning.to_color()),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        rows[rows.len() - 1],
    );
}

/// Column of the input cursor after `value`, kept inside the input borders.
///
fn cursor_x(input_area: Rect, value: &str) -> u16 {
    let offset = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
    input_area
        .x
        .saturating_add(1)
        .saturating_add(offset)
        .min(input_area.right().saturating_sub(2))
}
