use super::Frame;
use crate::state::State;
use crate::ui::theme::Palette;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

/// Render the about text, skill levels and experience.
///
pub fn about(frame: &mut Frame, size: Rect, state: &State, palette: &Palette) {
    let content = state.get_content();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(size);

    let mut lines: Vec<Line> = content
        .about
        .iter()
        .flat_map(|paragraph| {
            vec![
                Line::from(Span::styled(
                    paragraph.clone(),
                    styling::normal_text_style(palette),
                )),
                Line::from(""),
            ]
        })
        .collect();
    for experience in &content.experiences {
        lines.push(Line::from(Span::styled(
            format!("{} · {}", experience.title, experience.company),
            styling::active_block_title_style().fg(palette.accent.to_color()),
        )));
        lines.push(Line::from(Span::styled(
            format!("{} · {}", experience.period, experience.location),
            styling::muted_text_style(palette),
        )));
        lines.push(Line::from(Span::styled(
            experience.description.clone(),
            styling::secondary_text_style(palette),
        )));
        lines.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(palette))
                .title(Span::styled(
                    format!("About {}", content.owner.name),
                    styling::active_block_title_style(),
                )),
        ),
        columns[0],
    );

    let skills_block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(palette))
        .title("Skills");
    let inner = skills_block.inner(columns[1]);
    frame.render_widget(skills_block, columns[1]);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            content
                .skills
                .iter()
                .map(|_| Constraint::Length(1))
                .chain(std::iter::once(Constraint::Min(0)))
                .collect::<Vec<_>>(),
        )
        .split(inner);
    for (i, skill) in content.skills.iter().enumerate() {
        let gauge = Gauge::default()
            .gauge_style(
                styling::normal_text_style(palette)
                    .fg(palette.accent.to_color())
                    .bg(palette.surface.to_color()),
            )
            .percent(u16::from(skill.level.min(100)))
            .label(format!("{} {}%", skill.name, skill.level.min(100)));
        frame.render_widget(gauge, rows[i]);
    }
}
