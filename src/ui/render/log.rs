use super::Frame;
use crate::state::State;
use crate::ui::theme::Palette;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render the most recent log entries that fit.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State, palette: &Palette) {
    let block = Block::default()
        .title("Log (d: hide)")
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(palette));

    let entries = state.get_log_entries();
    let visible = size.height.saturating_sub(2) as usize;
    let skip = entries.len().saturating_sub(visible);
    let items: Vec<ListItem> = entries
        .into_iter()
        .skip(skip)
        .map(|entry| {
            let style = if entry.contains(" ERROR ") {
                styling::error_text_style(palette)
            } else {
                styling::muted_text_style(palette)
            };
            ListItem::new(Line::from(Span::styled(entry, style)))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), size);
}
