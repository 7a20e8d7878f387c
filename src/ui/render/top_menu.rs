use super::Frame;
use crate::state::{Focus, State, MENU_PAGES};
use crate::ui::theme::Palette;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};

/// Render the top menu according to state.
///
pub fn top_menu(frame: &mut Frame, size: Rect, state: &State, palette: &Palette) {
    let owner = &state.get_content().owner;
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(palette))
        .title(Span::styled(owner.studio.clone(), styling::banner_style(palette)));
    let highlight_style = if state.current_focus() == Focus::Menu {
        block = block.border_style(styling::active_block_border_style(palette));
        styling::button_style(palette)
    } else {
        styling::active_list_item_style(palette)
    };

    let titles: Vec<Line> = MENU_PAGES
        .iter()
        .enumerate()
        .map(|(i, page)| Line::from(format!("{} {}", i + 1, page.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .block(block)
        .select(state.get_menu_index())
        .style(styling::secondary_text_style(palette))
        .highlight_style(highlight_style)
        .divider("|");
    frame.render_widget(tabs, size);
}
