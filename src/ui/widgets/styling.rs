use crate::ui::theme::Palette;
use ratatui::style::{Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(palette: &Palette) -> Style {
    Style::default().fg(palette.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(palette: &Palette) -> Style {
    Style::default().fg(palette.border_normal.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for current list items.
///
pub fn current_list_item_style(palette: &Palette) -> Style {
    Style::default()
        .fg(palette.text.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for active list items.
///
pub fn active_list_item_style(palette: &Palette) -> Style {
    current_list_item_style(palette).fg(palette.accent.to_color())
}

/// Return the style for normal text.
///
pub fn normal_text_style(palette: &Palette) -> Style {
    Style::default().fg(palette.text.to_color())
}

/// Return the style for secondary text.
///
pub fn secondary_text_style(palette: &Palette) -> Style {
    Style::default().fg(palette.text_secondary.to_color())
}

/// Return the style for muted text such as placeholders.
///
pub fn muted_text_style(palette: &Palette) -> Style {
    Style::default().fg(palette.text_muted.to_color())
}

/// Return the style for the banner.
///
pub fn banner_style(palette: &Palette) -> Style {
    Style::default()
        .fg(palette.banner.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for inline field errors.
///
pub fn error_text_style(palette: &Palette) -> Style {
    Style::default().fg(palette.error.to_color())
}

/// Return the style for success messages.
///
pub fn success_text_style(palette: &Palette) -> Style {
    Style::default().fg(palette.success.to_color())
}

/// Return the style for the whole page background.
///
pub fn background_style(palette: &Palette) -> Style {
    Style::default()
        .bg(palette.background.to_color())
        .fg(palette.text.to_color())
}

/// Return the style for highlighted buttons.
///
pub fn button_style(palette: &Palette) -> Style {
    Style::default()
        .bg(palette.highlight_bg.to_color())
        .fg(palette.highlight_fg.to_color())
        .add_modifier(Modifier::BOLD)
}
