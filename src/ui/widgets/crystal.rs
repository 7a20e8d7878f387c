//! Crystal glyph drawn beside landing page cards.

use crate::theme::Theme;
use crate::ui::theme::{crystal_colors, CrystalKind};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

const ART: [&str; 6] = [
    "   /\\   ",
    "  /  \\  ",
    " /\\  /\\ ",
    " \\ \\/ / ",
    "  \\  /  ",
    "   \\/   ",
];

/// Width of the crystal glyph in cells.
///
pub const WIDTH: u16 = 8;

/// Return the crystal lines colored for the kind and theme.
///
pub fn lines(kind: CrystalKind, theme: Theme) -> Vec<Line<'static>> {
    let colors = crystal_colors(Some(kind), theme);
    ART.iter()
        .enumerate()
        .map(|(row, line)| {
            let color = if row < ART.len() / 2 {
                colors.title
            } else {
                colors.encrypted
            };
            Line::from(Span::styled(
                *line,
                Style::default()
                    .fg(color.to_color())
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_fit_width() {
        let lines = lines(CrystalKind::Blue, Theme::Dark);
        assert_eq!(lines.len(), ART.len());
        assert!(lines.iter().all(|line| line.width() == WIDTH as usize));
    }

    #[test]
    fn lines_follow_theme() {
        let dark = lines(CrystalKind::Golden, Theme::Dark);
        let light = lines(CrystalKind::Golden, Theme::Light);
        assert_ne!(dark[0].spans[0].style, light[0].spans[0].style);
    }
}
