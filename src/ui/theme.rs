use crate::theme::Theme;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Color palette for one display mode.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub name: String,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Background colors
    pub background: ColorSpec,
    pub surface: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub error: ColorSpec,
    pub warning: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
    pub firefly: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

const WHITE: ColorSpec = ColorSpec::rgb(255, 255, 255);
const GRAY_400: ColorSpec = ColorSpec::rgb(156, 163, 175);
const GRAY_600: ColorSpec = ColorSpec::rgb(75, 85, 99);
const SLATE_300: ColorSpec = ColorSpec::rgb(203, 213, 225);
const SLATE_500: ColorSpec = ColorSpec::rgb(100, 116, 139);
const SLATE_900: ColorSpec = ColorSpec::rgb(15, 23, 42);
const PURPLE: ColorSpec = ColorSpec::rgb(147, 51, 234);

impl Palette {
    /// Get the palette for a display mode.
    ///
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }

    /// Dark palette: near-black purple background.
    ///
    pub fn dark() -> Self {
        Palette {
            name: "dark".to_string(),
            accent: ColorSpec::rgb(168, 85, 247),
            banner: ColorSpec::rgb(192, 132, 252),
            text: WHITE,
            text_secondary: ColorSpec::rgb(209, 213, 219),
            text_muted: GRAY_400,
            background: ColorSpec::rgb(3, 7, 18),
            surface: ColorSpec::rgb(17, 24, 39),
            success: ColorSpec::rgb(74, 222, 128),
            error: ColorSpec::rgb(248, 113, 113),
            warning: ColorSpec::rgb(250, 204, 21),
            border_active: ColorSpec::rgb(168, 85, 247),
            border_normal: GRAY_600,
            highlight_bg: PURPLE,
            highlight_fg: WHITE,
            firefly: ColorSpec::rgb(253, 224, 71),
        }
    }

    /// Light palette: slate on white.
    ///
    pub fn light() -> Self {
        Palette {
            name: "light".to_string(),
            accent: PURPLE,
            banner: ColorSpec::rgb(126, 34, 206),
            text: SLATE_900,
            text_secondary: ColorSpec::rgb(51, 65, 85),
            text_muted: SLATE_500,
            background: ColorSpec::rgb(248, 250, 252),
            surface: ColorSpec::rgb(241, 245, 249),
            success: ColorSpec::rgb(22, 163, 74),
            error: ColorSpec::rgb(220, 38, 38),
            warning: ColorSpec::rgb(202, 138, 4),
            border_active: PURPLE,
            border_normal: SLATE_300,
            highlight_bg: PURPLE,
            highlight_fg: WHITE,
            firefly: ColorSpec::rgb(202, 138, 4),
        }
    }
}

/// Specifying crystal color families.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CrystalKind {
    Golden,
    Green,
    Blue,
}

/// Text colors used next to a crystal.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CrystalColors {
    pub title: ColorSpec,
    pub encrypted: ColorSpec,
}

/// Get the title and encrypted-text colors for a crystal under a theme.
/// Without a crystal kind the neutral text colors are used.
///
pub fn crystal_colors(kind: Option<CrystalKind>, theme: Theme) -> CrystalColors {
    // (500, 700, 900) shades
    let shades = match kind {
        Some(CrystalKind::Green) => (
            ColorSpec::rgb(34, 197, 94),
            ColorSpec::rgb(21, 128, 61),
            ColorSpec::rgb(20, 83, 45),
        ),
        Some(CrystalKind::Blue) => (
            ColorSpec::rgb(59, 130, 246),
            ColorSpec::rgb(29, 78, 216),
            ColorSpec::rgb(30, 58, 138),
        ),
        Some(CrystalKind::Golden) => (
            ColorSpec::rgb(234, 179, 8),
            ColorSpec::rgb(161, 98, 7),
            ColorSpec::rgb(113, 63, 18),
        ),
        None => {
            return match theme {
                Theme::Dark => CrystalColors {
                    title: WHITE,
                    encrypted: GRAY_400,
                },
                Theme::Light => CrystalColors {
                    title: SLATE_900,
                    encrypted: SLATE_500,
                },
            }
        }
    };
    let (shade_500, shade_700, shade_900) = shades;
    match theme {
        Theme::Dark => CrystalColors {
            title: shade_500,
            encrypted: shade_700,
        },
        Theme::Light => CrystalColors {
            title: shade_700,
            encrypted: shade_900,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_follows_theme() {
        assert_eq!(Palette::for_theme(Theme::Dark).name, "dark");
        assert_eq!(Palette::for_theme(Theme::Light).name, "light");
        assert_ne!(
            Palette::for_theme(Theme::Dark).text,
            Palette::for_theme(Theme::Light).text
        );
    }

    #[test]
    fn crystal_colors_darken_in_light_theme() {
        let dark = crystal_colors(Some(CrystalKind::Green), Theme::Dark);
        let light = crystal_colors(Some(CrystalKind::Green), Theme::Light);
        assert_eq!(dark.encrypted, light.title);
    }

    #[test]
    fn crystal_colors_without_kind_are_neutral() {
        let colors = crystal_colors(None, Theme::Dark);
        assert_eq!(colors.title, WHITE);
        assert_eq!(colors.encrypted, GRAY_400);
        let colors = crystal_colors(None, Theme::Light);
        assert_eq!(colors.title, SLATE_900);
    }

    #[test]
    fn color_spec_to_color() {
        assert_eq!(ColorSpec::rgb(1, 2, 3).to_color(), Color::Rgb(1, 2, 3));
    }
}
