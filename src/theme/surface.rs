use super::Theme;

/// Attribute name carrying the theme on the root surface.
///
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Markers applied to the root of the rendered surface whenever the theme
/// changes, for consumers that style from ambient context instead of
/// subscribing.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSurface {
    data_theme: &'static str,
    container_class: &'static str,
}

impl RootSurface {
    pub(super) fn for_theme(theme: Theme) -> Self {
        let mut surface = RootSurface {
            data_theme: "",
            container_class: "",
        };
        surface.apply(theme);
        surface
    }

    pub(super) fn apply(&mut self, theme: Theme) {
        self.data_theme = theme.as_str();
        self.container_class = match theme {
            Theme::Dark => "dark-theme",
            Theme::Light => "light-theme",
        };
    }

    /// Value of the `data-theme` attribute.
    ///
    pub fn data_theme(&self) -> &str {
        self.data_theme
    }

    /// Class marking the top-level container as dark or light.
    ///
    pub fn container_class(&self) -> &str {
        self.container_class
    }

    /// Look up a root attribute by name.
    ///
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match name {
            THEME_ATTRIBUTE => Some(self.data_theme),
            _ => None,
        }
    }
}
