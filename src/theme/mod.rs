//! Theme state controller.
//!
//! This module holds the single process-wide display mode (dark or light) and
//! broadcasts changes to subscribed consumers. Changes stay in memory; the
//! start value comes from the command line or the configuration file and
//! defaults to [`Theme::Dark`].

mod surface;

pub use surface::{RootSurface, THEME_ATTRIBUTE};

use log::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Specifying the two display modes.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Return the lowercase name used for surface attributes.
    ///
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Return the other theme.
    ///
    pub fn opposite(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown theme name.
///
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme '{0}', expected 'dark' or 'light'")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(ParseThemeError(s.to_string())),
        }
    }
}

/// Handle returned by [`ThemeStore::subscribe`].
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(Theme) + Send>;

/// Shared store for the current theme.
///
/// Any number of consumers may read the theme or subscribe to changes; only
/// [`ThemeStore::toggle_theme`] and [`ThemeStore::set_theme`] write it.
/// Setting the theme to its current value is a no-op and notifies nobody.
///
pub struct ThemeStore {
    theme: Theme,
    surface: RootSurface,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl ThemeStore {
    /// Return a new store holding the given theme with the surface already
    /// applied.
    ///
    pub fn new(theme: Theme) -> Self {
        ThemeStore {
            theme,
            surface: RootSurface::for_theme(theme),
            listeners: vec![],
            next_id: 0,
        }
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> Theme {
        self.theme
    }

    /// Get the root surface markers for the current theme.
    ///
    pub fn surface(&self) -> &RootSurface {
        &self.surface
    }

    /// Flip between dark and light, notifying subscribers before returning.
    ///
    pub fn toggle_theme(&mut self) -> &mut Self {
        let next = self.theme.opposite();
        self.apply(next);
        self
    }

    /// Set an explicit theme. Does nothing if it is already current.
    ///
    pub fn set_theme(&mut self, theme: Theme) -> &mut Self {
        if theme == self.theme {
            trace!("Theme already '{}', skipping notification.", theme);
            return self;
        }
        self.apply(theme);
        self
    }

    /// Register a callback invoked with the new theme on every change.
    ///
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(Theme) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a previously registered callback. Returns false if the id was
    /// not subscribed.
    ///
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Return the number of active subscriptions.
    ///
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn apply(&mut self, theme: Theme) {
        debug!("Switching theme from '{}' to '{}'...", self.theme, theme);
        self.theme = theme;
        self.surface.apply(theme);
        for (_, listener) in self.listeners.iter() {
            listener(theme);
        }
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        ThemeStore::new(Theme::default())
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("theme", &self.theme)
            .field("surface", &self.surface)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder(store: &mut ThemeStore) -> Arc<Mutex<Vec<Theme>>> {
        let seen = Arc::new(Mutex::new(vec![]));
        let sink = Arc::clone(&seen);
        store.subscribe(move |theme| sink.lock().unwrap().push(theme));
        seen
    }

    #[test]
    fn defaults_to_dark() {
        let store = ThemeStore::default();
        assert_eq!(store.get_theme(), Theme::Dark);
        assert_eq!(store.surface().data_theme(), "dark");
        assert_eq!(store.surface().container_class(), "dark-theme");
    }

    #[test]
    fn set_then_get() {
        for theme in [Theme::Dark, Theme::Light] {
            let mut store = ThemeStore::default();
            store.set_theme(theme);
            assert_eq!(store.get_theme(), theme);
        }
    }

    #[test]
    fn toggle_twice_restores() {
        for theme in [Theme::Dark, Theme::Light] {
            let mut store = ThemeStore::default();
            store.set_theme(theme);
            store.toggle_theme();
            assert_eq!(store.get_theme(), theme.opposite());
            store.toggle_theme();
            assert_eq!(store.get_theme(), theme);
        }
    }

    #[test]
    fn toggle_notifies_synchronously() {
        let mut store = ThemeStore::default();
        let seen = recorder(&mut store);
        store.toggle_theme();
        assert_eq!(*seen.lock().unwrap(), vec![Theme::Light]);
        store.toggle_theme();
        assert_eq!(*seen.lock().unwrap(), vec![Theme::Light, Theme::Dark]);
    }

    #[test]
    fn set_same_theme_does_not_notify() {
        let mut store = ThemeStore::default();
        let seen = recorder(&mut store);
        store.set_theme(Theme::Dark);
        assert!(seen.lock().unwrap().is_empty());
        store.set_theme(Theme::Light);
        assert_eq!(*seen.lock().unwrap(), vec![Theme::Light]);
    }

    #[test]
    fn change_updates_surface() {
        let mut store = ThemeStore::default();
        store.toggle_theme();
        assert_eq!(store.surface().data_theme(), "light");
        assert_eq!(store.surface().container_class(), "light-theme");
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut store = ThemeStore::default();
        let seen = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&seen);
        let id = store.subscribe(move |_| *sink.lock().unwrap() += 1);
        store.toggle_theme();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.toggle_theme();
        assert_eq!(*seen.lock().unwrap(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn parse_theme() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" Light ".parse::<Theme>(), Ok(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
    }
}
