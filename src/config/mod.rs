//! Configuration management module.
//!
//! This module handles loading and saving the configuration file, which
//! carries the email relay settings and the portfolio content.

mod error;

pub use error::ConfigError;

use crate::content::Content;
use crate::error::AppError;
use crate::relay::{RelaySettings, RelaySettingsUpdate};
use crate::theme::Theme;
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/folio-tui";

const ENV_SERVICE_ID: &str = "FOLIO_EMAILJS_SERVICE_ID";
const ENV_TEMPLATE_ID: &str = "FOLIO_EMAILJS_TEMPLATE_ID";
const ENV_PUBLIC_KEY: &str = "FOLIO_EMAILJS_PUBLIC_KEY";
const ENV_EMAIL_TO: &str = "FOLIO_EMAIL_TO";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug, Default)]
pub struct Config {
    pub relay: RelaySettings,
    pub content: Content,
    pub theme: Option<Theme>,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default)]
    relay: RelaySettings,
    #[serde(default)]
    content: Content,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<Theme>,
}

impl Config {
    /// Return a new empty instance.
    ///
    pub fn new() -> Config {
        Config::default()
    }

    /// Return the path of the configuration file once loaded.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Load the configuration from the custom directory if provided or the
    /// default one. A missing file is created with placeholder relay
    /// credentials and the built-in content.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.relay = data.relay;
            self.content = data.content;
            self.theme = data.theme;
        } else {
            info!("Creating configuration file at {}...", file_path.display());
            self.relay = RelaySettings::placeholder();
            self.save()?;
        }
        Ok(())
    }

    /// Apply relay overrides from the process environment.
    ///
    pub fn apply_env(&mut self) -> &mut Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply relay overrides from the given lookup. Empty values are ignored.
    ///
    pub fn apply_overrides<F>(&mut self, lookup: F) -> &mut Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let update = RelaySettingsUpdate {
            service_id: read(ENV_SERVICE_ID),
            template_id: read(ENV_TEMPLATE_ID),
            public_key: read(ENV_PUBLIC_KEY),
            to_email: read(ENV_EMAIL_TO),
            base_url: None,
        };
        if update != RelaySettingsUpdate::default() {
            debug!("Applying relay settings from environment.");
        }
        self.relay.merge(update);
        self
    }

    /// Serialize the configuration and write it to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            relay: self.relay.clone(),
            content: self.content.clone(),
            theme: self.theme,
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(DEFAULT_DIRECTORY_PATH)),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}
