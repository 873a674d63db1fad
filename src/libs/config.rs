//! Configuration management for the taskflow application.
//!
//! Settings are stored as pretty-printed JSON in `config.json` inside the
//! application data directory. A missing file is not an error: the
//! application runs on defaults until the user saves something through
//! `taskflow init`.
//!
//! ## Configuration Structure
//!
//! - **Display Config**: which view `list` opens with and how the month-ahead
//!   preview panel behaves
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use taskflow::libs::config::Config;
//!
//! // Load existing configuration or fall back to defaults
//! let config = Config::read()?;
//! println!("Default view: {}", config.display().default_view);
//!
//! // Run interactive configuration setup
//! let updated_config = Config::init()?;
//! updated_config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::task::TaskView;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable module in the application.
///
/// Used by the interactive setup to list the sections a user can edit.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Task list display settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    /// View shown by `list` when no `--view` is given.
    pub default_view: TaskView,

    /// Whether `list` prints the month-ahead preview panel under the today
    /// and all views. Focus mode hides the panel regardless.
    pub show_preview: bool,

    /// Maximum number of tasks in the preview panel.
    pub preview_limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            default_view: TaskView::Today,
            show_preview: true,
            preview_limit: 5,
        }
    }
}

impl DisplayConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "display".to_string(),
            name: Message::ConfigModuleDisplay.to_string(),
        }
    }

    /// Prompts for every display setting, pre-filled with `current`.
    pub fn init(current: &Option<DisplayConfig>) -> Result<DisplayConfig> {
        let default = current.clone().unwrap_or_default();
        let views = [TaskView::Today, TaskView::Upcoming, TaskView::All];
        let default_index = views.iter().position(|view| *view == default.default_view).unwrap_or(0);

        msg_print!(Message::ConfigModuleDisplay);
        let view_index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultView.to_string())
            .items(&views)
            .default(default_index)
            .interact()?;

        let show_preview = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptShowPreview.to_string())
            .default(default.show_preview)
            .interact()?;

        let preview_limit = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPreviewLimit.to_string())
            .default(default.preview_limit)
            .interact_text()?;

        Ok(DisplayConfig {
            default_view: views[view_index],
            show_preview,
            preview_limit,
        })
    }
}

/// Main configuration container for the entire application.
///
/// Unconfigured sections are `None` and omitted from the JSON file.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayConfig>,
}

impl Config {
    /// Reads configuration from the application data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = Self::default_path()?;
        Self::read_from(&config_file_path)
    }

    /// Reads configuration from `path`, returning defaults when it is missing.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration to the application data directory.
    pub fn save(&self) -> Result<()> {
        let config_file_path = Self::default_path()?;
        self.save_to(&config_file_path)
    }

    /// Saves the configuration as pretty-printed JSON at `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the saved configuration. Returns whether a file existed.
    pub fn delete() -> Result<bool> {
        let config_file_path = Self::default_path()?;
        Self::delete_at(&config_file_path)
    }

    pub fn delete_at(path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }

    /// Display settings, or their defaults when unconfigured.
    pub fn display(&self) -> DisplayConfig {
        self.display.clone().unwrap_or_default()
    }

    /// Runs an interactive configuration setup wizard.
    ///
    /// Starts from the saved configuration, lets the user pick the modules to
    /// edit and returns the result without saving it.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = [DisplayConfig::module()];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            if node_descriptions[selection].key.as_str() == "display" {
                config.display = Some(DisplayConfig::init(&config.display)?);
            }
        }

        Ok(config)
    }

    fn default_path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }
}
