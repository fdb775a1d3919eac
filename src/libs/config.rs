//! User configuration for taskedit.
//!
//! Settings live in `config.json` inside the platform data directory
//! resolved by [`DataStorage`]. A missing file means defaults. The only
//! environment override is `EDITOR`, applied by [`Config::editor`].
//!
//! ```rust,no_run
//! use taskedit::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.editor = Some("vim".to_string());
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::editor::resolve_editor;
use crate::db::tasks::SaveMode;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// External editor used by `taskedit open`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,

    /// Delete rows missing from memory when saving, instead of keeping them.
    #[serde(default)]
    pub prune_on_save: bool,
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file, returning to defaults.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Interactive setup, seeded with the current values.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();
        msg_print!(Message::ConfigModuleEditor);

        let editor: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEditor.to_string())
            .default(current.editor.clone().unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        let prune_on_save = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPruneOnSave.to_string())
            .default(current.prune_on_save)
            .interact()?;

        Ok(Config {
            editor: if editor.trim().is_empty() { None } else { Some(editor) },
            prune_on_save,
        })
    }

    /// Editor to launch, honoring the `EDITOR` environment variable.
    pub fn editor(&self) -> String {
        resolve_editor(env::var("EDITOR").ok(), self.editor.as_deref())
    }

    pub fn save_mode(&self) -> SaveMode {
        if self.prune_on_save {
            SaveMode::Prune
        } else {
            SaveMode::Merge
        }
    }
}
