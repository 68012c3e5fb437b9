//! Configuration management for the shiftrix CLI.
//!
//! Settings live in a JSON file in the platform data directory. Every section
//! is optional: a missing file or section falls back to product defaults, so
//! the tool runs without any setup. The interactive `init` wizard fills in
//! the sections the user selects.
//!
//! ## Sections
//!
//! - **Policy**: the organization's shift policy (start, length, count)
//! - **Display**: default rendering granularity for the month listing
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftrix::libs::config::Config;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! let policy = config.policy();
//! # Ok(())
//! # }
//! ```

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::shift::ShiftPolicy;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Time resolution used when rendering a day's availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One line per day, collapsed when the day is fully covered.
    #[default]
    Day,
    /// Shift windows classified against the shift policy.
    Shift,
    /// Every segment listed with its times.
    Hour,
}

/// Display preferences for the viewing commands.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct DisplayConfig {
    /// Granularity used when the month command gets no explicit flag.
    pub default_granularity: Granularity,
}

/// Root configuration object. Sections are optional so users configure only
/// what they need; unset sections are omitted from the JSON output.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Shift policy used by shift-granularity rendering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<ShiftPolicy>,

    /// Display preferences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayConfig>,
}

impl Config {
    /// Reads the configuration file, returning defaults when it is absent.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// The effective shift policy, falling back to the product default.
    pub fn policy(&self) -> ShiftPolicy {
        self.policy.clone().unwrap_or_default()
    }

    /// The effective default granularity.
    pub fn default_granularity(&self) -> Granularity {
        self.display.clone().unwrap_or_default().default_granularity
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Presents the configurable sections, pre-fills current values as
    /// defaults and returns the updated configuration for saving.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let sections = ["Shift policy", "Display"];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectSections.to_string())
            .items(&sections)
            .interact()?;

        for &selection in &selected {
            match sections[selection] {
                "Shift policy" => {
                    let default = config.policy.clone().unwrap_or_default();
                    msg_print!(Message::ConfigSectionPolicy);
                    config.policy = Some(ShiftPolicy {
                        shift_start: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptShiftStart.to_string())
                            .default(default.shift_start)
                            .interact_text()?,
                        shift_length_hours: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptShiftLength.to_string())
                            .default(default.shift_length_hours)
                            .interact_text()?,
                        shifts_per_day: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptShiftsPerDay.to_string())
                            .default(default.shifts_per_day)
                            .interact_text()?,
                    });
                }
                "Display" => {
                    let default = config.display.clone().unwrap_or_default();
                    msg_print!(Message::ConfigSectionDisplay);
                    let granularities = [Granularity::Day, Granularity::Shift, Granularity::Hour];
                    let initial = granularities
                        .iter()
                        .position(|g| *g == default.default_granularity)
                        .unwrap_or(0);
                    let picked = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultGranularity.to_string())
                        .items(&["day", "shift", "hour"])
                        .default(initial)
                        .interact()?;
                    config.display = Some(DisplayConfig {
                        default_granularity: granularities[picked],
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
