pub mod file;
pub mod http;

use crate::domain::model::PricingSettings;
use crate::domain::ports::SettingsProvider;
use crate::utils::error::Result;
use async_trait::async_trait;

#[cfg(feature = "cli")]
use crate::utils::error::SlotError;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_finite_number, validate_path, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub use file::TomlSettings;
pub use http::HttpSettings;

/// Fixed in-memory settings. Used when base/step are passed literally on the
/// command line, and as the injected fake in tests.
#[derive(Debug, Clone, Copy)]
pub struct StaticSettings {
    settings: PricingSettings,
}

impl StaticSettings {
    pub fn new(base: f64, step: f64) -> Self {
        Self {
            settings: PricingSettings { base, step },
        }
    }
}

#[async_trait]
impl SettingsProvider for StaticSettings {
    async fn pricing_settings(&self) -> Result<PricingSettings> {
        Ok(self.settings)
    }
}

/// The settings source a deployment selected at startup.
pub enum SettingsSource {
    Http(HttpSettings),
    File(TomlSettings),
    Fixed(StaticSettings),
}

#[async_trait]
impl SettingsProvider for SettingsSource {
    async fn pricing_settings(&self) -> Result<PricingSettings> {
        match self {
            SettingsSource::Http(provider) => provider.pricing_settings().await,
            SettingsSource::File(provider) => provider.pricing_settings().await,
            SettingsSource::Fixed(provider) => provider.pricing_settings().await,
        }
    }
}

impl SettingsSource {
    /// Pick the provider implied by the CLI flags: a settings URL wins over
    /// a settings file, which wins over literal base/step values.
    #[cfg(feature = "cli")]
    pub fn from_cli(config: &CliConfig) -> Result<Self> {
        if let Some(url) = &config.settings_url {
            return Ok(SettingsSource::Http(HttpSettings::new(url.clone())));
        }

        if let Some(path) = &config.settings_file {
            return Ok(SettingsSource::File(TomlSettings::new(path.clone())));
        }

        match (config.base, config.step) {
            (Some(base), Some(step)) => Ok(SettingsSource::Fixed(StaticSettings::new(base, step))),
            _ => Err(SlotError::MissingConfigError {
                field: "settings_url, settings_file, or base and step".to_string(),
            }),
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "slot-quote")]
#[command(about = "Quote the price of the next reserve slot for a subject")]
pub struct CliConfig {
    #[arg(long)]
    pub settings_url: Option<String>,

    #[arg(long)]
    pub settings_file: Option<String>,

    #[arg(long)]
    pub base: Option<f64>,

    #[arg(long)]
    pub step: Option<f64>,

    #[arg(long)]
    pub slots_total: Option<f64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(url) = &self.settings_url {
            validate_url("settings_url", url)?;
        }

        if let Some(path) = &self.settings_file {
            validate_path("settings_file", path)?;
        }

        if let Some(base) = self.base {
            validate_finite_number("base", base)?;
        }

        if let Some(step) = self.step {
            validate_finite_number("step", step)?;
        }

        if let Some(slots_total) = self.slots_total {
            validate_finite_number("slots_total", slots_total)?;
        }

        if self.settings_url.is_none()
            && self.settings_file.is_none()
            && (self.base.is_none() || self.step.is_none())
        {
            return Err(SlotError::MissingConfigError {
                field: "settings_url, settings_file, or base and step".to_string(),
            });
        }

        Ok(())
    }
}
