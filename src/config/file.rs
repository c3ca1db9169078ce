use crate::domain::model::PricingSettings;
use crate::domain::ports::SettingsProvider;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Settings provider backed by a TOML file, for deployments that mount
/// configuration on disk. The file is re-read on every quote so edits take
/// effect without a restart.
pub struct TomlSettings {
    path: PathBuf,
}

impl TomlSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SettingsProvider for TomlSettings {
    async fn pricing_settings(&self) -> Result<PricingSettings> {
        tracing::debug!(
            "Reading slot pricing settings from: {}",
            self.path.display()
        );
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let settings = toml::from_str(&raw)?;

        Ok(settings)
    }
}
