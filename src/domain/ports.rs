use crate::domain::model::PricingSettings;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read access to the current slot pricing configuration.
///
/// The provider is authoritative: every quote re-reads it, with no caching
/// and no staleness check. A failed read propagates to the caller unchanged.
#[async_trait]
pub trait SettingsProvider: Send + Sync {
    async fn pricing_settings(&self) -> Result<PricingSettings>;
}
