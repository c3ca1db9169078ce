use crate::domain::model::PricingSettings;
use crate::domain::ports::SettingsProvider;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Settings provider backed by the storefront's settings service.
///
/// Every read performs a fresh GET against the endpoint and parses the
/// JSON settings document. Failures (connection, non-2xx status, bad body)
/// surface unchanged.
pub struct HttpSettings {
    endpoint: String,
    client: Client,
}

impl HttpSettings {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl SettingsProvider for HttpSettings {
    async fn pricing_settings(&self) -> Result<PricingSettings> {
        tracing::debug!("Requesting slot pricing settings from: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        tracing::debug!("Settings response status: {}", response.status());
        let settings = response.error_for_status()?.json().await?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SlotError;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_settings_document() {
        let server = MockServer::start();
        let settings_mock = server.mock(|when, then| {
            when.method(GET).path("/settings/slots");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "slotBaseBonus": 100,
                    "slotStepBonus": 50
                }));
        });

        let provider = HttpSettings::new(server.url("/settings/slots"));
        let settings = provider.pricing_settings().await.unwrap();

        settings_mock.assert();
        assert_eq!(settings.base, 100.0);
        assert_eq!(settings.step, 50.0);
    }

    #[tokio::test]
    async fn test_extra_fields_in_document_are_ignored() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/settings/slots");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "slotBaseBonus": 80.5,
                    "slotStepBonus": 20,
                    "maintenanceMode": false
                }));
        });

        let provider = HttpSettings::new(server.url("/settings/slots"));
        let settings = provider.pricing_settings().await.unwrap();

        assert_eq!(settings.base, 80.5);
        assert_eq!(settings.step, 20.0);
    }

    #[tokio::test]
    async fn test_server_error_propagates() {
        let server = MockServer::start();
        let settings_mock = server.mock(|when, then| {
            when.method(GET).path("/settings/slots");
            then.status(500);
        });

        let provider = HttpSettings::new(server.url("/settings/slots"));
        let result = provider.pricing_settings().await;

        settings_mock.assert();
        assert!(matches!(result, Err(SlotError::ApiError(_))));
    }

    #[tokio::test]
    async fn test_malformed_document_propagates() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/settings/slots");
            then.status(200)
                .header("Content-Type", "application/json")
                .body("{\"slotBaseBonus\": \"not a number\"}");
        });

        let provider = HttpSettings::new(server.url("/settings/slots"));
        let result = provider.pricing_settings().await;

        assert!(result.is_err());
    }
}
