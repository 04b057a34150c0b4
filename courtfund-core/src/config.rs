use crate::error::{CourtfundError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Development-only key shipped as the default; live confirmation refuses it.
pub const PLACEHOLDER_PUBLISHABLE_KEY: &str = "pk_test_51234567890abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub lottery_url: String,
    pub payment_url: String,
    pub analytics_url: String,
    /// Payment provider REST base used for client-side confirmation.
    pub provider_url: String,
    pub publishable_key: String,
    pub request_timeout: Duration,
    pub default_language: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            lottery_url: "https://functions.poehali.dev/84895621-7397-4c97-a683-4c67fcfd0bad"
                .to_string(),
            payment_url: "https://functions.poehali.dev/cefde31e-d07f-4343-9318-1bf393b6f5e1"
                .to_string(),
            analytics_url: "https://functions.poehali.dev/42c57359-64f7-453e-95b5-c07175504edf"
                .to_string(),
            provider_url: "https://api.stripe.com/v1".to_string(),
            publishable_key: PLACEHOLDER_PUBLISHABLE_KEY.to_string(),
            request_timeout: Duration::from_secs(30),
            default_language: "en".to_string(),
        }
    }
}

impl ClientConfig {
    /// Build a config from the environment, falling back to the hosted defaults.
    ///
    /// Recognized variables: `COURTFUND_LOTTERY_URL`, `COURTFUND_PAYMENT_URL`,
    /// `COURTFUND_ANALYTICS_URL`, `COURTFUND_PROVIDER_URL`,
    /// `COURTFUND_PUBLISHABLE_KEY`, `COURTFUND_LANG`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("COURTFUND_LOTTERY_URL") {
            config.lottery_url = url;
        }
        if let Ok(url) = std::env::var("COURTFUND_PAYMENT_URL") {
            config.payment_url = url;
        }
        if let Ok(url) = std::env::var("COURTFUND_ANALYTICS_URL") {
            config.analytics_url = url;
        }
        if let Ok(url) = std::env::var("COURTFUND_PROVIDER_URL") {
            config.provider_url = url;
        }
        if let Ok(key) = std::env::var("COURTFUND_PUBLISHABLE_KEY") {
            config.publishable_key = key;
        }
        if let Ok(lang) = std::env::var("COURTFUND_LANG") {
            config.default_language = lang;
        }

        config
    }

    pub fn validate(&self) -> Result<()> {
        if self.lottery_url.is_empty() {
            return Err(CourtfundError::config("Lottery URL cannot be empty"));
        }

        if self.payment_url.is_empty() {
            return Err(CourtfundError::config("Payment URL cannot be empty"));
        }

        if self.analytics_url.is_empty() {
            return Err(CourtfundError::config("Analytics URL cannot be empty"));
        }

        if self.provider_url.is_empty() {
            return Err(CourtfundError::config("Provider URL cannot be empty"));
        }

        if self.request_timeout.is_zero() {
            return Err(CourtfundError::config(
                "Request timeout must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Whether the publishable key is still the shipped placeholder.
    pub fn has_live_key(&self) -> bool {
        !self.publishable_key.is_empty() && self.publishable_key != PLACEHOLDER_PUBLISHABLE_KEY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.has_live_key());
    }

    #[test]
    fn empty_url_is_rejected() {
        let config = ClientConfig {
            lottery_url: String::new(),
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = ClientConfig {
            request_timeout: Duration::ZERO,
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
