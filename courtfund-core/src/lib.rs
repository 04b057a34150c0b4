//! Courtfund SDK - client library for the tournament fundraising platform
//!
//! Typed clients for the hosted lottery, payment, and analytics functions,
//! plus the locale catalog, currency formatting, and the local draw
//! simulation used by the CLI. All persistent state lives server-side; this
//! crate only reads it and renders it.

pub mod analytics;
pub mod config;
pub mod error;
pub mod format;
mod http;
pub mod i18n;
pub mod lottery;
pub mod payment;
pub mod types;

pub use analytics::{AnalyticsClient, ChartData, PaymentStats, PaymentsPage, PaymentsQuery};
pub use config::ClientConfig;
pub use error::{CourtfundError, Result};
pub use i18n::Catalog;
pub use lottery::{conduct_draw, LotteryClient, PrizeTiers};
pub use payment::{CardDetails, PaymentClient, PaymentOutcome, PaymentRequest};
pub use types::{DrawResult, LotteryStatus, Participant, Payment, PaymentType, Winner};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clients_build_from_the_default_config() {
        let config = ClientConfig::default();
        config.validate().unwrap();

        LotteryClient::new(&config).unwrap();
        PaymentClient::new(&config).unwrap();
        AnalyticsClient::new(&config).unwrap();
    }

    #[test]
    fn builtin_catalog_resolves_the_default_language() {
        let config = ClientConfig::default();
        let catalog = Catalog::builtin();
        assert!(catalog.has_language(&config.default_language));
    }
}
