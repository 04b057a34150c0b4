use crate::config::ClientConfig;
use crate::error::{CourtfundError, Result};
use crate::http::{build_client, decode_json};
use crate::types::PaymentType;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use uuid::Uuid;

/// Fixed delay used by the simulated test-payment path.
pub const TEST_PAYMENT_DELAY: Duration = Duration::from_secs(2);

const MAX_DESCRIPTION_LEN: usize = 500;
const MAX_NAME_LEN: usize = 100;

/// A charge to submit to the payment backend. Amounts are minor currency
/// units (cents).
#[derive(Debug, Clone, Serialize)]
pub struct PaymentRequest {
    pub amount: u64,
    pub currency: String,
    pub payment_type: PaymentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

impl PaymentRequest {
    pub fn new(amount: u64, payment_type: PaymentType) -> Self {
        Self {
            amount,
            currency: "usd".to_string(),
            payment_type,
            description: None,
            customer_email: None,
            customer_name: None,
            metadata: HashMap::new(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.amount == 0 {
            return Err(CourtfundError::invalid_request(
                "Amount must be greater than 0",
            ));
        }

        if self.currency.len() != 3 || !self.currency.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(CourtfundError::invalid_request(format!(
                "Invalid currency code '{}'",
                self.currency
            )));
        }

        if let Some(email) = &self.customer_email {
            if !email.contains('@') || !email.contains('.') {
                return Err(CourtfundError::invalid_request(format!(
                    "Invalid customer email '{email}'"
                )));
            }
        }

        if let Some(description) = &self.description {
            if description.len() > MAX_DESCRIPTION_LEN {
                return Err(CourtfundError::invalid_request(
                    "Description exceeds 500 characters",
                ));
            }
        }

        if let Some(name) = &self.customer_name {
            if name.len() > MAX_NAME_LEN {
                return Err(CourtfundError::invalid_request(
                    "Customer name exceeds 100 characters",
                ));
            }
        }

        Ok(())
    }
}

/// Server response for a created intent.
#[derive(Debug, Clone, Deserialize)]
pub struct IntentResponse {
    pub client_secret: String,
    pub payment_intent_id: String,
    pub amount: u64,
    pub currency: String,
    pub status: String,
}

/// Card details supplied by the user for client-side confirmation.
#[derive(Debug, Clone)]
pub struct CardDetails {
    pub number: String,
    pub exp_month: u8,
    pub exp_year: u16,
    pub cvc: String,
}

/// Terminal outcome of a payment attempt.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentOutcome {
    pub success: bool,
    pub payment_intent_id: Option<String>,
    pub error: Option<String>,
    pub requires_action: bool,
}

impl PaymentOutcome {
    pub fn succeeded(payment_intent_id: impl Into<String>) -> Self {
        Self {
            success: true,
            payment_intent_id: Some(payment_intent_id.into()),
            error: None,
            requires_action: false,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            payment_intent_id: None,
            error: Some(error.into()),
            requires_action: false,
        }
    }

    pub fn action_required() -> Self {
        Self {
            success: false,
            payment_intent_id: None,
            error: Some("Additional authentication required".to_string()),
            requires_action: true,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfirmResponse {
    id: String,
    status: String,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDetail {
    message: String,
}

/// Client for the hosted payment function and the provider confirmation API.
///
/// Creating an intent talks to our backend; confirmation goes straight to the
/// provider with the publishable key, mirroring how the browser flow works.
#[derive(Debug, Clone)]
pub struct PaymentClient {
    http: reqwest::Client,
    payment_url: String,
    provider_url: String,
    publishable_key: String,
}

impl PaymentClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            http: build_client(config.request_timeout)?,
            payment_url: config.payment_url.clone(),
            provider_url: config.provider_url.clone(),
            publishable_key: config.publishable_key.clone(),
        })
    }

    /// Ask the backend to create a payment intent for this request.
    pub async fn create_intent(&self, request: &PaymentRequest) -> Result<IntentResponse> {
        request.validate()?;

        let response = self
            .http
            .post(&self.payment_url)
            .header("Idempotency-Key", Uuid::new_v4().to_string())
            .json(request)
            .send()
            .await?;

        let intent: IntentResponse = decode_json(response).await?;
        tracing::info!(
            intent = %intent.payment_intent_id,
            amount = request.amount,
            payment_type = %request.payment_type,
            "payment intent created"
        );
        Ok(intent)
    }

    /// Create an intent and confirm it with the supplied card.
    ///
    /// Provider declines and `requires_action` statuses come back as a
    /// non-successful [`PaymentOutcome`] rather than an `Err`; only transport
    /// and backend failures propagate as errors.
    pub async fn process_payment(
        &self,
        request: &PaymentRequest,
        card: &CardDetails,
    ) -> Result<PaymentOutcome> {
        let intent = self.create_intent(request).await?;

        let confirmed = match self.confirm_intent(&intent, card, request).await {
            Ok(confirmed) => confirmed,
            Err(CourtfundError::Payment(message)) => {
                tracing::warn!(intent = %intent.payment_intent_id, "payment declined: {message}");
                return Ok(PaymentOutcome::failed(message));
            }
            Err(e) => return Err(e),
        };

        match confirmed.status.as_str() {
            "succeeded" => Ok(PaymentOutcome::succeeded(confirmed.id)),
            "requires_action" => Ok(PaymentOutcome::action_required()),
            other => Ok(PaymentOutcome::failed(format!(
                "Unexpected payment status '{other}'"
            ))),
        }
    }

    /// Simulate a payment for demos: wait the fixed delay and report success
    /// unconditionally with a `pi_test_<timestamp>` intent id.
    pub async fn create_test_payment(&self, request: &PaymentRequest) -> Result<PaymentOutcome> {
        request.validate()?;

        tokio::time::sleep(TEST_PAYMENT_DELAY).await;

        let payment_intent_id = format!("pi_test_{}", Utc::now().timestamp_millis());
        tracing::info!(intent = %payment_intent_id, "test payment simulated");
        Ok(PaymentOutcome::succeeded(payment_intent_id))
    }

    async fn confirm_intent(
        &self,
        intent: &IntentResponse,
        card: &CardDetails,
        request: &PaymentRequest,
    ) -> Result<ConfirmResponse> {
        let url = format!(
            "{}/payment_intents/{}/confirm",
            self.provider_url, intent.payment_intent_id
        );

        let mut form = vec![
            ("client_secret", intent.client_secret.clone()),
            ("payment_method_data[type]", "card".to_string()),
            ("payment_method_data[card][number]", card.number.clone()),
            (
                "payment_method_data[card][exp_month]",
                card.exp_month.to_string(),
            ),
            (
                "payment_method_data[card][exp_year]",
                card.exp_year.to_string(),
            ),
            ("payment_method_data[card][cvc]", card.cvc.clone()),
        ];
        if let Some(name) = &request.customer_name {
            form.push(("payment_method_data[billing_details][name]", name.clone()));
        }
        if let Some(email) = &request.customer_email {
            form.push((
                "payment_method_data[billing_details][email]",
                email.clone(),
            ));
        }

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.publishable_key, Option::<&str>::None)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ProviderError>()
                .await
                .map(|body| body.error.message)
                .unwrap_or_else(|_| "Payment was declined".to_string());
            return Err(CourtfundError::payment(message));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    fn client() -> PaymentClient {
        PaymentClient::new(&ClientConfig::default()).unwrap()
    }

    #[test]
    fn zero_amount_is_rejected() {
        let request = PaymentRequest::new(0, PaymentType::Donation);
        assert!(request.validate().is_err());
    }

    #[test]
    fn currency_must_be_three_lowercase_letters() {
        let mut request = PaymentRequest::new(5000, PaymentType::Donation);
        request.currency = "USD".to_string();
        assert!(request.validate().is_err());

        request.currency = "eur".to_string();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut request = PaymentRequest::new(5000, PaymentType::Investment);
        request.customer_email = Some("not-an-email".to_string());
        assert!(request.validate().is_err());

        request.customer_email = Some("fan@example.com".to_string());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn oversized_description_is_rejected() {
        let mut request = PaymentRequest::new(5000, PaymentType::Donation);
        request.description = Some("x".repeat(501));
        assert!(request.validate().is_err());
    }

    #[test]
    fn request_serializes_without_empty_optionals() {
        let request = PaymentRequest::new(5000, PaymentType::Donation);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["amount"], 5000);
        assert_eq!(json["payment_type"], "donation");
        assert!(json.get("customer_email").is_none());
        assert!(json.get("metadata").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_payment_resolves_success_after_the_delay() {
        let outcome = client()
            .create_test_payment(&PaymentRequest::new(5000, PaymentType::Donation))
            .await
            .unwrap();

        assert!(outcome.success);
        assert!(!outcome.requires_action);
        let id = outcome.payment_intent_id.unwrap();
        assert!(id.starts_with("pi_test_"), "unexpected id: {id}");
        assert!(id["pi_test_".len()..].chars().all(|c| c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn test_payment_still_validates_the_request() {
        let err = client()
            .create_test_payment(&PaymentRequest::new(0, PaymentType::Donation))
            .await
            .unwrap_err();
        assert!(matches!(err, CourtfundError::InvalidRequest(_)));
    }
}
