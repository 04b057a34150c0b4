use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{build_client, Endpoint};
use crate::types::{Payment, PaymentType};
use serde::{Deserialize, Serialize};

/// Aggregate payment statistics for the dashboard header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentStats {
    pub total_payments: u64,
    pub total_amount_usd: f64,
    pub total_donations: u64,
    pub total_investments: u64,
    pub donations_amount_usd: f64,
    pub investments_amount_usd: f64,
    pub recent_payments_30d: u64,
    pub recent_amount_30d_usd: f64,
    pub average_payment_usd: f64,
}

/// Pagination and filter parameters for the payments listing.
#[derive(Debug, Clone, Copy)]
pub struct PaymentsQuery {
    pub limit: u32,
    pub offset: u32,
    pub payment_type: Option<PaymentType>,
}

impl Default for PaymentsQuery {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
            payment_type: None,
        }
    }
}

/// One page of payment records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentsPage {
    pub payments: Vec<Payment>,
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
    pub has_more: bool,
}

impl PaymentsPage {
    /// Slice an in-memory record set with the same semantics as the hosted
    /// endpoint: records `offset..offset+limit` and
    /// `has_more = total > offset + limit`.
    pub fn from_records(records: &[Payment], limit: u32, offset: u32) -> Self {
        let total = records.len() as u64;
        let start = (offset as usize).min(records.len());
        let end = (start + limit as usize).min(records.len());

        Self {
            payments: records[start..end].to_vec(),
            total,
            limit,
            offset,
            has_more: total > u64::from(offset) + u64::from(limit),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: Option<String>,
    pub count: u64,
    pub amount_usd: f64,
    pub donations: u64,
    pub investments: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSlice {
    #[serde(rename = "type")]
    pub payment_type: String,
    pub count: u64,
    pub amount_usd: f64,
}

/// Chart series for the dashboard: per-day volumes and a type distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub daily_payments: Vec<DailyPoint>,
    #[serde(default)]
    pub payment_types: Vec<TypeSlice>,
    pub period_days: u32,
}

/// Client for the hosted analytics function. Read-only; each call fetches a
/// fresh snapshot, nothing is cached or aggregated locally.
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    endpoint: Endpoint,
}

impl AnalyticsClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = build_client(config.request_timeout)?;
        Ok(Self {
            endpoint: Endpoint::new(http, config.analytics_url.clone()),
        })
    }

    pub async fn summary(&self) -> Result<PaymentStats> {
        self.endpoint
            .get(&[("endpoint", "summary".to_string())])
            .await
    }

    pub async fn payments(&self, query: &PaymentsQuery) -> Result<PaymentsPage> {
        let mut params = vec![
            ("endpoint", "payments".to_string()),
            ("limit", query.limit.to_string()),
            ("offset", query.offset.to_string()),
        ];
        if let Some(payment_type) = query.payment_type {
            params.push(("type", payment_type.to_string()));
        }
        self.endpoint.get(&params).await
    }

    pub async fn charts(&self, days: u32) -> Result<ChartData> {
        self.endpoint
            .get(&[
                ("endpoint", "charts".to_string()),
                ("days", days.to_string()),
            ])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaymentStatus;

    fn records(n: usize) -> Vec<Payment> {
        (0..n as i64)
            .map(|i| Payment {
                id: i + 1,
                payment_intent_id: format!("pi_{:03}", i + 1),
                amount_usd: 50.0,
                currency: "usd".to_string(),
                payment_type: PaymentType::Donation,
                status: PaymentStatus::Succeeded,
                customer_email: None,
                customer_name: None,
                description: None,
                created_at: None,
                completed_at: None,
            })
            .collect()
    }

    #[test]
    fn middle_page_slices_and_reports_more() {
        let all = records(45);
        let page = PaymentsPage::from_records(&all, 20, 20);

        assert_eq!(page.payments.len(), 20);
        assert_eq!(page.payments.first().unwrap().id, 21);
        assert_eq!(page.payments.last().unwrap().id, 40);
        assert_eq!(page.total, 45);
        assert!(page.has_more);
    }

    #[test]
    fn last_page_is_short_with_no_more() {
        let all = records(45);
        let page = PaymentsPage::from_records(&all, 20, 40);

        assert_eq!(page.payments.len(), 5);
        assert_eq!(page.payments.first().unwrap().id, 41);
        assert_eq!(page.payments.last().unwrap().id, 45);
        assert!(!page.has_more);
    }

    #[test]
    fn offset_past_the_end_yields_an_empty_page() {
        let all = records(10);
        let page = PaymentsPage::from_records(&all, 20, 60);

        assert!(page.payments.is_empty());
        assert!(!page.has_more);
    }

    #[test]
    fn exact_boundary_has_no_more() {
        let all = records(40);
        let page = PaymentsPage::from_records(&all, 20, 20);

        assert_eq!(page.payments.len(), 20);
        assert!(!page.has_more);
    }
}
