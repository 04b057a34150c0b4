use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Investment,
    Donation,
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentType::Investment => write!(f, "investment"),
            PaymentType::Donation => write!(f, "donation"),
        }
    }
}

impl FromStr for PaymentType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "investment" => Ok(PaymentType::Investment),
            "donation" => Ok(PaymentType::Donation),
            other => Err(format!(
                "unknown payment type '{other}' (expected 'investment' or 'donation')"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Succeeded,
    Pending,
    Failed,
    Canceled,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Succeeded => write!(f, "succeeded"),
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Failed => write!(f, "failed"),
            PaymentStatus::Canceled => write!(f, "canceled"),
        }
    }
}

/// One entry in a lottery round, created server-side when a payment is recorded.
/// Immutable from the client's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: i64,
    pub email: String,
    pub investment_usd: f64,
    #[serde(default)]
    pub ticket_numbers: Vec<String>,
    #[serde(default)]
    pub tickets_count: usize,
    pub payment_id: String,
    pub joined_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Winner {
    pub position: u8,
    pub prize_usd: f64,
    pub winning_ticket: String,
    pub winner_email: String,
    pub investment_usd: f64,
    pub claimed: bool,
    pub drawn_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrizePercentages {
    #[serde(rename = "1st_place")]
    pub first_place: u8,
    #[serde(rename = "2nd_place")]
    pub second_place: u8,
    #[serde(rename = "3rd_place")]
    pub third_place: u8,
    pub total: u8,
}

/// Aggregate round snapshot recomputed server-side; read-only for clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotteryStatus {
    pub current_round: u32,
    pub total_investment_usd: f64,
    pub total_participants: u32,
    pub prize_fund_1_usd: f64,
    pub prize_fund_2_usd: f64,
    pub prize_fund_3_usd: f64,
    pub total_prize_fund_usd: f64,
    #[serde(default)]
    pub draw_date: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub prize_percentages: Option<PrizePercentages>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantsResponse {
    pub round: u32,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub total_participants: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WinnersResponse {
    pub round: u32,
    #[serde(default)]
    pub winners: Vec<Winner>,
    #[serde(default)]
    pub total_winners: usize,
}

/// Outcome of a local draw simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawResult {
    pub success: bool,
    pub round: u32,
    pub winners: Vec<Winner>,
    pub total_participants: usize,
    pub message: String,
}

/// A payment record as returned by the analytics endpoint. Lifecycle is owned
/// by the payment backend; clients only display these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub payment_intent_id: String,
    pub amount_usd: f64,
    pub currency: String,
    pub payment_type: PaymentType,
    pub status: PaymentStatus,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_type_round_trips_through_serde() {
        let json = serde_json::to_string(&PaymentType::Donation).unwrap();
        assert_eq!(json, "\"donation\"");
        let back: PaymentType = serde_json::from_str("\"investment\"").unwrap();
        assert_eq!(back, PaymentType::Investment);
    }

    #[test]
    fn payment_type_parses_from_str() {
        assert_eq!(
            "investment".parse::<PaymentType>().unwrap(),
            PaymentType::Investment
        );
        assert!("grant".parse::<PaymentType>().is_err());
    }

    #[test]
    fn status_snapshot_deserializes_with_missing_optionals() {
        let raw = r#"{
            "current_round": 2,
            "total_investment_usd": 130000.0,
            "total_participants": 41,
            "prize_fund_1_usd": 13000.0,
            "prize_fund_2_usd": 3900.0,
            "prize_fund_3_usd": 1300.0,
            "total_prize_fund_usd": 18200.0,
            "is_active": true
        }"#;
        let status: LotteryStatus = serde_json::from_str(raw).unwrap();
        assert_eq!(status.current_round, 2);
        assert!(status.draw_date.is_none());
        assert!(status.prize_percentages.is_none());
    }
}
