pub mod draw;
pub mod tickets;

pub use draw::{conduct_draw, PrizeTiers};
pub use tickets::{generate_ticket_numbers, tickets_for_investment};

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{build_client, Endpoint};
use crate::types::{LotteryStatus, ParticipantsResponse, WinnersResponse};
use std::time::Duration;

/// Default polling period for live status updates.
pub const STATUS_POLL_PERIOD: Duration = Duration::from_secs(30);

/// Client for the hosted lottery function.
///
/// The service owns all lottery state; this client only reads it. Draws run
/// locally through [`conduct_draw`] and are never written back.
#[derive(Debug, Clone)]
pub struct LotteryClient {
    endpoint: Endpoint,
}

impl LotteryClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = build_client(config.request_timeout)?;
        Ok(Self {
            endpoint: Endpoint::new(http, config.lottery_url.clone()),
        })
    }

    /// Current round snapshot with prize-fund figures.
    pub async fn status(&self) -> Result<LotteryStatus> {
        self.endpoint
            .get(&[("action", "status".to_string())])
            .await
    }

    /// Participants for a round. Round 0 means the server's current round.
    pub async fn participants(&self, round: u32) -> Result<ParticipantsResponse> {
        self.endpoint
            .get(&[
                ("action", "participants".to_string()),
                ("round", round.to_string()),
            ])
            .await
    }

    /// Winners recorded for a round. Round 0 means the server's current round.
    pub async fn winners(&self, round: u32) -> Result<WinnersResponse> {
        self.endpoint
            .get(&[
                ("action", "winners".to_string()),
                ("round", round.to_string()),
            ])
            .await
    }

    /// Poll the status endpoint every `period`, invoking `on_update` for each
    /// successful snapshot. A failed poll logs a warning and keeps the last
    /// snapshot on display until the next success. Runs until the future is
    /// dropped.
    pub async fn watch_status<F>(&self, period: Duration, mut on_update: F) -> Result<()>
    where
        F: FnMut(&LotteryStatus),
    {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            match self.status().await {
                Ok(status) => {
                    tracing::debug!(
                        round = status.current_round,
                        participants = status.total_participants,
                        "lottery status updated"
                    );
                    on_update(&status);
                }
                Err(e) => {
                    tracing::warn!("lottery status poll failed: {e}");
                }
            }
        }
    }
}
