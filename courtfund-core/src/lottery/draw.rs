use crate::error::{CourtfundError, Result};
use crate::format::cents_to_usd;
use crate::types::{DrawResult, LotteryStatus, Participant, Winner};
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fixed payout amounts for the three prize ranks of a round, in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeTiers {
    pub first_cents: u64,
    pub second_cents: u64,
    pub third_cents: u64,
}

impl PrizeTiers {
    /// Prize split used by the platform: 10% / 3% / 1% of total investment.
    pub fn from_total_investment(total_cents: u64) -> Self {
        Self {
            first_cents: total_cents / 10,
            second_cents: total_cents * 3 / 100,
            third_cents: total_cents / 100,
        }
    }

    /// Tiers as already computed by the server for the current round.
    pub fn from_status(status: &LotteryStatus) -> Self {
        Self {
            first_cents: (status.prize_fund_1_usd * 100.0).round() as u64,
            second_cents: (status.prize_fund_2_usd * 100.0).round() as u64,
            third_cents: (status.prize_fund_3_usd * 100.0).round() as u64,
        }
    }

    pub fn total_cents(&self) -> u64 {
        self.first_cents + self.second_cents + self.third_cents
    }

    pub fn amounts_usd(&self) -> [f64; 3] {
        [
            cents_to_usd(self.first_cents),
            cents_to_usd(self.second_cents),
            cents_to_usd(self.third_cents),
        ]
    }
}

/// Run a local draw over the fetched participants.
///
/// All tickets are flattened into one pool; for each tier in order 1..=3 one
/// ticket is drawn uniformly at random and removed, so no ticket can win
/// twice within a draw. Ends early with fewer winners if the pool runs out,
/// including a zero-winner result when no participant holds a ticket yet.
/// Only an empty participant list is an error.
///
/// This is a simulation only: nothing is persisted and the randomness is not
/// verifiable. An authoritative draw belongs server-side.
pub fn conduct_draw(
    round: u32,
    participants: &[Participant],
    tiers: &PrizeTiers,
    rng: &mut impl Rng,
) -> Result<DrawResult> {
    if participants.is_empty() {
        return Err(CourtfundError::NoParticipants);
    }

    // Pool entries keep the owner index so a winning ticket resolves back to
    // its participant without a second scan.
    let mut pool: Vec<(usize, &str)> = participants
        .iter()
        .enumerate()
        .flat_map(|(idx, p)| p.ticket_numbers.iter().map(move |t| (idx, t.as_str())))
        .collect();

    let prizes = tiers.amounts_usd();
    let mut winners = Vec::with_capacity(prizes.len());

    for (tier, prize_usd) in prizes.iter().enumerate() {
        if pool.is_empty() {
            break;
        }

        let pick = rng.gen_range(0..pool.len());
        let (owner_idx, ticket) = pool.swap_remove(pick);
        let owner = &participants[owner_idx];

        tracing::info!(
            position = tier + 1,
            ticket,
            winner = %owner.email,
            "drew winning ticket"
        );

        winners.push(Winner {
            position: (tier + 1) as u8,
            prize_usd: *prize_usd,
            winning_ticket: ticket.to_string(),
            winner_email: owner.email.clone(),
            investment_usd: owner.investment_usd,
            claimed: false,
            drawn_at: Some(Utc::now().to_rfc3339()),
        });
    }

    Ok(DrawResult {
        success: true,
        round,
        winners,
        total_participants: participants.len(),
        message: format!("Round {round} draw complete"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn participant(id: i64, email: &str, tickets: &[&str]) -> Participant {
        Participant {
            id,
            email: email.to_string(),
            investment_usd: 100.0,
            ticket_numbers: tickets.iter().map(|t| t.to_string()).collect(),
            tickets_count: tickets.len(),
            payment_id: format!("pi_{id}"),
            joined_at: None,
        }
    }

    fn tiers() -> PrizeTiers {
        PrizeTiers::from_total_investment(1_000_000)
    }

    #[test]
    fn three_tickets_yield_three_distinct_winners() {
        let participants = vec![
            participant(1, "a@example.com", &["LT-AAA111"]),
            participant(2, "b@example.com", &["LT-BBB222", "LT-CCC333"]),
        ];
        let mut rng = StdRng::seed_from_u64(7);

        let result = conduct_draw(1, &participants, &tiers(), &mut rng).unwrap();

        assert_eq!(result.winners.len(), 3);
        let mut tickets: Vec<_> = result
            .winners
            .iter()
            .map(|w| w.winning_ticket.clone())
            .collect();
        tickets.sort();
        tickets.dedup();
        assert_eq!(tickets.len(), 3, "a ticket was drawn twice");
        for winner in &result.winners {
            assert!(["LT-AAA111", "LT-BBB222", "LT-CCC333"]
                .contains(&winner.winning_ticket.as_str()));
            assert!(!winner.claimed);
        }
        assert_eq!(result.winners[0].position, 1);
        assert_eq!(result.winners[2].position, 3);
    }

    #[test]
    fn winning_ticket_resolves_to_its_owner() {
        let participants = vec![
            participant(1, "solo@example.com", &["LT-XYZ987"]),
            participant(2, "other@example.com", &[]),
        ];
        let mut rng = StdRng::seed_from_u64(1);

        let result = conduct_draw(1, &participants, &tiers(), &mut rng).unwrap();

        assert_eq!(result.winners.len(), 1);
        assert_eq!(result.winners[0].winner_email, "solo@example.com");
        assert_eq!(result.winners[0].winning_ticket, "LT-XYZ987");
    }

    #[test]
    fn pool_smaller_than_tiers_stops_early() {
        let participants = vec![participant(1, "a@example.com", &["LT-AAA111", "LT-BBB222"])];
        let mut rng = StdRng::seed_from_u64(42);

        let result = conduct_draw(3, &participants, &tiers(), &mut rng).unwrap();

        assert_eq!(result.winners.len(), 2);
        assert_eq!(result.round, 3);
    }

    #[test]
    fn empty_participant_pool_is_an_error() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = conduct_draw(1, &[], &tiers(), &mut rng).unwrap_err();
        assert!(matches!(err, CourtfundError::NoParticipants));
    }

    #[test]
    fn ticketless_participants_yield_zero_winners_without_error() {
        let ticketless = vec![
            participant(1, "a@example.com", &[]),
            participant(2, "b@example.com", &[]),
        ];
        let mut rng = StdRng::seed_from_u64(0);

        let result = conduct_draw(1, &ticketless, &tiers(), &mut rng).unwrap();

        assert!(result.success);
        assert!(result.winners.is_empty());
        assert_eq!(result.total_participants, 2);
    }

    #[test]
    fn prize_split_is_ten_three_one_percent() {
        let tiers = PrizeTiers::from_total_investment(10_000_000);
        assert_eq!(tiers.first_cents, 1_000_000);
        assert_eq!(tiers.second_cents, 300_000);
        assert_eq!(tiers.third_cents, 100_000);
        assert_eq!(tiers.total_cents(), 1_400_000);
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let participants = vec![
            participant(1, "a@example.com", &["LT-AAA111", "LT-BBB222"]),
            participant(2, "b@example.com", &["LT-CCC333", "LT-DDD444"]),
        ];

        let first = conduct_draw(1, &participants, &tiers(), &mut StdRng::seed_from_u64(99))
            .unwrap();
        let second = conduct_draw(1, &participants, &tiers(), &mut StdRng::seed_from_u64(99))
            .unwrap();

        let tickets = |r: &DrawResult| {
            r.winners
                .iter()
                .map(|w| w.winning_ticket.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(tickets(&first), tickets(&second));
    }
}
