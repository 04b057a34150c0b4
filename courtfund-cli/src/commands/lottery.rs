use clap::Subcommand;
use comfy_table::{presets::UTF8_FULL, Table};
use courtfund_core::format::{format_timestamp, format_usd};
use courtfund_core::lottery::STATUS_POLL_PERIOD;
use courtfund_core::{conduct_draw, ClientConfig, LotteryClient, PrizeTiers, Result, Winner};
use dialoguer::Confirm;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

#[derive(Subcommand)]
pub enum LotteryCommands {
    /// Show current round status and prize fund
    Status {
        /// Print the raw JSON snapshot instead of the card
        #[arg(long)]
        json: bool,
    },
    /// List participants for a round (0 = current)
    Participants {
        #[arg(short, long, default_value_t = 0)]
        round: u32,
        /// Include each participant's ticket numbers
        #[arg(long)]
        tickets: bool,
    },
    /// List recorded winners for a round (0 = current)
    Winners {
        #[arg(short, long, default_value_t = 0)]
        round: u32,
    },
    /// Run a local draw simulation over the current participants
    Draw {
        /// Seed the RNG for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Poll the status endpoint and print updates
    Watch {
        /// Poll period in seconds
        #[arg(long, default_value_t = STATUS_POLL_PERIOD.as_secs())]
        period: u64,
    },
}

pub async fn handle_lottery_command(cmd: LotteryCommands, config: &ClientConfig) -> Result<()> {
    let client = LotteryClient::new(config)?;

    match cmd {
        LotteryCommands::Status { json } => {
            let status = client.status().await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&status)?);
                return Ok(());
            }

            println!("Lottery round {}", status.current_round);
            println!(
                "  Active: {}",
                if status.is_active { "yes" } else { "no" }
            );
            println!(
                "  Total invested: {}",
                format_usd(status.total_investment_usd)
            );
            println!("  Participants: {}", status.total_participants);
            println!(
                "  Prize fund: {} total",
                format_usd(status.total_prize_fund_usd)
            );
            println!("    1st place: {}", format_usd(status.prize_fund_1_usd));
            println!("    2nd place: {}", format_usd(status.prize_fund_2_usd));
            println!("    3rd place: {}", format_usd(status.prize_fund_3_usd));
            if let Some(draw_date) = &status.draw_date {
                println!("  Draw date: {}", format_timestamp(draw_date));
            }
        }

        LotteryCommands::Participants { round, tickets } => {
            let response = client.participants(round).await?;

            println!(
                "Participants in round {} ({} total):",
                response.round, response.total_participants
            );

            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            if tickets {
                table.set_header(vec!["Email", "Investment", "Tickets", "Ticket numbers", "Joined"]);
            } else {
                table.set_header(vec!["Email", "Investment", "Tickets", "Joined"]);
            }

            for participant in &response.participants {
                let joined = participant
                    .joined_at
                    .as_deref()
                    .map(format_timestamp)
                    .unwrap_or_default();
                let mut row = vec![
                    participant.email.clone(),
                    format_usd(participant.investment_usd),
                    participant.tickets_count.to_string(),
                ];
                if tickets {
                    row.push(participant.ticket_numbers.join(", "));
                }
                row.push(joined);
                table.add_row(row);
            }

            println!("{table}");
        }

        LotteryCommands::Winners { round } => {
            let response = client.winners(round).await?;

            if response.winners.is_empty() {
                println!("No winners recorded for round {} yet", response.round);
                return Ok(());
            }

            println!("Winners of round {}:", response.round);
            print_winners_table(&response.winners);
        }

        LotteryCommands::Draw { seed, yes } => {
            let status = client.status().await?;
            let round = status.current_round;
            let recorded = client.winners(round).await?;
            let participants = client.participants(round).await?.participants;

            if !recorded.winners.is_empty() {
                println!(
                    "Round {round} already has {} recorded winners; this simulation will not overwrite them.",
                    recorded.winners.len()
                );
            }

            if !yes {
                let proceed = Confirm::new()
                    .with_prompt(format!(
                        "Run a local draw simulation for round {round} ({} participants)?",
                        participants.len()
                    ))
                    .default(false)
                    .interact()?;
                if !proceed {
                    return Ok(());
                }
            }

            let tiers = PrizeTiers::from_status(&status);
            let result = match seed {
                Some(seed) => {
                    conduct_draw(round, &participants, &tiers, &mut StdRng::seed_from_u64(seed))?
                }
                None => conduct_draw(round, &participants, &tiers, &mut rand::thread_rng())?,
            };

            println!("{}", result.message);
            print_winners_table(&result.winners);
            println!("Simulation only; the authoritative draw happens server-side.");
        }

        LotteryCommands::Watch { period } => {
            println!("Watching lottery status every {period}s (ctrl-c to stop)");
            client
                .watch_status(Duration::from_secs(period), |status| {
                    println!(
                        "[{}] round {} | fund {} | invested {} | {} participants",
                        chrono::Local::now().format("%H:%M:%S"),
                        status.current_round,
                        format_usd(status.total_prize_fund_usd),
                        format_usd(status.total_investment_usd),
                        status.total_participants
                    );
                })
                .await?;
        }
    }

    Ok(())
}

fn print_winners_table(winners: &[Winner]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Place", "Prize", "Ticket", "Email", "Claimed", "Drawn"]);

    for winner in winners {
        let drawn = winner
            .drawn_at
            .as_deref()
            .map(format_timestamp)
            .unwrap_or_default();
        table.add_row(vec![
            winner.position.to_string(),
            format_usd(winner.prize_usd),
            winner.winning_ticket.clone(),
            winner.winner_email.clone(),
            if winner.claimed { "yes" } else { "no" }.to_string(),
            drawn,
        ]);
    }

    println!("{table}");
}
