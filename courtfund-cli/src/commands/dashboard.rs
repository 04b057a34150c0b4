use clap::Subcommand;
use comfy_table::{presets::UTF8_FULL, Table};
use courtfund_core::format::{format_timestamp, format_usd, format_usd_cents};
use courtfund_core::{
    AnalyticsClient, ClientConfig, CourtfundError, PaymentsQuery, Result,
};

#[derive(Subcommand)]
pub enum DashboardCommands {
    /// Aggregate payment statistics
    Summary {
        /// Print the raw JSON instead of the card
        #[arg(long)]
        json: bool,
    },
    /// Paginated payment records
    Payments {
        /// Zero-based page number
        #[arg(short, long, default_value_t = 0)]
        page: u32,
        /// Records per page
        #[arg(short, long, default_value_t = 20)]
        limit: u32,
        /// Filter by type: investment or donation
        #[arg(short = 't', long)]
        payment_type: Option<String>,
    },
    /// Daily volumes and type distribution
    Charts {
        /// Days of history to aggregate
        #[arg(short, long, default_value_t = 30)]
        days: u32,
    },
}

pub async fn handle_dashboard_command(cmd: DashboardCommands, config: &ClientConfig) -> Result<()> {
    let client = AnalyticsClient::new(config)?;

    match cmd {
        DashboardCommands::Summary { json } => {
            let stats = client.summary().await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
                return Ok(());
            }

            println!("Payment summary");
            println!(
                "  Total: {} across {} payments",
                format_usd_cents(stats.total_amount_usd),
                stats.total_payments
            );
            println!(
                "  Donations: {} ({} payments)",
                format_usd_cents(stats.donations_amount_usd),
                stats.total_donations
            );
            println!(
                "  Investments: {} ({} payments)",
                format_usd_cents(stats.investments_amount_usd),
                stats.total_investments
            );
            println!(
                "  Last 30 days: {} ({} payments)",
                format_usd_cents(stats.recent_amount_30d_usd),
                stats.recent_payments_30d
            );
            println!(
                "  Average payment: {}",
                format_usd_cents(stats.average_payment_usd)
            );
        }

        DashboardCommands::Payments {
            page,
            limit,
            payment_type,
        } => {
            let payment_type = payment_type
                .as_deref()
                .map(str::parse)
                .transpose()
                .map_err(CourtfundError::InvalidRequest)?;
            let query = PaymentsQuery {
                limit,
                offset: page * limit,
                payment_type,
            };

            let response = client.payments(&query).await?;

            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["Intent", "Type", "Status", "Amount", "Email", "Created"]);

            for payment in &response.payments {
                let created = payment
                    .created_at
                    .as_deref()
                    .map(format_timestamp)
                    .unwrap_or_default();
                table.add_row(vec![
                    payment.payment_intent_id.clone(),
                    payment.payment_type.to_string(),
                    payment.status.to_string(),
                    format_usd_cents(payment.amount_usd),
                    payment.customer_email.clone().unwrap_or_default(),
                    created,
                ]);
            }

            println!("{table}");

            if response.payments.is_empty() {
                println!("Page {page}: no records (total {})", response.total);
            } else {
                let first = response.offset + 1;
                let last = response.offset + response.payments.len() as u32;
                println!(
                    "Page {page}: records {first}-{last} of {}{}",
                    response.total,
                    if response.has_more {
                        " (more pages available)"
                    } else {
                        ""
                    }
                );
            }
        }

        DashboardCommands::Charts { days } => {
            let charts = client.charts(days).await?;

            println!("Daily payments (last {} days):", charts.period_days);
            let mut daily = Table::new();
            daily.load_preset(UTF8_FULL);
            daily.set_header(vec!["Date", "Count", "Amount", "Donations", "Investments"]);
            for point in &charts.daily_payments {
                daily.add_row(vec![
                    point.date.clone().unwrap_or_default(),
                    point.count.to_string(),
                    format_usd(point.amount_usd),
                    point.donations.to_string(),
                    point.investments.to_string(),
                ]);
            }
            println!("{daily}");

            println!("By payment type:");
            let mut types = Table::new();
            types.load_preset(UTF8_FULL);
            types.set_header(vec!["Type", "Count", "Amount"]);
            for slice in &charts.payment_types {
                types.add_row(vec![
                    slice.payment_type.clone(),
                    slice.count.to_string(),
                    format_usd(slice.amount_usd),
                ]);
            }
            println!("{types}");
        }
    }

    Ok(())
}
