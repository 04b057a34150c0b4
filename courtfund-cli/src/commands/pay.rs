use clap::Subcommand;
use courtfund_core::format::format_usd_cents;
use courtfund_core::{
    CardDetails, ClientConfig, CourtfundError, PaymentClient, PaymentOutcome, PaymentRequest,
    Result,
};
use dialoguer::{Input, Password};

#[derive(Subcommand)]
pub enum PayCommands {
    /// Create a payment intent and confirm it with card details
    Create {
        /// Amount in cents (e.g. 5000 for $50.00)
        amount: u64,
        /// investment or donation
        #[arg(short = 't', long, default_value = "donation")]
        payment_type: String,
        #[arg(short, long, default_value = "usd")]
        currency: String,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        name: Option<String>,
    },
    /// Simulate a payment without contacting the provider
    Test {
        /// Amount in cents
        amount: u64,
        /// investment or donation
        #[arg(short = 't', long, default_value = "donation")]
        payment_type: String,
    },
}

pub async fn handle_pay_command(cmd: PayCommands, config: &ClientConfig) -> Result<()> {
    let client = PaymentClient::new(config)?;

    match cmd {
        PayCommands::Create {
            amount,
            payment_type,
            currency,
            description,
            email,
            name,
        } => {
            if !config.has_live_key() {
                return Err(CourtfundError::config(
                    "Set COURTFUND_PUBLISHABLE_KEY to a real publishable key before confirming payments",
                ));
            }

            let mut request = build_request(amount, &payment_type)?;
            request.currency = currency;
            request.description = description;
            request.customer_email = email;
            request.customer_name = name;
            request.validate()?;

            let card = prompt_card_details()?;

            println!(
                "Charging {} as a {}...",
                format_usd_cents(amount as f64 / 100.0),
                request.payment_type
            );
            let outcome = client.process_payment(&request, &card).await?;
            report_outcome(&outcome);
        }

        PayCommands::Test {
            amount,
            payment_type,
        } => {
            let request = build_request(amount, &payment_type)?;

            println!(
                "Simulating a {} of {}...",
                request.payment_type,
                format_usd_cents(amount as f64 / 100.0)
            );
            let outcome = client.create_test_payment(&request).await?;
            report_outcome(&outcome);
        }
    }

    Ok(())
}

fn build_request(amount: u64, payment_type: &str) -> Result<PaymentRequest> {
    let payment_type = payment_type
        .parse()
        .map_err(CourtfundError::InvalidRequest)?;
    Ok(PaymentRequest::new(amount, payment_type))
}

fn prompt_card_details() -> Result<CardDetails> {
    let number: String = Input::new().with_prompt("Card number").interact_text()?;
    let exp_month: u8 = Input::new().with_prompt("Expiry month (MM)").interact_text()?;
    let exp_year: u16 = Input::new().with_prompt("Expiry year (YYYY)").interact_text()?;
    let cvc = Password::new().with_prompt("CVC").interact()?;

    Ok(CardDetails {
        number,
        exp_month,
        exp_year,
        cvc,
    })
}

fn report_outcome(outcome: &PaymentOutcome) {
    if outcome.success {
        println!("Payment succeeded");
        if let Some(id) = &outcome.payment_intent_id {
            println!("  Intent: {id}");
        }
    } else if outcome.requires_action {
        println!("Payment requires additional authentication");
        println!("  Complete the charge from the hosted checkout page");
    } else {
        println!(
            "Payment failed: {}",
            outcome.error.as_deref().unwrap_or("unknown error")
        );
    }
}
