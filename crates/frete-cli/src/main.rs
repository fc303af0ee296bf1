//! Operational CLI: quote shipping options and build tracking links using
//! the same stack the host platform embeds.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use frete_core::{Destination, FixedRateConverter, PortugueseMessages, RateRequest, ShipmentItem};
use frete_correios::CorreiosClient;
use frete_rates::{RateEngine, ShipmentTracker};

#[derive(Debug, Parser)]
#[command(name = "frete")]
#[command(about = "Correios shipping quotes from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Quote shipping options for a destination.
    Quote {
        /// Destination postal code (CEP).
        #[arg(long)]
        to: String,
        /// Destination state (UF).
        #[arg(long, default_value = "SP")]
        state: String,
        /// Destination country.
        #[arg(long, default_value = "BR")]
        country: String,
        /// Item weight in kilograms.
        #[arg(long, default_value = "1.0")]
        weight: Decimal,
        /// Item length in centimetres.
        #[arg(long, default_value = "16")]
        length: Decimal,
        /// Item height in centimetres.
        #[arg(long, default_value = "2")]
        height: Decimal,
        /// Item width in centimetres.
        #[arg(long, default_value = "11")]
        width: Decimal,
        #[arg(long, default_value_t = 1)]
        quantity: u32,
        /// Print the full response as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the tracking URL for a shipment code.
    Track { code: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let settings = frete_core::load_settings_from_env()?;

    match cli.command {
        Commands::Quote {
            to,
            state,
            country,
            weight,
            length,
            height,
            width,
            quantity,
            json,
        } => {
            let client = CorreiosClient::new(&settings)?;
            let converter = FixedRateConverter::new(settings.exchange_rate);
            let engine = RateEngine::new(settings, client, converter, PortugueseMessages);

            let request = RateRequest {
                destination: Some(Destination {
                    country: Some(country),
                    state: Some(state),
                    postal_code: Some(to),
                }),
                items: vec![ShipmentItem {
                    weight_kg: weight,
                    length_cm: length,
                    height_cm: height,
                    width_cm: width,
                    quantity,
                }],
            };

            let response = engine.shipping_options(&request).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                for error in &response.errors {
                    eprintln!("error: {error}");
                }
                for option in &response.options {
                    println!("{:>10}  {}", option.rate.to_string(), option.name);
                }
            }
            if !response.is_success() {
                std::process::exit(1);
            }
        }
        Commands::Track { code } => {
            let tracker = ShipmentTracker::from_settings(&settings);
            println!("{}", tracker.tracking_url(&code));
        }
    }

    Ok(())
}
