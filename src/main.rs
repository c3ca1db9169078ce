use clap::Parser;
use slot_pricing::utils::{error::ErrorSeverity, logger, validation::Validate};
use slot_pricing::{CliConfig, SettingsSource, SlotQuoter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting slot-quote CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let provider = match SettingsSource::from_cli(&config) {
        Ok(provider) => provider,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let quoter = SlotQuoter::new(provider);

    match quoter.next_slot_quote(config.slots_total).await {
        Ok(quote) => {
            tracing::info!(
                "✅ Slot {} quoted at {}",
                quote.next_slot_number,
                quote.price
            );
            println!("{}", serde_json::to_string_pretty(&quote)?);
        }
        Err(e) => {
            tracing::error!("❌ Quote failed: {} (Severity: {:?})", e, e.severity());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
