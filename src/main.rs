use clap::Parser;
use report_card::utils::{logger, validation::Validate};
use report_card::{CliConfig, OutputFormat, ReportCard, ReportCardError, ReportCardFile};

fn load(config: &CliConfig) -> Result<ReportCard, ReportCardError> {
    config.validate()?;
    let file = ReportCardFile::from_file(&config.config)?;
    file.validate()?;
    file.into_report_card()
}

fn render(card: &ReportCard, format: OutputFormat) -> Result<String, ReportCardError> {
    match format {
        OutputFormat::Text => Ok(card.to_text()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&card.summary())? + "\n"),
    }
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Loading report card from: {}", config.config);
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let output = load(&config).and_then(|card| {
        tracing::info!(
            student = card.name(),
            year = card.year(),
            subjects = card.len(),
            "report card loaded"
        );
        render(&card, config.format)
    });

    match output {
        Ok(text) => {
            print!("{}", text);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Failed to produce report card: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
