use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "report-card")]
#[command(about = "Render a student's report card with subject grades")]
pub struct CliConfig {
    /// Path to the TOML report card file
    #[arg(short, long, default_value = "report-card.toml")]
    pub config: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("config", &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["report-card"]);
        assert_eq!(config.config, "report-card.toml");
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_format() {
        let config = CliConfig::parse_from(["report-card", "-c", "asha.toml", "--format", "json"]);
        assert_eq!(config.config, "asha.toml");
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_empty_config_path_is_invalid() {
        let config = CliConfig::parse_from(["report-card", "--config", ""]);
        assert!(config.validate().is_err());
    }
}
