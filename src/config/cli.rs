use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "listing-summary")]
#[command(about = "Average listing price per neighbourhood group and room type")]
pub struct CliConfig {
    #[arg(long, short, default_value = "listings.csv")]
    pub input_path: String,

    #[arg(long, short, default_value = "summary.csv")]
    pub output_path: String,

    #[arg(long, help = "Also write the summary as JSON to this path")]
    pub json_path: Option<String>,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage per stage")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn json_path(&self) -> Option<&str> {
        self.json_path.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input_path", &self.input_path)?;
        validation::validate_path("output_path", &self.output_path)?;
        if let Some(json_path) = &self.json_path {
            validation::validate_path("json_path", json_path)?;
            validation::validate_file_extensions("json_path", &[json_path.as_str()], &["json"])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::parse_from(["listing-summary"]);
        assert_eq!(config.input_path(), "listings.csv");
        assert_eq!(config.output_path(), "summary.csv");
        assert_eq!(config.json_path(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_rejects_bad_json_path() {
        let config = CliConfig::parse_from([
            "listing-summary",
            "--input-path",
            "nyc.csv",
            "--json-path",
            "summary.txt",
        ]);
        assert_eq!(config.input_path(), "nyc.csv");
        assert!(config.validate().is_err());
    }
}
