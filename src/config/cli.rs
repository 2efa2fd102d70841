use crate::config::toml_config::TomlConfig;
use crate::config::{DEFAULT_COST, MAX_INPUT_COST};
use crate::core::report::OutputFormat;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "dental-calc")]
#[command(about = "Compare out-of-pocket dental costs across insurance plans")]
pub struct CliConfig {
    /// Expected dental costs per year, in euros [default: 500]
    #[arg(long, allow_negative_numbers = true)]
    pub cost: Option<f64>,

    /// Output format [default: table]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Directory to write the report into instead of stdout
    #[arg(long)]
    pub output_path: Option<String>,

    /// Report file name without extension
    #[arg(long)]
    pub filename: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Fills every setting not given on the command line from `file`.
    pub fn merge_file(&mut self, file: &TomlConfig) {
        if self.cost.is_none() {
            self.cost = file.cost();
        }
        if self.format.is_none() {
            self.format = file.output_format();
        }
        if self.output_path.is_none() {
            self.output_path = file.output_path().map(str::to_string);
        }
        if self.filename.is_none() {
            self.filename = file.filename().map(str::to_string);
        }
        self.verbose |= file.verbose();
    }
}

impl ConfigProvider for CliConfig {
    fn cost(&self) -> f64 {
        self.cost.unwrap_or(DEFAULT_COST)
    }

    fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn report_filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_range("cost", self.cost(), 0.0, MAX_INPUT_COST)?;
        if let Some(path) = &self.output_path {
            validate_path("output_path", path)?;
        }
        if let Some(name) = &self.filename {
            validate_non_empty_string("filename", name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["dental-calc"]);
        assert_eq!(config.cost(), DEFAULT_COST);
        assert_eq!(config.output_format(), OutputFormat::Table);
        assert!(config.output_path().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_arguments() {
        let config = CliConfig::parse_from([
            "dental-calc",
            "--cost",
            "700",
            "--format",
            "json",
            "--output-path",
            "./out",
            "-v",
        ]);
        assert_eq!(config.cost(), 700.0);
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert_eq!(config.output_path(), Some("./out"));
        assert!(config.verbose);
    }

    #[test]
    fn test_cost_outside_input_range_is_rejected() {
        let config = CliConfig {
            cost: Some(10_001.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = CliConfig {
            cost: Some(-5.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_command_line_wins_over_file() {
        let file = TomlConfig::from_toml_str(
            r#"
[input]
cost = 250

[output]
format = "csv"
path = "./from-file"
"#,
        )
        .unwrap();

        let mut config = CliConfig {
            cost: Some(700.0),
            ..Default::default()
        };
        config.merge_file(&file);

        assert_eq!(config.cost(), 700.0);
        assert_eq!(config.output_format(), OutputFormat::Csv);
        assert_eq!(config.output_path(), Some("./from-file"));
    }
}
