use anyhow::Context;
use clap::Parser;
use dental_calc::config::toml_config::TomlConfig;
use dental_calc::core::ConfigProvider;
use dental_calc::utils::error::CalcError;
use dental_calc::utils::{logger, validation::Validate};
use dental_calc::{CalculatorEngine, CliConfig, LocalStorage, StdoutStorage};

fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // The config file may turn on verbose logging, so read it before the logger starts.
    if let Some(path) = config.config.clone() {
        let file = TomlConfig::from_file(&path)
            .with_context(|| format!("Failed to load config file '{}'", path))?;
        if let Err(e) = file.validate() {
            exit_with(&e);
        }
        config.merge_file(&file);
    }

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting dental-calc");
    if let Some(path) = &config.config {
        tracing::info!("Loaded configuration from: {}", path);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let result = match config.output_path().map(str::to_string) {
        Some(dir) => CalculatorEngine::new(LocalStorage::new(dir), config).run(),
        None => CalculatorEngine::new(StdoutStorage, config).run(),
    };

    match result {
        Ok(destination) => {
            tracing::info!("Report written to: {}", destination);
            if destination != "stdout" {
                println!("Report saved to: {}", destination);
            }
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}

fn exit_with(e: &CalcError) -> ! {
    tracing::error!(
        "{} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("Error: {}", e.user_friendly_message());
    eprintln!("Hint: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
