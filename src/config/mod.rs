#[cfg(feature = "cli")]
pub mod cli;
pub mod storage;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use storage::{LocalStorage, StdoutStorage};

/// Cost used when neither the command line nor a config file sets one.
pub const DEFAULT_COST: f64 = 500.0;

/// Upper bound accepted from user input. The core itself has no upper bound.
pub const MAX_INPUT_COST: f64 = 10_000.0;
