pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{LocalStorage, StdoutStorage};

pub use crate::core::{
    allocator::allocate, catalog::PLAN_CATALOG, comparator::compare, engine::CalculatorEngine,
    report::render, report::OutputFormat,
};
pub use domain::model::{ChartPoint, Comparison, Plan, PlanResult, Summary};
pub use utils::error::{CalcError, Result};
