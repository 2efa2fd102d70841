use crate::core::catalog::PLAN_CATALOG;
use crate::core::comparator::compare;
use crate::core::report::render;
use crate::core::{ConfigProvider, Storage};
use crate::domain::model::{Comparison, Plan};
use crate::utils::error::Result;

pub const DEFAULT_REPORT_NAME: &str = "dental_costs";

pub struct CalculatorEngine<'a, S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    catalog: &'a [Plan],
}

impl<S: Storage, C: ConfigProvider> CalculatorEngine<'static, S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self::with_catalog(storage, config, &PLAN_CATALOG)
    }
}

impl<'a, S: Storage, C: ConfigProvider> CalculatorEngine<'a, S, C> {
    pub fn with_catalog(storage: S, config: C, catalog: &'a [Plan]) -> Self {
        Self {
            storage,
            config,
            catalog,
        }
    }

    pub fn compare(&self) -> Result<Comparison> {
        let cost = self.config.cost();
        tracing::info!("Comparing {} plans for cost {}", self.catalog.len(), cost);
        compare(cost, self.catalog)
    }

    /// Compares, renders and stores the report. Returns where it was written.
    pub fn run(&self) -> Result<String> {
        let comparison = self.compare()?;
        if let Some(best) = comparison.best() {
            tracing::info!(
                "Best option: {} (self-paid {:.2}, savings {:.2})",
                best.name,
                best.self_paid,
                best.savings
            );
        }

        let format = self.config.output_format();
        let data = render(&comparison, format)?;

        let name = format!(
            "{}.{}",
            self.config.report_filename().unwrap_or(DEFAULT_REPORT_NAME),
            format.extension()
        );
        let destination = self.storage.write_report(&name, &data)?;
        tracing::debug!("Wrote {} bytes to {}", data.len(), destination);

        Ok(destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::OutputFormat;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStorage {
        written: RefCell<Vec<(String, Vec<u8>)>>,
    }

    impl Storage for &MemoryStorage {
        fn write_report(&self, name: &str, data: &[u8]) -> Result<String> {
            self.written
                .borrow_mut()
                .push((name.to_string(), data.to_vec()));
            Ok(format!("memory://{}", name))
        }
    }

    struct FixedConfig {
        cost: f64,
        format: OutputFormat,
    }

    impl ConfigProvider for FixedConfig {
        fn cost(&self) -> f64 {
            self.cost
        }

        fn output_format(&self) -> OutputFormat {
            self.format
        }

        fn output_path(&self) -> Option<&str> {
            None
        }
    }

    #[test]
    fn test_run_writes_rendered_report() {
        let storage = MemoryStorage::default();
        let config = FixedConfig {
            cost: 700.0,
            format: OutputFormat::Csv,
        };
        let engine = CalculatorEngine::new(&storage, config);

        let destination = engine.run().unwrap();
        assert_eq!(destination, "memory://dental_costs.csv");

        let written = storage.written.borrow();
        assert_eq!(written.len(), 1);
        let csv = String::from_utf8(written[0].1.clone()).unwrap();
        assert!(csv.contains("75% up to €500,75,500.0,325.0,375.0,false"));
    }

    #[test]
    fn test_run_rejects_negative_cost_without_writing() {
        let storage = MemoryStorage::default();
        let config = FixedConfig {
            cost: -1.0,
            format: OutputFormat::Table,
        };
        let engine = CalculatorEngine::new(&storage, config);

        assert!(engine.run().is_err());
        assert!(storage.written.borrow().is_empty());
    }

    #[test]
    fn test_custom_catalog() {
        let storage = MemoryStorage::default();
        let catalog = [
            Plan::new("None", 0, 0.0),
            Plan::new("Half up to €200", 50, 200.0),
        ];
        let config = FixedConfig {
            cost: 300.0,
            format: OutputFormat::Json,
        };
        let engine = CalculatorEngine::with_catalog(&storage, config, &catalog);

        let comparison = engine.compare().unwrap();
        assert_eq!(comparison.best_index, Some(1));
        assert_eq!(comparison.results[1].self_paid, 200.0);
    }
}
