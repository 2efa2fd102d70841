use crate::utils::error::Result;

/// Destination for a rendered report.
pub trait Storage {
    /// Writes `data` under `name` and returns where it ended up.
    fn write_report(&self, name: &str, data: &[u8]) -> Result<String>;
}

pub trait ConfigProvider {
    fn cost(&self) -> f64;
    fn output_format(&self) -> crate::core::report::OutputFormat;
    fn output_path(&self) -> Option<&str>;
    fn report_filename(&self) -> Option<&str> {
        None
    }
}
