//! Presentation of a [`Comparison`]: display rows, summary and the three
//! output formats (aligned text table, CSV, JSON).

use crate::domain::model::{ChartPoint, Comparison, PlanResult, Summary};
use crate::utils::error::{CalcError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Table => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// Formats an amount as whole euros with thousands separators, e.g. `€1,250`.
pub fn format_euro(amount: f64) -> String {
    let rounded = format!("{:.0}", amount);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) if rest != "0" => ("-", rest),
        Some(rest) => ("", rest),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}€{}", sign, grouped)
}

/// One table row, formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub plan: String,
    pub coverage: String,
    pub max_coverage: String,
    pub self_paid: String,
    pub savings: String,
    pub best: bool,
}

impl DisplayRow {
    fn from_result(result: &PlanResult, best: bool) -> Self {
        Self {
            plan: result.name.clone(),
            coverage: format!("{}%", result.coverage_percent),
            max_coverage: if result.cap > 0.0 {
                format!("€{}", result.cap)
            } else {
                "-".to_string()
            },
            self_paid: format_euro(result.self_paid),
            savings: format_euro(result.savings),
            best,
        }
    }
}

pub fn display_rows(comparison: &Comparison) -> Vec<DisplayRow> {
    comparison
        .results
        .iter()
        .enumerate()
        .map(|(idx, r)| DisplayRow::from_result(r, comparison.is_best(idx)))
        .collect()
}

pub fn render(comparison: &Comparison, format: OutputFormat) -> Result<Vec<u8>> {
    tracing::debug!("Rendering comparison as {:?}", format);
    match format {
        OutputFormat::Table => Ok(render_table(comparison).into_bytes()),
        OutputFormat::Csv => render_csv(comparison),
        OutputFormat::Json => render_json(comparison),
    }
}

const HEADERS: [&str; 5] = ["Plan", "Coverage", "Max coverage", "You pay", "Savings"];

pub fn render_table(comparison: &Comparison) -> String {
    let rows = display_rows(comparison);

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        let cells = [
            &row.plan,
            &row.coverage,
            &row.max_coverage,
            &row.self_paid,
            &row.savings,
        ];
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "Results for {} in dental costs", format_euro(comparison.cost));
    let _ = writeln!(out);

    let header = HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| pad(h, w))
        .collect::<Vec<_>>()
        .join(" | ");
    let _ = writeln!(out, "  {}", header.trim_end());
    let rule = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-");
    let _ = writeln!(out, "  {}", rule);

    for row in &rows {
        let line = [
            &row.plan,
            &row.coverage,
            &row.max_coverage,
            &row.self_paid,
            &row.savings,
        ]
        .iter()
        .zip(widths)
        .map(|(cell, w)| pad(cell, w))
        .collect::<Vec<_>>()
        .join(" | ");
        let marker = if row.best { '*' } else { ' ' };
        let _ = writeln!(out, "{} {}", marker, line.trim_end());
    }

    if let Some(summary) = comparison.summary() {
        let _ = writeln!(out);
        let _ = writeln!(out, "* = best option for this cost");
        let _ = writeln!(out);
        out.push_str(&render_summary(&summary));
    }

    out
}

pub fn render_summary(summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Without insurance: {}",
        format_euro(summary.cost_without_insurance)
    );
    let _ = writeln!(out, "Best option:       {}", summary.best_plan);
    let _ = writeln!(
        out,
        "You pay:           {} (-{})",
        format_euro(summary.best_self_paid),
        format_euro(summary.max_savings)
    );
    let _ = writeln!(out, "Maximum savings:   {}", format_euro(summary.max_savings));
    out
}

fn pad(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    format!("{}{}", cell, " ".repeat(width.saturating_sub(len)))
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    plan: &'a str,
    coverage_percent: u32,
    cap: f64,
    self_paid: f64,
    savings: f64,
    best: bool,
}

pub fn render_csv(comparison: &Comparison) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for (idx, r) in comparison.results.iter().enumerate() {
        writer.serialize(CsvRow {
            plan: &r.name,
            coverage_percent: r.coverage_percent,
            cap: r.cap,
            self_paid: r.self_paid,
            savings: r.savings,
            best: comparison.is_best(idx),
        })?;
    }
    writer
        .into_inner()
        .map_err(|e| CalcError::IoError(e.into_error()))
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    cost: f64,
    generated_at: DateTime<Utc>,
    results: &'a [PlanResult],
    best_index: Option<usize>,
    summary: Option<Summary>,
    chart: Vec<ChartPoint>,
}

pub fn render_json(comparison: &Comparison) -> Result<Vec<u8>> {
    let report = JsonReport {
        cost: comparison.cost,
        generated_at: Utc::now(),
        results: &comparison.results,
        best_index: comparison.best_index,
        summary: comparison.summary(),
        chart: comparison.chart_series(),
    };
    Ok(serde_json::to_vec_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::PLAN_CATALOG;
    use crate::core::comparator::compare;

    #[test]
    fn test_format_euro() {
        assert_eq!(format_euro(0.0), "€0");
        assert_eq!(format_euro(325.0), "€325");
        assert_eq!(format_euro(1000.0), "€1,000");
        assert_eq!(format_euro(1234567.0), "€1,234,567");
        assert_eq!(format_euro(12.3), "€12");
        assert_eq!(format_euro(-0.0), "€0");
    }

    #[test]
    fn test_display_rows() {
        let comparison = compare(700.0, &PLAN_CATALOG).unwrap();
        let rows = display_rows(&comparison);
        assert_eq!(rows.len(), 11);

        assert_eq!(rows[0].coverage, "0%");
        assert_eq!(rows[0].max_coverage, "-");
        assert_eq!(rows[0].self_paid, "€700");

        assert_eq!(rows[3].plan, "75% up to €500");
        assert_eq!(rows[3].max_coverage, "€500");
        assert_eq!(rows[3].self_paid, "€325");
        assert_eq!(rows[3].savings, "€375");

        assert_eq!(rows.iter().filter(|r| r.best).count(), 1);
        assert!(rows[9].best);
    }

    #[test]
    fn test_table_marks_best_and_summarizes() {
        let comparison = compare(700.0, &PLAN_CATALOG).unwrap();
        let table = render_table(&comparison);
        assert!(table.starts_with("Results for €700 in dental costs"));
        assert!(table.contains("* 100% up to €750"));
        assert!(table.contains("Best option:       100% up to €750"));
        assert!(table.contains("Maximum savings:   €700"));
    }

    #[test]
    fn test_csv_output() {
        let comparison = compare(700.0, &PLAN_CATALOG).unwrap();
        let csv = String::from_utf8(render_csv(&comparison).unwrap()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("plan,coverage_percent,cap,self_paid,savings,best")
        );
        assert_eq!(lines.next(), Some("No coverage,0,0.0,700.0,0.0,false"));
        assert_eq!(csv.lines().count(), 12);
        assert!(csv.contains("100% up to €750,100,750.0,0.0,700.0,true"));
    }

    #[test]
    fn test_json_output() {
        let comparison = compare(700.0, &PLAN_CATALOG).unwrap();
        let bytes = render(&comparison, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["cost"], 700.0);
        assert_eq!(value["best_index"], 9);
        assert_eq!(value["results"].as_array().unwrap().len(), 11);
        assert_eq!(value["results"][3]["self_paid"], 325.0);
        assert_eq!(value["summary"]["best_plan"], "100% up to €750");
        assert_eq!(value["chart"][0]["self_paid"], 700.0);
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_output_format_extension() {
        assert_eq!(OutputFormat::Table.extension(), "txt");
        assert_eq!(OutputFormat::Csv.extension(), "csv");
        assert_eq!(OutputFormat::Json.extension(), "json");
    }
}
