use serde::Serialize;

/// A coverage plan from the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Plan {
    pub name: &'static str,
    /// Share of the eligible cost that gets reimbursed, 0..=100.
    pub coverage_percent: u32,
    /// Only cost up to this amount is eligible. 0 means no coverage.
    pub cap: f64,
}

impl Plan {
    pub const fn new(name: &'static str, coverage_percent: u32, cap: f64) -> Self {
        Self {
            name,
            coverage_percent,
            cap,
        }
    }

    /// The no-coverage baseline is never a candidate for best plan.
    pub fn is_real_coverage(&self) -> bool {
        self.coverage_percent > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanResult {
    pub name: String,
    pub coverage_percent: u32,
    pub cap: f64,
    pub self_paid: f64,
    pub savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub cost_without_insurance: f64,
    pub best_plan: String,
    pub best_self_paid: f64,
    pub max_savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub name: String,
    pub self_paid: f64,
}

/// Outcome of running one cost through every plan in a catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub cost: f64,
    pub results: Vec<PlanResult>,
    pub best_index: Option<usize>,
}

impl Comparison {
    pub fn best(&self) -> Option<&PlanResult> {
        self.best_index.and_then(|idx| self.results.get(idx))
    }

    pub fn is_best(&self, idx: usize) -> bool {
        self.best_index == Some(idx)
    }

    pub fn summary(&self) -> Option<Summary> {
        self.best().map(|best| Summary {
            cost_without_insurance: self.cost,
            best_plan: best.name.clone(),
            best_self_paid: best.self_paid,
            max_savings: best.savings,
        })
    }

    pub fn chart_series(&self) -> Vec<ChartPoint> {
        self.results
            .iter()
            .map(|r| ChartPoint {
                name: r.name.clone(),
                self_paid: r.self_paid,
            })
            .collect()
    }
}
