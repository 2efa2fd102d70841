use crate::domain::model::Plan;

/// The fixed set of plans every cost is compared against, in display order.
/// The first entry is the no-coverage baseline.
pub const PLAN_CATALOG: [Plan; 11] = [
    Plan::new("No coverage", 0, 0.0),
    Plan::new("75% up to €100", 75, 100.0),
    Plan::new("75% up to €250", 75, 250.0),
    Plan::new("75% up to €500", 75, 500.0),
    Plan::new("75% up to €750", 75, 750.0),
    Plan::new("75% up to €1000", 75, 1000.0),
    Plan::new("100% up to €100", 100, 100.0),
    Plan::new("100% up to €250", 100, 250.0),
    Plan::new("100% up to €500", 100, 500.0),
    Plan::new("100% up to €750", 100, 750.0),
    Plan::new("100% up to €1000", 100, 1000.0),
];
