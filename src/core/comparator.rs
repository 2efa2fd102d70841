use crate::core::allocator::allocate_for_plan;
use crate::domain::model::{Comparison, Plan, PlanResult};
use crate::utils::error::Result;

/// Runs `cost` through every plan and picks the cheapest real plan.
///
/// The no-coverage baseline is kept in the results but never chosen as best.
/// Ties go to the earliest plan in catalog order.
pub fn compare(cost: f64, catalog: &[Plan]) -> Result<Comparison> {
    let results = catalog
        .iter()
        .map(|plan| {
            let self_paid = allocate_for_plan(cost, plan)?;
            Ok(PlanResult {
                name: plan.name.to_string(),
                coverage_percent: plan.coverage_percent,
                cap: plan.cap,
                self_paid,
                savings: cost - self_paid,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let best_index = select_best(catalog, &results);

    match best_index.map(|idx| &results[idx]) {
        Some(best) => tracing::debug!(
            "Best plan for cost {}: {} (self-paid {:.2})",
            cost,
            best.name,
            best.self_paid
        ),
        None => tracing::warn!("No plan with coverage in catalog of {} plans", catalog.len()),
    }

    Ok(Comparison {
        cost,
        results,
        best_index,
    })
}

fn select_best(catalog: &[Plan], results: &[PlanResult]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, (plan, result)) in catalog.iter().zip(results).enumerate() {
        if !plan.is_real_coverage() {
            continue;
        }
        match best {
            Some(current) if results[current].self_paid <= result.self_paid => {}
            _ => best = Some(idx),
        }
    }
    best
}
