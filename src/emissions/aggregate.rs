//! Summary aggregations
//!
//! Pure derivations over a completed table: the per-year rollup for the
//! `Annual_Summary` sheet and the per-scope quality tiers for the
//! `Data_Quality` sheet. Nothing here mutates the table and nothing here can
//! fail: zero totals report 0% instead of dividing.

use super::series::{round1, round2};
use super::table::EmissionsTable;

/// One row of the `Annual_Summary` sheet
#[derive(Debug, Clone, PartialEq)]
pub struct AnnualSummary {
    pub year: i32,
    pub production_tonnes: f64,
    pub scope1_total: f64,
    pub scope2_total: f64,
    pub scope3_total: f64,
    pub total_emissions: f64,
    pub mean_intensity: f64,
}

/// One row of the `Data_Quality` sheet
#[derive(Debug, Clone, PartialEq)]
pub struct QualityBreakdown {
    pub scope: &'static str,
    pub measured: f64,
    pub measured_percent: f64,
    pub calculated: f64,
    pub calculated_percent: f64,
    pub estimated: f64,
    pub estimated_percent: f64,
    pub total: f64,
}

/// Group by year: sum production and every scope total, mean intensity.
/// Years come out in table order, which is chronological.
pub fn annual_summary(table: &EmissionsTable) -> Vec<AnnualSummary> {
    let mut years: Vec<(i32, Vec<&crate::emissions::MonthlyRecord>)> = Vec::new();
    for record in table.records() {
        match years.last_mut() {
            Some((year, group)) if *year == record.year => group.push(record),
            _ => years.push((record.year, vec![record])),
        }
    }

    years
        .into_iter()
        .map(|(year, group)| {
            let n = group.len() as f64;
            AnnualSummary {
                year,
                production_tonnes: round2(group.iter().map(|r| r.production_tonnes).sum()),
                scope1_total: round2(group.iter().map(|r| r.scope1_total).sum()),
                scope2_total: round2(group.iter().map(|r| r.scope2_total).sum()),
                scope3_total: round2(group.iter().map(|r| r.scope3_total).sum()),
                total_emissions: round2(group.iter().map(|r| r.total_emissions).sum()),
                mean_intensity: round2(
                    group.iter().map(|r| r.emissions_intensity).sum::<f64>() / n,
                ),
            }
        })
        .collect()
}

/// Per-scope sums of the measured / calculated / estimated tiers, each also
/// expressed as a percentage of the scope's summed total.
pub fn quality_breakdown(table: &EmissionsTable) -> Vec<QualityBreakdown> {
    let records = table.records();
    let tiers: [(&'static str, fn(&crate::emissions::MonthlyRecord) -> (f64, f64, f64)); 3] = [
        ("Scope 1", |r| {
            (r.scope1_measured, r.scope1_calculated, r.scope1_estimated)
        }),
        ("Scope 2", |r| {
            (r.scope2_measured, r.scope2_calculated, r.scope2_estimated)
        }),
        ("Scope 3", |r| {
            (r.scope3_measured, r.scope3_calculated, r.scope3_estimated)
        }),
    ];

    tiers
        .into_iter()
        .map(|(scope, tier)| {
            let mut measured = 0.0;
            let mut calculated = 0.0;
            let mut estimated = 0.0;
            for record in records {
                let (m, c, e) = tier(record);
                measured += m;
                calculated += c;
                estimated += e;
            }
            let total = measured + calculated + estimated;
            QualityBreakdown {
                scope,
                measured: round2(measured),
                measured_percent: percent(measured, total),
                calculated: round2(calculated),
                calculated_percent: percent(calculated, total),
                estimated: round2(estimated),
                estimated_percent: percent(estimated, total),
                total: round2(total),
            }
        })
        .collect()
}

/// Share of `part` in `total` as a percentage, 1 decimal.
/// A zero or negative total reports 0% instead of propagating a division
/// fault; illustrative data never hits this in practice but the guard is a
/// tested contract.
fn percent(part: f64, total: f64) -> f64 {
    if total <= 0.0 {
        0.0
    } else {
        round1(part / total * 100.0)
    }
}
