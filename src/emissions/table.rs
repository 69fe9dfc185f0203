//! Validated emissions table
//!
//! The table owns the 24 monthly records in calendar order. Construction
//! validates the invariants the rest of the pipeline relies on; after that
//! the table is read-only.

use std::fmt;

use super::error::{EmissionsError, Result};
use super::series::{MonthlyRecord, REPORT_MONTHS};

/// Column names of the `Emissions_Data` sheet, in sheet order.
/// Must stay in sync with the serde renames on `MonthlyRecord`.
pub const COLUMNS: [&str; 31] = [
    "Date",
    "Year",
    "Month",
    "Month_Name",
    "Production_Tonnes",
    "Scope1_Total_tCO2e",
    "Scope1_Blast_Furnace",
    "Scope1_Auxiliary",
    "Scope1_Measured",
    "Scope1_Calculated",
    "Scope1_Estimated",
    "Scope2_Total_tCO2e",
    "Scope2_Electricity_kWh",
    "Scope2_Location_Based",
    "Scope2_Market_Based",
    "Scope2_Heating",
    "Scope2_Measured",
    "Scope2_Calculated",
    "Scope2_Estimated",
    "Scope3_Total_tCO2e",
    "Scope3_Cat1_Purchased_Goods",
    "Scope3_Cat4_Upstream_Transport",
    "Scope3_Cat9_Downstream_Transport",
    "Scope3_Cat12_End_of_Life",
    "Scope3_Measured",
    "Scope3_Calculated",
    "Scope3_Estimated",
    "Total_Emissions_tCO2e",
    "Emissions_Intensity_tCO2e_per_tonne",
    "Data_Quality_Score",
    "Reporting_Standard",
];

/// Ordered, immutable sequence of monthly records
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionsTable {
    records: Vec<MonthlyRecord>,
}

impl EmissionsTable {
    /// Build a table from records, validating the dataset invariants:
    /// exactly one row per month, strictly consecutive calendar months,
    /// positive production in every row.
    pub fn from_records(records: Vec<MonthlyRecord>) -> Result<Self> {
        if records.len() != REPORT_MONTHS {
            return Err(EmissionsError::Schema(format!(
                "expected {} monthly rows, found {}",
                REPORT_MONTHS,
                records.len()
            )));
        }

        for record in &records {
            if record.production_tonnes <= 0.0 {
                return Err(EmissionsError::Schema(format!(
                    "non-positive production in {}",
                    record.date
                )));
            }
        }

        for pair in records.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            let expected = if prev.month == 12 {
                (prev.year + 1, 1)
            } else {
                (prev.year, prev.month + 1)
            };
            if (next.year, next.month) != expected {
                return Err(EmissionsError::Schema(format!(
                    "months not consecutive: {} is followed by {}",
                    prev.date, next.date
                )));
            }
        }

        Ok(EmissionsTable { records })
    }

    pub fn records(&self) -> &[MonthlyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whole-period totals for the console summary
    pub fn totals(&self) -> PeriodTotals {
        let n = self.records.len() as f64;
        PeriodTotals {
            production_tonnes: self.records.iter().map(|r| r.production_tonnes).sum(),
            scope1_total: self.records.iter().map(|r| r.scope1_total).sum(),
            scope2_total: self.records.iter().map(|r| r.scope2_total).sum(),
            scope3_total: self.records.iter().map(|r| r.scope3_total).sum(),
            total_emissions: self.records.iter().map(|r| r.total_emissions).sum(),
            mean_intensity: self.records.iter().map(|r| r.emissions_intensity).sum::<f64>() / n,
            mean_quality_score: self.records.iter().map(|r| r.data_quality_score).sum::<f64>()
                / n,
        }
    }
}

/// Summary figures over the whole reporting period
#[derive(Debug, Clone)]
pub struct PeriodTotals {
    pub production_tonnes: f64,
    pub scope1_total: f64,
    pub scope2_total: f64,
    pub scope3_total: f64,
    pub total_emissions: f64,
    pub mean_intensity: f64,
    pub mean_quality_score: f64,
}

impl fmt::Display for PeriodTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Production: {:.0} tonnes", self.production_tonnes)?;
        writeln!(f, "Scope 1 Emissions: {:.0} tCO2e", self.scope1_total)?;
        writeln!(f, "Scope 2 Emissions: {:.0} tCO2e", self.scope2_total)?;
        writeln!(f, "Scope 3 Emissions: {:.0} tCO2e", self.scope3_total)?;
        writeln!(f, "Total Emissions: {:.0} tCO2e", self.total_emissions)?;
        writeln!(
            f,
            "Average Emissions Intensity: {:.3} tCO2e/tonne",
            self.mean_intensity
        )?;
        write!(f, "Data Quality Score: {:.1}%", self.mean_quality_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emissions::series::SeriesGenerator;

    fn records() -> Vec<MonthlyRecord> {
        let mut generator = SeriesGenerator::new(42);
        (0..REPORT_MONTHS as u32)
            .map(|i| generator.generate_month(i))
            .collect()
    }

    #[test]
    fn test_column_inventory_matches_record_shape() {
        assert_eq!(COLUMNS.len(), 32);
        assert_eq!(COLUMNS[0], "Date");
        assert_eq!(COLUMNS[31], "Reporting_Standard");
    }

    #[test]
    fn test_accepts_generated_records() {
        let table = EmissionsTable::from_records(records()).unwrap();
        assert_eq!(table.len(), REPORT_MONTHS);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_rejects_wrong_row_count() {
        let mut rows = records();
        rows.pop();
        assert!(EmissionsTable::from_records(rows).is_err());
    }

    #[test]
    fn test_rejects_month_gap() {
        let mut rows = records();
        rows.remove(5);
        rows.push(rows[0].clone());
        let result = EmissionsTable::from_records(rows);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_non_positive_production() {
        let mut rows = records();
        rows[3].production_tonnes = 0.0;
        assert!(EmissionsTable::from_records(rows).is_err());
    }

    #[test]
    fn test_totals_sum_over_all_rows() {
        let table = EmissionsTable::from_records(records()).unwrap();
        let totals = table.totals();
        let by_hand: f64 = table.records().iter().map(|r| r.total_emissions).sum();
        assert!((totals.total_emissions - by_hand).abs() < 1e-9);
        assert!(totals.production_tonnes > 0.0);
        assert!(totals.mean_quality_score > 0.0 && totals.mean_quality_score < 100.0);
    }
}
