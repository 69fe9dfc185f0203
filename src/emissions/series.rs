//! Synthetic monthly emissions series
//!
//! One `MonthlyRecord` per calendar month, derived from a handful of fixed
//! emission factors scaled by production volume. All randomness comes from an
//! injected seeded generator, so a given seed reproduces the table exactly.
//!
//! The serde renames on `MonthlyRecord` are the spreadsheet column names; the
//! workbook writer serializes records straight into the `Emissions_Data`
//! sheet in field order.

use chrono::{Datelike, Months, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::error::Result;
use super::table::EmissionsTable;

/// Length of the reporting period in months
pub const REPORT_MONTHS: usize = 24;

/// First month of the reporting period
pub const START_YEAR: i32 = 2023;

/// Reporting standard label written to every row
pub const REPORTING_STANDARD: &str = "GHG Protocol + ESRS E1";

// Production profile: ~500k tonnes/year with bounded monthly jitter.
const BASE_PRODUCTION_TONNES: f64 = 41_667.0;

// Scope 1: blast furnace benchmark plus auxiliary combustion.
const BLAST_FURNACE_TCO2E_PER_TONNE: f64 = 0.48;
const AUXILIARY_BASE_TCO2E: f64 = 800.0;

// Scope 2: Swedish grid is highly renewable, so the electricity factor is
// small; district heating is biofuel-based.
const ELECTRICITY_KWH_PER_TONNE: f64 = 650.0;
const GRID_TCO2E_PER_KWH: f64 = 0.000_013;
const MARKET_TCO2E_PER_KWH: f64 = 0.000_008;
const HEATING_BASE_MWH: f64 = 2_500.0;
const HEATING_TCO2E_PER_MWH: f64 = 0.015;

// Scope 3: purchased-goods masses per tonne of steel and their factors,
// upstream transport, downstream distribution, end-of-life treatment.
const IRON_ORE_TONNES_PER_TONNE: f64 = 1.6;
const COAL_TONNES_PER_TONNE: f64 = 0.4;
const LIMESTONE_TONNES_PER_TONNE: f64 = 0.2;
const IRON_ORE_TCO2E_PER_TONNE: f64 = 0.05;
const COAL_TCO2E_PER_TONNE: f64 = 0.15;
const LIMESTONE_TCO2E_PER_TONNE: f64 = 0.02;
const TRANSPORT_TKM_PER_TONNE: f64 = 500.0;
const TRANSPORT_TCO2E_PER_TKM: f64 = 0.000_12;
const DOWNSTREAM_TCO2E_PER_TONNE: f64 = 0.05;
const END_OF_LIFE_TCO2E_PER_TONNE: f64 = 0.02;

// Data quality tiers per scope: measured / calculated / estimated shares.
const SCOPE1_QUALITY: (f64, f64) = (0.70, 0.25);
const SCOPE2_QUALITY: (f64, f64) = (0.90, 0.10);
const SCOPE3_QUALITY: (f64, f64) = (0.15, 0.25);

/// One synthetic observation period
///
/// Every tCO2e figure is stored rounded to 2 decimals. Parent totals are sums
/// of the already-rounded components, so the stored ledger adds up exactly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Month")]
    pub month: u32,
    #[serde(rename = "Month_Name")]
    pub month_name: String,

    #[serde(rename = "Production_Tonnes")]
    pub production_tonnes: f64,

    #[serde(rename = "Scope1_Total_tCO2e")]
    pub scope1_total: f64,
    #[serde(rename = "Scope1_Blast_Furnace")]
    pub scope1_blast_furnace: f64,
    #[serde(rename = "Scope1_Auxiliary")]
    pub scope1_auxiliary: f64,
    #[serde(rename = "Scope1_Measured")]
    pub scope1_measured: f64,
    #[serde(rename = "Scope1_Calculated")]
    pub scope1_calculated: f64,
    #[serde(rename = "Scope1_Estimated")]
    pub scope1_estimated: f64,

    #[serde(rename = "Scope2_Total_tCO2e")]
    pub scope2_total: f64,
    #[serde(rename = "Scope2_Electricity_kWh")]
    pub scope2_electricity_kwh: f64,
    #[serde(rename = "Scope2_Location_Based")]
    pub scope2_location_based: f64,
    /// Dual reporting under the GHG Protocol: computed and written out, but
    /// excluded from `scope2_total` everywhere.
    #[serde(rename = "Scope2_Market_Based")]
    pub scope2_market_based: f64,
    #[serde(rename = "Scope2_Heating")]
    pub scope2_heating: f64,
    #[serde(rename = "Scope2_Measured")]
    pub scope2_measured: f64,
    #[serde(rename = "Scope2_Calculated")]
    pub scope2_calculated: f64,
    #[serde(rename = "Scope2_Estimated")]
    pub scope2_estimated: f64,

    #[serde(rename = "Scope3_Total_tCO2e")]
    pub scope3_total: f64,
    #[serde(rename = "Scope3_Cat1_Purchased_Goods")]
    pub scope3_cat1_purchased_goods: f64,
    #[serde(rename = "Scope3_Cat4_Upstream_Transport")]
    pub scope3_cat4_upstream_transport: f64,
    #[serde(rename = "Scope3_Cat9_Downstream_Transport")]
    pub scope3_cat9_downstream_transport: f64,
    #[serde(rename = "Scope3_Cat12_End_of_Life")]
    pub scope3_cat12_end_of_life: f64,
    #[serde(rename = "Scope3_Measured")]
    pub scope3_measured: f64,
    #[serde(rename = "Scope3_Calculated")]
    pub scope3_calculated: f64,
    #[serde(rename = "Scope3_Estimated")]
    pub scope3_estimated: f64,

    #[serde(rename = "Total_Emissions_tCO2e")]
    pub total_emissions: f64,
    #[serde(rename = "Emissions_Intensity_tCO2e_per_tonne")]
    pub emissions_intensity: f64,
    #[serde(rename = "Data_Quality_Score")]
    pub data_quality_score: f64,
    #[serde(rename = "Reporting_Standard")]
    pub reporting_standard: String,
}

/// Seasonal adjustment: winter months run higher energy use.
/// Deterministic function of the calendar month, peak in January.
pub fn seasonal_factor(month: u32) -> f64 {
    1.0 + 0.15 * (2.0 * std::f64::consts::PI * (month as f64 - 1.0) / 12.0).cos()
}

/// Seeded generator for the monthly series
///
/// Random draws happen in a fixed order per month (production jitter, blast
/// furnace jitter, auxiliary offset, heating offset); reordering them breaks
/// seed reproducibility.
pub struct SeriesGenerator {
    rng: StdRng,
    start: NaiveDate,
}

impl SeriesGenerator {
    /// Create a generator with its own seeded random stream
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a generator from an explicit random stream
    pub fn with_rng(rng: StdRng) -> Self {
        SeriesGenerator {
            rng,
            start: NaiveDate::from_ymd_opt(START_YEAR, 1, 1)
                .expect("reporting epoch is a valid calendar date"),
        }
    }

    /// Generate the record for month `index` of the reporting period
    pub fn generate_month(&mut self, index: u32) -> MonthlyRecord {
        let date = self.start + Months::new(index);
        let month = date.month();
        let seasonal = seasonal_factor(month);

        let production =
            BASE_PRODUCTION_TONNES * (0.95 + self.rng.gen_range(-0.08..0.08)) * seasonal;

        // Scope 1: direct emissions
        let blast_furnace =
            round2(production * BLAST_FURNACE_TCO2E_PER_TONNE
                * (0.98 + self.rng.gen_range(-0.05..0.05)));
        let auxiliary = round2(AUXILIARY_BASE_TCO2E + self.rng.gen_range(-100.0..100.0));
        let scope1_total = round2(blast_furnace + auxiliary);
        let (scope1_measured, scope1_calculated, scope1_estimated) =
            quality_split(scope1_total, SCOPE1_QUALITY);

        // Scope 2: energy indirect emissions
        let electricity_kwh = production * ELECTRICITY_KWH_PER_TONNE;
        let location_based = round2(electricity_kwh * GRID_TCO2E_PER_KWH);
        let market_based = round2(electricity_kwh * MARKET_TCO2E_PER_KWH);
        let heating = round2(
            (HEATING_BASE_MWH + self.rng.gen_range(-300.0..300.0)) * HEATING_TCO2E_PER_MWH,
        );
        let scope2_total = round2(location_based + heating);
        let (scope2_measured, scope2_calculated, scope2_estimated) =
            quality_split(scope2_total, SCOPE2_QUALITY);

        // Scope 3: value chain emissions
        let iron_ore_tonnes = production * IRON_ORE_TONNES_PER_TONNE;
        let coal_tonnes = production * COAL_TONNES_PER_TONNE;
        let limestone_tonnes = production * LIMESTONE_TONNES_PER_TONNE;
        let cat1 = round2(
            iron_ore_tonnes * IRON_ORE_TCO2E_PER_TONNE
                + coal_tonnes * COAL_TCO2E_PER_TONNE
                + limestone_tonnes * LIMESTONE_TCO2E_PER_TONNE,
        );
        let cat4 = round2(
            (iron_ore_tonnes + coal_tonnes) * TRANSPORT_TKM_PER_TONNE * TRANSPORT_TCO2E_PER_TKM,
        );
        let cat9 = round2(production * DOWNSTREAM_TCO2E_PER_TONNE);
        let cat12 = round2(production * END_OF_LIFE_TCO2E_PER_TONNE);
        let scope3_total = round2(cat1 + cat4 + cat9 + cat12);
        let (scope3_measured, scope3_calculated, scope3_estimated) =
            quality_split(scope3_total, SCOPE3_QUALITY);

        let production_tonnes = round2(production);
        let total_emissions = round2(scope1_total + scope2_total + scope3_total);
        let emissions_intensity = round3(total_emissions / production_tonnes);
        let measured = scope1_measured + scope2_measured + scope3_measured;
        let data_quality_score = round1(measured / total_emissions * 100.0);

        MonthlyRecord {
            date: date.format("%Y-%m").to_string(),
            year: date.year(),
            month,
            month_name: date.format("%B").to_string(),
            production_tonnes,
            scope1_total,
            scope1_blast_furnace: blast_furnace,
            scope1_auxiliary: auxiliary,
            scope1_measured,
            scope1_calculated,
            scope1_estimated,
            scope2_total,
            scope2_electricity_kwh: electricity_kwh.round(),
            scope2_location_based: location_based,
            scope2_market_based: market_based,
            scope2_heating: heating,
            scope2_measured,
            scope2_calculated,
            scope2_estimated,
            scope3_total,
            scope3_cat1_purchased_goods: cat1,
            scope3_cat4_upstream_transport: cat4,
            scope3_cat9_downstream_transport: cat9,
            scope3_cat12_end_of_life: cat12,
            scope3_measured,
            scope3_calculated,
            scope3_estimated,
            total_emissions,
            emissions_intensity,
            data_quality_score,
            reporting_standard: REPORTING_STANDARD.to_string(),
        }
    }

    /// Generate the full validated 24-row table
    pub fn generate_table(&mut self) -> Result<EmissionsTable> {
        let records = (0..REPORT_MONTHS as u32)
            .map(|index| self.generate_month(index))
            .collect();
        EmissionsTable::from_records(records)
    }
}

/// Split a scope total into measured / calculated / estimated tiers.
/// The estimated tier is the remainder, so the three stored values always sum
/// back to the total despite rounding.
fn quality_split(total: f64, (measured_share, calculated_share): (f64, f64)) -> (f64, f64, f64) {
    let measured = round2(total * measured_share);
    let calculated = round2(total * calculated_share);
    let estimated = round2(total - measured - calculated);
    (measured, calculated, estimated)
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(seed: u64) -> EmissionsTable {
        SeriesGenerator::new(seed).generate_table().unwrap()
    }

    #[test]
    fn test_seasonal_factor_peaks_in_january() {
        assert!((seasonal_factor(1) - 1.15).abs() < 1e-12);
        assert!((seasonal_factor(7) - 0.85).abs() < 1e-12);
        // April and October sit at the shoulder
        assert!((seasonal_factor(4) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_components_sum_to_scope_totals() {
        for record in table(42).records() {
            let scope1 = record.scope1_blast_furnace + record.scope1_auxiliary;
            assert!((scope1 - record.scope1_total).abs() < 0.01, "{}", record.date);

            let scope2 = record.scope2_location_based + record.scope2_heating;
            assert!((scope2 - record.scope2_total).abs() < 0.01, "{}", record.date);

            let scope3 = record.scope3_cat1_purchased_goods
                + record.scope3_cat4_upstream_transport
                + record.scope3_cat9_downstream_transport
                + record.scope3_cat12_end_of_life;
            assert!((scope3 - record.scope3_total).abs() < 0.01, "{}", record.date);

            let total = record.scope1_total + record.scope2_total + record.scope3_total;
            assert!((total - record.total_emissions).abs() < 0.01, "{}", record.date);
        }
    }

    #[test]
    fn test_quality_split_sums_to_scope_totals() {
        for record in table(42).records() {
            let scope1 =
                record.scope1_measured + record.scope1_calculated + record.scope1_estimated;
            assert!((scope1 - record.scope1_total).abs() < 0.01);

            let scope2 =
                record.scope2_measured + record.scope2_calculated + record.scope2_estimated;
            assert!((scope2 - record.scope2_total).abs() < 0.01);

            let scope3 =
                record.scope3_measured + record.scope3_calculated + record.scope3_estimated;
            assert!((scope3 - record.scope3_total).abs() < 0.01);
        }
    }

    #[test]
    fn test_quality_shares_hold_to_rounding() {
        for record in table(42).records() {
            assert!((record.scope1_measured / record.scope1_total - 0.70).abs() < 0.001);
            assert!((record.scope2_measured / record.scope2_total - 0.90).abs() < 0.001);
            assert!((record.scope3_estimated / record.scope3_total - 0.60).abs() < 0.001);
            // Scope 2 has no estimated tier beyond the rounding remainder
            assert!(record.scope2_estimated.abs() <= 0.01);
        }
    }

    #[test]
    fn test_market_based_excluded_from_scope2_total() {
        for record in table(42).records() {
            assert!(record.scope2_market_based > 0.0);
            let without_market = record.scope2_location_based + record.scope2_heating;
            assert!((without_market - record.scope2_total).abs() < 0.01);
        }
    }

    #[test]
    fn test_dates_are_consecutive_calendar_months() {
        let table = table(42);
        let records = table.records();
        assert_eq!(records.len(), REPORT_MONTHS);
        assert_eq!(records[0].date, "2023-01");
        assert_eq!(records[REPORT_MONTHS - 1].date, "2024-12");

        for pair in records.windows(2) {
            let expected_month = pair[0].month % 12 + 1;
            let expected_year = if pair[0].month == 12 {
                pair[0].year + 1
            } else {
                pair[0].year
            };
            assert_eq!(pair[1].month, expected_month);
            assert_eq!(pair[1].year, expected_year);
        }
    }

    #[test]
    fn test_production_always_positive() {
        for record in table(42).records() {
            assert!(record.production_tonnes > 0.0);
        }
    }

    #[test]
    fn test_same_seed_reproduces_table() {
        assert_eq!(table(42).records(), table(42).records());
    }

    #[test]
    fn test_different_seeds_diverge() {
        let a = table(1);
        let b = table(2);
        assert_ne!(
            a.records()[0].production_tonnes,
            b.records()[0].production_tonnes
        );
    }

    #[test]
    fn test_first_month_production_matches_rng_stream() {
        // Drive an identical rng stream by hand: the first draw of the run is
        // the production jitter for month 1 (seasonal factor 1.15).
        let mut rng = StdRng::seed_from_u64(7);
        let jitter: f64 = rng.gen_range(-0.08..0.08);
        let expected = round2(41_667.0 * (0.95 + jitter) * seasonal_factor(1));

        let record = SeriesGenerator::new(7).generate_month(0);
        assert!((record.production_tonnes - expected).abs() < 1e-9);
    }

    #[test]
    fn test_intensity_and_score_derived_from_stored_figures() {
        for record in table(42).records() {
            let intensity = round3(record.total_emissions / record.production_tonnes);
            assert!((record.emissions_intensity - intensity).abs() < 1e-9);

            let measured =
                record.scope1_measured + record.scope2_measured + record.scope3_measured;
            let score = round1(measured / record.total_emissions * 100.0);
            assert!((record.data_quality_score - score).abs() < 1e-9);
        }
    }
}
