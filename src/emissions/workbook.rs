//! Workbook boundary
//!
//! Writes the dataset as a 4-sheet XLSX workbook and reads the primary sheet
//! back into the typed table. The writer serializes `MonthlyRecord` directly,
//! so the sheet's column names and order come from the model's serde renames.
//! Header-name lookup happens once here on read-back; the rest of the crate
//! never addresses columns by string.

use std::collections::HashMap;
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use rust_xlsxwriter::Workbook;

use super::aggregate::{AnnualSummary, QualityBreakdown};
use super::error::{EmissionsError, Result};
use super::series::MonthlyRecord;
use super::table::{EmissionsTable, COLUMNS};
use crate::config::CompanyProfile;

pub const EMISSIONS_SHEET: &str = "Emissions_Data";
pub const COMPANY_SHEET: &str = "Company_Info";
pub const ANNUAL_SHEET: &str = "Annual_Summary";
pub const QUALITY_SHEET: &str = "Data_Quality";

/// Write the full workbook. The file only appears on the final save, so a
/// failed run leaves no partial artifact behind.
pub fn write_workbook(
    table: &EmissionsTable,
    company: &CompanyProfile,
    annual: &[AnnualSummary],
    quality: &[QualityBreakdown],
    path: &Path,
) -> Result<()> {
    let mut workbook = Workbook::new();

    // Sheet 1: the monthly table, one serialized record per row
    let sheet = workbook.add_worksheet();
    sheet.set_name(EMISSIONS_SHEET)?;
    let first = table
        .records()
        .first()
        .ok_or_else(|| EmissionsError::Schema("cannot serialize an empty table".to_string()))?;
    sheet.serialize_headers(0, 0, first)?;
    for record in table.records() {
        sheet.serialize(record)?;
    }

    // Sheet 2: company profile as key/value rows
    let sheet = workbook.add_worksheet();
    sheet.set_name(COMPANY_SHEET)?;
    sheet.write_string(0, 0, "Field")?;
    sheet.write_string(0, 1, "Value")?;
    let profile = [
        ("company_name", company.name.as_str()),
        ("industry", company.industry.as_str()),
        ("location", company.location.as_str()),
        ("reporting_period", company.reporting_period.as_str()),
        ("production_capacity", company.production_capacity.as_str()),
    ];
    for (i, (field, value)) in profile.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, *field)?;
        sheet.write_string(row, 1, *value)?;
    }

    // Sheet 3: per-year rollup
    let sheet = workbook.add_worksheet();
    sheet.set_name(ANNUAL_SHEET)?;
    let annual_header = [
        "Year",
        "Production_Tonnes",
        "Scope1_Total_tCO2e",
        "Scope2_Total_tCO2e",
        "Scope3_Total_tCO2e",
        "Total_Emissions_tCO2e",
        "Emissions_Intensity_tCO2e_per_tonne",
    ];
    for (col, name) in annual_header.iter().enumerate() {
        sheet.write_string(0, col as u16, *name)?;
    }
    for (i, year) in annual.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_number(row, 0, year.year as f64)?;
        sheet.write_number(row, 1, year.production_tonnes)?;
        sheet.write_number(row, 2, year.scope1_total)?;
        sheet.write_number(row, 3, year.scope2_total)?;
        sheet.write_number(row, 4, year.scope3_total)?;
        sheet.write_number(row, 5, year.total_emissions)?;
        sheet.write_number(row, 6, year.mean_intensity)?;
    }

    // Sheet 4: quality tiers per scope
    let sheet = workbook.add_worksheet();
    sheet.set_name(QUALITY_SHEET)?;
    let quality_header = [
        "Scope",
        "Measured_tCO2e",
        "Measured_Percent",
        "Calculated_tCO2e",
        "Calculated_Percent",
        "Estimated_tCO2e",
        "Estimated_Percent",
        "Total_tCO2e",
    ];
    for (col, name) in quality_header.iter().enumerate() {
        sheet.write_string(0, col as u16, *name)?;
    }
    for (i, scope) in quality.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, scope.scope)?;
        sheet.write_number(row, 1, scope.measured)?;
        sheet.write_number(row, 2, scope.measured_percent)?;
        sheet.write_number(row, 3, scope.calculated)?;
        sheet.write_number(row, 4, scope.calculated_percent)?;
        sheet.write_number(row, 5, scope.estimated)?;
        sheet.write_number(row, 6, scope.estimated_percent)?;
        sheet.write_number(row, 7, scope.total)?;
    }

    workbook.save(path)?;
    Ok(())
}

/// Read the primary sheet back into a validated table
pub fn read_emissions_sheet(path: &Path) -> Result<EmissionsTable> {
    if !path.exists() {
        return Err(EmissionsError::MissingInput(path.to_path_buf()));
    }

    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = workbook.worksheet_range(EMISSIONS_SHEET)?;

    let mut rows = range.rows();
    let header = rows.next().ok_or_else(|| {
        EmissionsError::Schema(format!("{} sheet has no header row", EMISSIONS_SHEET))
    })?;
    let columns = SheetColumns::from_header(header)?;

    let records = rows
        .map(|row| columns.record(row))
        .collect::<Result<Vec<_>>>()?;
    EmissionsTable::from_records(records)
}

/// Header-name to cell-index mapping for the primary sheet
#[derive(Debug)]
struct SheetColumns {
    index: HashMap<String, usize>,
}

impl SheetColumns {
    fn from_header(header: &[Data]) -> Result<Self> {
        let mut index = HashMap::new();
        for (i, cell) in header.iter().enumerate() {
            if let Data::String(name) = cell {
                index.insert(name.clone(), i);
            }
        }
        for name in COLUMNS {
            if !index.contains_key(name) {
                return Err(EmissionsError::Schema(format!(
                    "{} sheet is missing column '{}'",
                    EMISSIONS_SHEET, name
                )));
            }
        }
        Ok(SheetColumns { index })
    }

    fn cell<'a>(&self, row: &'a [Data], name: &str) -> Result<&'a Data> {
        let i = *self
            .index
            .get(name)
            .ok_or_else(|| EmissionsError::Schema(format!("unknown column '{}'", name)))?;
        row.get(i).ok_or_else(|| {
            EmissionsError::Schema(format!("row is too short for column '{}'", name))
        })
    }

    fn text(&self, row: &[Data], name: &str) -> Result<String> {
        match self.cell(row, name)? {
            Data::String(value) => Ok(value.clone()),
            other => Err(EmissionsError::Schema(format!(
                "column '{}' holds {:?}, expected text",
                name, other
            ))),
        }
    }

    fn num(&self, row: &[Data], name: &str) -> Result<f64> {
        match self.cell(row, name)? {
            Data::Float(value) => Ok(*value),
            Data::Int(value) => Ok(*value as f64),
            other => Err(EmissionsError::Schema(format!(
                "column '{}' holds {:?}, expected a number",
                name, other
            ))),
        }
    }

    fn record(&self, row: &[Data]) -> Result<MonthlyRecord> {
        Ok(MonthlyRecord {
            date: self.text(row, "Date")?,
            year: self.num(row, "Year")? as i32,
            month: self.num(row, "Month")? as u32,
            month_name: self.text(row, "Month_Name")?,
            production_tonnes: self.num(row, "Production_Tonnes")?,
            scope1_total: self.num(row, "Scope1_Total_tCO2e")?,
            scope1_blast_furnace: self.num(row, "Scope1_Blast_Furnace")?,
            scope1_auxiliary: self.num(row, "Scope1_Auxiliary")?,
            scope1_measured: self.num(row, "Scope1_Measured")?,
            scope1_calculated: self.num(row, "Scope1_Calculated")?,
            scope1_estimated: self.num(row, "Scope1_Estimated")?,
            scope2_total: self.num(row, "Scope2_Total_tCO2e")?,
            scope2_electricity_kwh: self.num(row, "Scope2_Electricity_kWh")?,
            scope2_location_based: self.num(row, "Scope2_Location_Based")?,
            scope2_market_based: self.num(row, "Scope2_Market_Based")?,
            scope2_heating: self.num(row, "Scope2_Heating")?,
            scope2_measured: self.num(row, "Scope2_Measured")?,
            scope2_calculated: self.num(row, "Scope2_Calculated")?,
            scope2_estimated: self.num(row, "Scope2_Estimated")?,
            scope3_total: self.num(row, "Scope3_Total_tCO2e")?,
            scope3_cat1_purchased_goods: self.num(row, "Scope3_Cat1_Purchased_Goods")?,
            scope3_cat4_upstream_transport: self.num(row, "Scope3_Cat4_Upstream_Transport")?,
            scope3_cat9_downstream_transport: self.num(row, "Scope3_Cat9_Downstream_Transport")?,
            scope3_cat12_end_of_life: self.num(row, "Scope3_Cat12_End_of_Life")?,
            scope3_measured: self.num(row, "Scope3_Measured")?,
            scope3_calculated: self.num(row, "Scope3_Calculated")?,
            scope3_estimated: self.num(row, "Scope3_Estimated")?,
            total_emissions: self.num(row, "Total_Emissions_tCO2e")?,
            emissions_intensity: self.num(row, "Emissions_Intensity_tCO2e_per_tonne")?,
            data_quality_score: self.num(row, "Data_Quality_Score")?,
            reporting_standard: self.text(row, "Reporting_Standard")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_row() -> Vec<Data> {
        COLUMNS
            .iter()
            .map(|name| Data::String(name.to_string()))
            .collect()
    }

    #[test]
    fn test_header_with_all_columns_is_accepted() {
        assert!(SheetColumns::from_header(&header_row()).is_ok());
    }

    #[test]
    fn test_missing_column_is_reported_by_name() {
        let mut header = header_row();
        header.retain(|cell| !matches!(cell, Data::String(s) if s == "Scope2_Market_Based"));
        let err = SheetColumns::from_header(&header).unwrap_err();
        assert!(err.to_string().contains("Scope2_Market_Based"));
    }

    #[test]
    fn test_text_cell_in_numeric_column_is_rejected() {
        let columns = SheetColumns::from_header(&header_row()).unwrap();
        let mut row: Vec<Data> = vec![Data::Float(1.0); COLUMNS.len()];
        row[0] = Data::String("2023-01".to_string());
        let err = columns.num(&row, "Date").unwrap_err();
        assert!(matches!(err, EmissionsError::Schema(_)));
    }
}
