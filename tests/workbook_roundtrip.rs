//! End-to-end tests across the workbook boundary

use calamine::{open_workbook, Data, Reader, Xlsx};

use csrd_emissions::charts;
use csrd_emissions::config::{CompanyProfile, ReportConfig};
use csrd_emissions::emissions::table::COLUMNS;
use csrd_emissions::emissions::{aggregate, workbook, EmissionsError, SeriesGenerator};
use csrd_emissions::pipeline;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn workbook_round_trips_the_emissions_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("norrland_stal_emissions.xlsx");

    let table = SeriesGenerator::new(42).generate_table().unwrap();
    let annual = aggregate::annual_summary(&table);
    let quality = aggregate::quality_breakdown(&table);
    workbook::write_workbook(&table, &CompanyProfile::default(), &annual, &quality, &path)
        .unwrap();

    let read_back = workbook::read_emissions_sheet(&path).unwrap();
    assert_eq!(read_back.len(), table.len());

    for (written, read) in table.records().iter().zip(read_back.records()) {
        assert_eq!(written.date, read.date);
        assert_eq!(written.month_name, read.month_name);
        assert_eq!(written.reporting_standard, read.reporting_standard);
        assert_eq!(written.year, read.year);
        assert_eq!(written.month, read.month);
        assert!(close(written.production_tonnes, read.production_tonnes));
        assert!(close(written.scope1_total, read.scope1_total));
        assert!(close(written.scope1_blast_furnace, read.scope1_blast_furnace));
        assert!(close(written.scope1_auxiliary, read.scope1_auxiliary));
        assert!(close(written.scope2_total, read.scope2_total));
        assert!(close(written.scope2_electricity_kwh, read.scope2_electricity_kwh));
        assert!(close(written.scope2_market_based, read.scope2_market_based));
        assert!(close(written.scope3_total, read.scope3_total));
        assert!(close(written.scope3_cat1_purchased_goods, read.scope3_cat1_purchased_goods));
        assert!(close(written.total_emissions, read.total_emissions));
        assert!(close(written.emissions_intensity, read.emissions_intensity));
        assert!(close(written.data_quality_score, read.data_quality_score));
    }
}

#[test]
fn workbook_has_all_four_sheets_with_expected_headers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.xlsx");

    let table = SeriesGenerator::new(42).generate_table().unwrap();
    let annual = aggregate::annual_summary(&table);
    let quality = aggregate::quality_breakdown(&table);
    workbook::write_workbook(&table, &CompanyProfile::default(), &annual, &quality, &path)
        .unwrap();

    let mut book: Xlsx<_> = open_workbook(&path).unwrap();
    for sheet in [
        workbook::EMISSIONS_SHEET,
        workbook::COMPANY_SHEET,
        workbook::ANNUAL_SHEET,
        workbook::QUALITY_SHEET,
    ] {
        assert!(book.worksheet_range(sheet).is_ok(), "missing sheet {}", sheet);
    }

    let range = book.worksheet_range(workbook::EMISSIONS_SHEET).unwrap();
    let header: Vec<String> = range
        .rows()
        .next()
        .unwrap()
        .iter()
        .filter_map(|cell| match cell {
            Data::String(name) => Some(name.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(header, COLUMNS.to_vec());

    // 24 data rows plus the header
    assert_eq!(range.rows().count(), table.len() + 1);
}

#[test]
fn visualizer_aborts_cleanly_when_workbook_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let config = ReportConfig {
        data_dir: dir.path().join("data"),
        screenshots_dir: dir.path().join("powerbi").join("screenshots"),
        ..ReportConfig::default()
    };

    let err = pipeline::run_visuals(&config).unwrap_err();
    assert!(matches!(err, EmissionsError::MissingInput(_)));

    // No artifact may exist, not even the output directory
    for name in [
        charts::STACKED_CHART_FILE,
        charts::INTENSITY_CHART_FILE,
        charts::QUALITY_CHART_FILE,
    ] {
        assert!(!config.chart_path(name).exists());
    }
    assert!(!config.screenshots_dir.exists());
}

#[test]
fn generator_pipeline_writes_the_workbook_where_the_visualizer_expects_it() {
    let dir = tempfile::tempdir().unwrap();
    let config = ReportConfig {
        data_dir: dir.path().join("data"),
        screenshots_dir: dir.path().join("powerbi").join("screenshots"),
        ..ReportConfig::default()
    };

    let table = pipeline::run_generator(&config).unwrap();
    assert!(config.workbook_path().exists());

    let read_back = workbook::read_emissions_sheet(&config.workbook_path()).unwrap();
    assert_eq!(read_back.len(), table.len());
    for (written, read) in table.records().iter().zip(read_back.records()) {
        assert_eq!(written.date, read.date);
        assert!(close(written.total_emissions, read.total_emissions));
    }
}
