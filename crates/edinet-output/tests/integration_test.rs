//! End-to-end export tests: analyze real-shaped records, export, and parse
//! the export back to confirm absent values stay distinguishable from zero.

use edinet_analysis::{SortOrder, analyze, build_ranking, compare};
use edinet_indicators::{Metric, RatingThresholds};
use edinet_output::{ExportFormat, Exporter, NOT_AVAILABLE};
use edinet_statements::CompanyIdentity;
use serde_json::json;

fn universe() -> Vec<edinet_analysis::AnalyzedCompany> {
    let thresholds = RatingThresholds::default();
    let inputs = [
        (
            CompanyIdentity::new("E02367", "任天堂株式会社"),
            json!({
                "fiscal_period": "2024年3月期",
                "net_sales": 1_672_077_000_000.0,
                "operating_income": 528_941_000_000.0,
                "net_income": 490_602_000_000.0,
                "total_assets": 3_151_919_000_000.0,
                "equity": 2_500_914_000_000.0,
            }),
        ),
        (
            CompanyIdentity::new("E01825", "株式会社ゼロ利益"),
            json!({
                "net_income": 0.0,
                "total_assets": 100_000_000.0,
                "equity": 40_000_000.0,
            }),
        ),
        (
            CompanyIdentity::new("E02503", "株式会社データ欠損"),
            json!({ "net_sales": 5_000_000.0 }),
        ),
    ];

    inputs
        .into_iter()
        .map(|(company, raw)| analyze(company, &raw, &thresholds).unwrap())
        .collect()
}

fn parse_cell(cell: &str) -> Option<f64> {
    if cell == NOT_AVAILABLE {
        None
    } else {
        Some(cell.parse().expect("numeric cell"))
    }
}

#[test]
fn csv_round_trip_preserves_absent_vs_zero() {
    let table = compare(&universe()).unwrap();
    let csv_text = table.export_to_string(ExportFormat::Csv).unwrap();

    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let headers = reader.headers().unwrap().clone();
    let roe_idx = headers.iter().position(|h| h == "roe").unwrap();
    let code_idx = headers.iter().position(|h| h == "code").unwrap();

    let mut recovered = Vec::new();
    for record in reader.records() {
        let record = record.unwrap();
        recovered.push((record[code_idx].to_string(), parse_cell(&record[roe_idx])));
    }

    let expected: Vec<(String, Option<f64>)> = table
        .rows
        .iter()
        .map(|row| (row.company.code.clone(), row.indicators.roe))
        .collect();
    assert_eq!(recovered, expected);

    // zero ROE and absent ROE must land in different states
    assert_eq!(recovered[1].1, Some(0.0));
    assert_eq!(recovered[2].1, None);
}

#[test]
fn ranking_export_counts_match_universe() {
    let universe = universe();
    let ranking = build_ranking(&universe, Metric::Roe, SortOrder::Descending, Some(2));
    assert_eq!(ranking.entries.len(), 2);
    assert_eq!(ranking.excluded_count(), 1);

    let csv_text = ranking.export_to_string(ExportFormat::Csv).unwrap();
    let data_lines = csv_text.lines().count() - 1;
    // every company of the universe appears exactly once: ranked or excluded
    assert_eq!(data_lines, universe.len());
}

#[test]
fn json_export_mirrors_data_model() {
    let table = compare(&universe()).unwrap();
    let json_text = table.export_to_string(ExportFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json_text).unwrap();

    let rows = value["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["company"]["code"], "E02367");
    assert!(rows[2]["indicators"]["roe"].is_null());
    assert!(rows[2]["ratings"]["profitability"].is_null());
}
