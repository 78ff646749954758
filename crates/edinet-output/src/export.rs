//! Export functionality for analysis results.
//!
//! CSV exports use a fixed column order per result type: identity columns
//! first (code, name, industry), then each indicator/rating pair, then raw
//! statement figures. A value that is not computable renders as the literal
//! [`NOT_AVAILABLE`] marker, never as `0` and never as an empty field, so a
//! parsed export can always tell "zero" from "no value".

use edinet_analysis::{AnalyzedCompany, ComparisonRow, ComparisonTable, RankingResult};
use edinet_indicators::Rating;
use edinet_statements::CompanyIdentity;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Marker written for not-computable or absent values in tabular exports.
pub const NOT_AVAILABLE: &str = "NA";

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV output was not valid UTF-8.
    #[error("invalid UTF-8 in CSV output: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

fn finish_csv(wtr: csv::Writer<Vec<u8>>) -> Result<String, ExportError> {
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

fn value_cell(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{v:.2}"))
}

fn rating_cell(rating: Option<Rating>) -> String {
    rating.map_or_else(|| NOT_AVAILABLE.to_string(), |r| r.to_string())
}

fn text_cell(value: Option<&str>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), String::from)
}

/// Shared row shape for per-company exports.
const COMPANY_HEADER: [&str; 17] = [
    "code",
    "name",
    "industry",
    "roe",
    "roe_rating",
    "roa",
    "roa_rating",
    "equity_ratio",
    "equity_ratio_rating",
    "operating_margin",
    "net_sales",
    "operating_income",
    "ordinary_income",
    "net_income",
    "total_assets",
    "net_assets",
    "equity",
];

fn company_record(row: &ComparisonRow) -> Vec<String> {
    vec![
        row.company.code.clone(),
        row.company.name.clone(),
        text_cell(row.company.industry.as_deref()),
        value_cell(row.indicators.roe),
        rating_cell(row.ratings.profitability),
        value_cell(row.indicators.roa),
        rating_cell(row.ratings.efficiency),
        value_cell(row.indicators.equity_ratio),
        rating_cell(row.ratings.stability),
        value_cell(row.indicators.operating_margin),
        value_cell(row.statement.net_sales),
        value_cell(row.statement.operating_income),
        value_cell(row.statement.ordinary_income),
        value_cell(row.statement.net_income),
        value_cell(row.statement.total_assets),
        value_cell(row.statement.net_assets),
        value_cell(row.statement.equity),
    ]
}

impl Exporter for ComparisonTable {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                wtr.write_record(COMPANY_HEADER)?;
                for row in &self.rows {
                    wtr.write_record(company_record(row))?;
                }
                finish_csv(wtr)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for Vec<AnalyzedCompany> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                wtr.write_record(COMPANY_HEADER)?;
                for analyzed in self {
                    let row = ComparisonRow {
                        company: analyzed.company.clone(),
                        statement: analyzed.statement.clone(),
                        indicators: analyzed.indicators,
                        ratings: analyzed.ratings,
                    };
                    wtr.write_record(company_record(&row))?;
                }
                finish_csv(wtr)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for RankingResult {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                wtr.write_record([
                    "rank", "code", "name", "industry", "metric", "value", "reason",
                ])?;
                for entry in &self.entries {
                    wtr.write_record([
                        entry.rank.to_string(),
                        entry.company.code.clone(),
                        entry.company.name.clone(),
                        text_cell(entry.company.industry.as_deref()),
                        self.metric.to_string(),
                        format!("{:.2}", entry.value),
                        String::new(),
                    ])?;
                }
                // excluded companies appear with a reason, never as a bare omission
                for excluded in &self.excluded {
                    wtr.write_record([
                        NOT_AVAILABLE.to_string(),
                        excluded.company.code.clone(),
                        excluded.company.name.clone(),
                        text_cell(excluded.company.industry.as_deref()),
                        self.metric.to_string(),
                        NOT_AVAILABLE.to_string(),
                        "metric_not_computable".to_string(),
                    ])?;
                }
                finish_csv(wtr)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for Vec<CompanyIdentity> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                wtr.write_record(["code", "name", "securities_code", "industry"])?;
                for company in self {
                    wtr.write_record([
                        company.code.clone(),
                        company.name.clone(),
                        text_cell(company.securities_code.as_deref()),
                        text_cell(company.industry.as_deref()),
                    ])?;
                }
                finish_csv(wtr)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edinet_analysis::{SortOrder, analyze, build_ranking, compare};
    use edinet_indicators::{Metric, RatingThresholds};
    use serde_json::json;

    fn analyzed(code: &str, raw: serde_json::Value) -> AnalyzedCompany {
        analyze(
            CompanyIdentity::new(code, format!("Company {code}")),
            &raw,
            &RatingThresholds::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_comparison_csv_distinguishes_absent_from_zero() {
        let companies = vec![
            analyzed("E00001", json!({ "net_income": 0.0, "equity": 100.0 })),
            analyzed("E00002", json!({ "equity": 100.0 })),
        ];
        let table = compare(&companies).unwrap();
        let csv = table.export_to_string(ExportFormat::Csv).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        // zero net income computes roe 0.00; absent net income exports NA
        assert!(lines[1].starts_with("E00001,Company E00001,NA,0.00"));
        assert!(lines[2].starts_with("E00002,Company E00002,NA,NA"));
    }

    #[test]
    fn test_ranking_csv_reports_excluded_with_reason() {
        let universe = vec![
            analyzed("E00001", json!({ "net_income": 15.0, "equity": 100.0 })),
            analyzed("E00002", json!({})),
        ];
        let ranking = build_ranking(&universe, Metric::Roe, SortOrder::Descending, None);
        let csv = ranking.export_to_string(ExportFormat::Csv).unwrap();

        assert!(csv.contains("1,E00001"));
        assert!(csv.contains("NA,E00002"));
        assert!(csv.contains("metric_not_computable"));
    }

    #[test]
    fn test_json_renders_not_computable_as_null() {
        let companies = vec![analyzed("E00001", json!({ "equity": 100.0 }))];
        let table = compare(&companies).unwrap();
        let json = table.export_to_string(ExportFormat::Json).unwrap();
        assert!(json.contains("\"roe\":null"));
    }

    #[test]
    fn test_pretty_json_is_indented() {
        let companies = vec![analyzed("E00001", json!({}))];
        let json = companies
            .export_to_string(ExportFormat::PrettyJson)
            .unwrap();
        assert!(json.contains("  "));
    }

    #[test]
    fn test_company_list_csv() {
        let companies = vec![
            CompanyIdentity {
                code: "E02367".to_string(),
                name: "任天堂株式会社".to_string(),
                securities_code: Some("79740".to_string()),
                industry: Some("機械".to_string()),
            },
            CompanyIdentity::new("E99999", "No Extras KK"),
        ];
        let csv = companies.export_to_string(ExportFormat::Csv).unwrap();
        assert!(csv.contains("E02367,任天堂株式会社,79740,機械"));
        assert!(csv.contains("E99999,No Extras KK,NA,NA"));
    }

    #[test]
    fn test_export_format_extension() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::PrettyJson.extension(), "json");
    }

    #[test]
    fn test_export_to_file() {
        let companies = vec![analyzed("E00001", json!({ "net_income": 10.0 }))];
        let path = std::env::temp_dir().join("edinet_export_test.csv");
        companies.export_to_file(&path, ExportFormat::Csv).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("code,name,industry"));
        std::fs::remove_file(path).ok();
    }
}
