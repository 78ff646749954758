//! Raw record normalization.
//!
//! The EDINET DB API returns financial records as loosely typed JSON. Field
//! names vary between API revisions (`equity` vs `shareholders_equity`),
//! figures arrive as numbers or as numeric strings, and any field may be
//! missing. This module is the only place that performs name-based lookup on
//! those payloads; everything past it works on [`FinancialStatement`].

use crate::error::{NormalizeError, Result};
use crate::statement::FinancialStatement;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};

/// Accepted key aliases per canonical figure, in lookup order.
const FIGURE_ALIASES: &[(&str, &[&str])] = &[
    ("net_sales", &["net_sales", "sales", "revenue"]),
    ("operating_income", &["operating_income"]),
    ("ordinary_income", &["ordinary_income"]),
    ("net_income", &["net_income", "profit"]),
    ("total_assets", &["total_assets"]),
    ("net_assets", &["net_assets"]),
    ("equity", &["equity", "shareholders_equity"]),
];

/// A data-quality warning produced while normalizing one record.
///
/// Warnings never abort processing; the affected figure is recorded as
/// absent and the caller decides whether to surface the warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldWarning {
    /// Canonical field name the warning applies to.
    pub field: &'static str,
    /// Raw value that could not be coerced, rendered as JSON text.
    pub raw: String,
}

impl std::fmt::Display for FieldWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field `{}`: non-numeric value {}", self.field, self.raw)
    }
}

/// A normalized statement together with the warnings raised producing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    /// The canonical statement record.
    pub statement: FinancialStatement,
    /// Data-quality warnings, empty for clean input.
    pub warnings: Vec<FieldWarning>,
}

/// Normalize one raw statement record.
///
/// A figure is absent when its key is missing from the payload or the value
/// is JSON `null`; a present but non-numeric value is also treated as absent
/// and reported through [`Normalized::warnings`] (and `tracing::warn!`).
/// Only a record that is not a JSON object at all is an error.
///
/// # Errors
///
/// Returns [`NormalizeError::NotAnObject`] when `raw` is not a JSON object.
pub fn normalize(raw: &Value) -> Result<Normalized> {
    let map = raw.as_object().ok_or(NormalizeError::NotAnObject {
        kind: json_kind(raw),
    })?;

    let mut warnings = Vec::new();
    let mut statement = FinancialStatement {
        fiscal_period: string_field(map, "fiscal_period"),
        fiscal_year_end: date_field(map, "fiscal_year_end_date"),
        ..Default::default()
    };

    for &(canonical, aliases) in FIGURE_ALIASES {
        let figure = numeric_field(map, canonical, aliases, &mut warnings);
        match canonical {
            "net_sales" => statement.net_sales = figure,
            "operating_income" => statement.operating_income = figure,
            "ordinary_income" => statement.ordinary_income = figure,
            "net_income" => statement.net_income = figure,
            "total_assets" => statement.total_assets = figure,
            "net_assets" => statement.net_assets = figure,
            "equity" => statement.equity = figure,
            _ => unreachable!("alias table and match arms must agree"),
        }
    }

    Ok(Normalized {
        statement,
        warnings,
    })
}

fn numeric_field(
    map: &Map<String, Value>,
    canonical: &'static str,
    aliases: &[&str],
    warnings: &mut Vec<FieldWarning>,
) -> Option<f64> {
    let value = aliases.iter().find_map(|key| map.get(*key))?;
    match coerce_number(value) {
        Coerced::Number(n) => Some(n),
        Coerced::Absent => None,
        Coerced::Malformed => {
            let warning = FieldWarning {
                field: canonical,
                raw: value.to_string(),
            };
            tracing::warn!(field = canonical, raw = %warning.raw, "non-numeric figure in raw statement");
            warnings.push(warning);
            None
        }
    }
}

enum Coerced {
    Number(f64),
    Absent,
    Malformed,
}

fn coerce_number(value: &Value) -> Coerced {
    match value {
        Value::Null => Coerced::Absent,
        Value::Number(n) => n.as_f64().map_or(Coerced::Malformed, Coerced::Number),
        Value::String(s) => {
            // The API occasionally formats figures with thousands separators.
            let cleaned = s.trim().replace(',', "");
            if cleaned.is_empty() {
                Coerced::Absent
            } else {
                cleaned
                    .parse::<f64>()
                    .map_or(Coerced::Malformed, Coerced::Number)
            }
        }
        _ => Coerced::Malformed,
    }
}

fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn date_field(map: &Map<String, Value>, key: &str) -> Option<NaiveDate> {
    string_field(map, key).and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
