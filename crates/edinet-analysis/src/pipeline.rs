//! Per-company analysis pipeline and batch runner.
//!
//! The unit of work is one company: normalize the raw disclosure record,
//! compute indicators, classify ratings. Units are independent and
//! side-effect free, so a batch may evaluate them in any order; final
//! ordering is always imposed later by the ranking builder.

use crate::error::Result;
use edinet_indicators::{IndicatorSet, RatingSet, RatingThresholds};
use edinet_statements::{CompanyIdentity, FieldWarning, FinancialStatement, normalize};
use serde::Serialize;
use serde_json::Value;

/// One company's fully analyzed fiscal period.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzedCompany {
    /// Company identity.
    pub company: CompanyIdentity,
    /// Normalized statement figures.
    pub statement: FinancialStatement,
    /// Derived indicators.
    pub indicators: IndicatorSet,
    /// Qualitative ratings.
    pub ratings: RatingSet,
    /// Data-quality warnings raised during normalization.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<FieldWarning>,
}

/// Analyze one company from its raw statement record.
///
/// # Errors
///
/// Returns an error only for structurally invalid input (the record is not
/// a JSON object). Business-level missing data yields not-computable
/// indicators and undefined ratings instead.
pub fn analyze(
    company: CompanyIdentity,
    raw: &Value,
    thresholds: &RatingThresholds,
) -> Result<AnalyzedCompany> {
    let normalized = normalize(raw)?;
    let indicators = IndicatorSet::compute(&normalized.statement);
    let ratings = RatingSet::classify(&indicators, thresholds);
    Ok(AnalyzedCompany {
        company,
        statement: normalized.statement,
        indicators,
        ratings,
        warnings: normalized.warnings,
    })
}

/// Reason a company was skipped by a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "reason", content = "detail")]
pub enum SkipReason {
    /// The raw record violated the structural contract.
    MalformedRecord(String),
    /// The data source returned no financial record for the company.
    NoFinancialData,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedRecord(detail) => write!(f, "malformed record: {detail}"),
            Self::NoFinancialData => write!(f, "no financial data"),
        }
    }
}

/// A company omitted from a batch result, with its reason.
#[derive(Debug, Clone, Serialize)]
pub struct Skipped {
    /// Company identity.
    pub company: CompanyIdentity,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// Outcome of analyzing a company universe.
///
/// Always reports both successes and skips; a batch never fails as a whole
/// because one input was malformed.
#[derive(Debug, Clone, Serialize)]
pub struct Batch {
    /// Successfully analyzed companies, in input order.
    pub companies: Vec<AnalyzedCompany>,
    /// Companies skipped, with reasons.
    pub skipped: Vec<Skipped>,
}

/// Analyze a universe of companies.
///
/// `None` in place of a raw record means the data source had no financials
/// for that company; it is reported as skipped rather than silently dropped.
pub fn analyze_universe(
    inputs: Vec<(CompanyIdentity, Option<Value>)>,
    thresholds: &RatingThresholds,
) -> Batch {
    let mut companies = Vec::with_capacity(inputs.len());
    let mut skipped = Vec::new();

    for (company, raw) in inputs {
        match raw {
            None => skipped.push(Skipped {
                company,
                reason: SkipReason::NoFinancialData,
            }),
            Some(raw) => match analyze(company.clone(), &raw, thresholds) {
                Ok(analyzed) => companies.push(analyzed),
                Err(err) => skipped.push(Skipped {
                    company,
                    reason: SkipReason::MalformedRecord(err.to_string()),
                }),
            },
        }
    }

    Batch { companies, skipped }
}
