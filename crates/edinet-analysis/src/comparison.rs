//! Side-by-side company comparison.
//!
//! A comparison is about the companies the caller explicitly named: rows
//! keep the caller-supplied order, duplicates stay duplicated, and a company
//! with not-computable indicators appears with undefined markers rather
//! than being silently dropped.

use crate::error::{AnalysisError, Result};
use crate::pipeline::AnalyzedCompany;
use edinet_indicators::{IndicatorSet, RatingSet};
use edinet_statements::{CompanyIdentity, FinancialStatement};
use serde::Serialize;

/// One company's column in a comparison table.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    /// Company identity.
    pub company: CompanyIdentity,
    /// Normalized statement figures.
    pub statement: FinancialStatement,
    /// Derived indicators.
    pub indicators: IndicatorSet,
    /// Qualitative ratings.
    pub ratings: RatingSet,
}

/// A comparison across an explicit company list.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonTable {
    /// Rows in caller-supplied order.
    pub rows: Vec<ComparisonRow>,
}

/// Assemble a comparison table from analyzed companies.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyComparison`] when no companies were given.
pub fn compare(companies: &[AnalyzedCompany]) -> Result<ComparisonTable> {
    if companies.is_empty() {
        return Err(AnalysisError::EmptyComparison);
    }

    let rows = companies
        .iter()
        .map(|analyzed| ComparisonRow {
            company: analyzed.company.clone(),
            statement: analyzed.statement.clone(),
            indicators: analyzed.indicators,
            ratings: analyzed.ratings,
        })
        .collect();

    Ok(ComparisonTable { rows })
}
