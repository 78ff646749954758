//! Ranking builder.
//!
//! Companies whose ranked metric is not computable are excluded from ranked
//! positions entirely (never sorted to the bottom with a fabricated value)
//! and reported separately. Ties break on company code ascending, so
//! repeated runs on identical input always produce identical order.

use crate::pipeline::AnalyzedCompany;
use edinet_indicators::{IndicatorSet, Metric};
use edinet_statements::CompanyIdentity;
use serde::Serialize;
use std::cmp::Ordering;
use std::str::FromStr;
use thiserror::Error;

/// Sort direction for a ranking.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Largest value first (default for profitability metrics).
    #[default]
    #[display("desc")]
    Descending,
    /// Smallest value first.
    #[display("asc")]
    Ascending,
}

/// Unrecognized sort order name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort order `{0}` (expected `asc` or `desc`)")]
pub struct UnknownSortOrder(pub String);

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "desc" => Ok(Self::Descending),
            "asc" => Ok(Self::Ascending),
            other => Err(UnknownSortOrder(other.to_string())),
        }
    }
}

/// One ranked company.
#[derive(Debug, Clone, Serialize)]
pub struct RankingEntry {
    /// 1-based rank position, contiguous across ties.
    pub rank: usize,
    /// Company identity.
    pub company: CompanyIdentity,
    /// The ranked metric's value.
    pub value: f64,
    /// Full indicator set for context.
    pub indicators: IndicatorSet,
}

/// Why a company holds no ranked position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    /// The ranked metric was not computable for this company.
    MetricNotComputable,
}

/// A company excluded from ranked positions.
#[derive(Debug, Clone, Serialize)]
pub struct ExcludedEntry {
    /// Company identity.
    pub company: CompanyIdentity,
    /// Why it was excluded.
    pub reason: ExclusionReason,
}

/// A built ranking with its exclusion report.
#[derive(Debug, Clone, Serialize)]
pub struct RankingResult {
    /// Ranked metric.
    pub metric: Metric,
    /// Sort direction used.
    pub order: SortOrder,
    /// Ranked entries, best first per `order`.
    pub entries: Vec<RankingEntry>,
    /// Companies excluded for insufficient data.
    pub excluded: Vec<ExcludedEntry>,
}

impl RankingResult {
    /// Number of companies excluded from ranked positions.
    pub fn excluded_count(&self) -> usize {
        self.excluded.len()
    }
}

/// Build a ranking over an analyzed universe.
///
/// `limit` of `None` (or zero) means no truncation. An empty universe
/// yields an empty ranking, not an error; unknown metric names are rejected
/// earlier, at the point the caller parses them into [`Metric`].
pub fn build_ranking(
    universe: &[AnalyzedCompany],
    metric: Metric,
    order: SortOrder,
    limit: Option<usize>,
) -> RankingResult {
    let mut ranked: Vec<(&AnalyzedCompany, f64)> = Vec::with_capacity(universe.len());
    let mut excluded = Vec::new();

    for analyzed in universe {
        match metric.value(&analyzed.statement, &analyzed.indicators) {
            Some(value) => ranked.push((analyzed, value)),
            None => excluded.push(ExcludedEntry {
                company: analyzed.company.clone(),
                reason: ExclusionReason::MetricNotComputable,
            }),
        }
    }

    ranked.sort_by(|(a, va), (b, vb)| {
        let by_value = match order {
            SortOrder::Descending => vb.total_cmp(va),
            SortOrder::Ascending => va.total_cmp(vb),
        };
        match by_value {
            Ordering::Equal => a.company.code.cmp(&b.company.code),
            unequal => unequal,
        }
    });

    if let Some(limit) = limit.filter(|&l| l > 0) {
        ranked.truncate(limit);
    }

    let entries = ranked
        .into_iter()
        .enumerate()
        .map(|(i, (analyzed, value))| RankingEntry {
            rank: i + 1,
            company: analyzed.company.clone(),
            value,
            indicators: analyzed.indicators,
        })
        .collect();

    RankingResult {
        metric,
        order,
        entries,
        excluded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edinet_indicators::{IndicatorSet, RatingSet, RatingThresholds};
    use edinet_statements::FinancialStatement;

    fn analyzed(code: &str, roe: Option<f64>, net_sales: Option<f64>) -> AnalyzedCompany {
        let statement = FinancialStatement {
            net_sales,
            ..Default::default()
        };
        let indicators = IndicatorSet {
            roe,
            ..Default::default()
        };
        AnalyzedCompany {
            company: CompanyIdentity::new(code, format!("Company {code}")),
            ratings: RatingSet::classify(&indicators, &RatingThresholds::default()),
            statement,
            indicators,
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_descending_ranking_with_exclusion_and_limit() {
        let universe = vec![
            analyzed("E00001", Some(8.0), None),
            analyzed("E00002", None, None),
            analyzed("E00003", Some(15.0), None),
            analyzed("E00004", Some(11.0), None),
        ];

        let result = build_ranking(&universe, Metric::Roe, SortOrder::Descending, Some(2));
        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.entries[0].rank, 1);
        assert_eq!(result.entries[0].company.code, "E00003");
        assert_eq!(result.entries[1].rank, 2);
        assert_eq!(result.entries[1].company.code, "E00004");
        assert_eq!(result.excluded_count(), 1);
        assert_eq!(result.excluded[0].company.code, "E00002");
        assert_eq!(
            result.excluded[0].reason,
            ExclusionReason::MetricNotComputable
        );
    }

    #[test]
    fn test_ties_break_on_company_code_ascending() {
        let universe = vec![
            analyzed("E00009", Some(10.0), None),
            analyzed("E00001", Some(10.0), None),
            analyzed("E00005", Some(10.0), None),
        ];

        let result = build_ranking(&universe, Metric::Roe, SortOrder::Descending, None);
        let codes: Vec<&str> = result
            .entries
            .iter()
            .map(|e| e.company.code.as_str())
            .collect();
        assert_eq!(codes, ["E00001", "E00005", "E00009"]);
        // contiguous 1-based positions even across ties
        let ranks: Vec<usize> = result.entries.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, [1, 2, 3]);
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let universe = vec![
            analyzed("E00002", Some(5.0), None),
            analyzed("E00001", Some(5.0), None),
            analyzed("E00003", Some(-2.0), None),
        ];

        let first = build_ranking(&universe, Metric::Roe, SortOrder::Descending, None);
        let second = build_ranking(&universe, Metric::Roe, SortOrder::Descending, None);
        let order_of = |r: &RankingResult| {
            r.entries
                .iter()
                .map(|e| (e.rank, e.company.code.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(order_of(&first), order_of(&second));
    }

    #[test]
    fn test_ascending_order() {
        let universe = vec![
            analyzed("E00001", Some(20.0), None),
            analyzed("E00002", Some(3.0), None),
        ];
        let result = build_ranking(&universe, Metric::Roe, SortOrder::Ascending, None);
        assert_eq!(result.entries[0].company.code, "E00002");
    }

    #[test]
    fn test_statement_metric_ranking() {
        let universe = vec![
            analyzed("E00001", None, Some(500.0)),
            analyzed("E00002", None, Some(900.0)),
        ];
        let result = build_ranking(&universe, Metric::NetSales, SortOrder::Descending, None);
        assert_eq!(result.entries[0].company.code, "E00002");
        // roe being not computable does not exclude a sales ranking
        assert_eq!(result.excluded_count(), 0);
    }

    #[test]
    fn test_empty_universe_yields_empty_ranking() {
        let result = build_ranking(&[], Metric::Roe, SortOrder::Descending, None);
        assert!(result.entries.is_empty());
        assert!(result.excluded.is_empty());
    }

    #[test]
    fn test_zero_limit_means_no_truncation() {
        let universe = vec![
            analyzed("E00001", Some(1.0), None),
            analyzed("E00002", Some(2.0), None),
        ];
        let result = build_ranking(&universe, Metric::Roe, SortOrder::Descending, Some(0));
        assert_eq!(result.entries.len(), 2);
    }

    #[test]
    fn test_sort_order_parsing() {
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Descending);
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Ascending);
        assert!("up".parse::<SortOrder>().is_err());
    }
}
