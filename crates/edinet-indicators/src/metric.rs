//! Metric registry.
//!
//! Central registry of the metrics a ranking can be built over: the derived
//! indicators plus the statement-level figures the data model supports.
//! Metric names arrive from callers (CLI flags, query parameters), so
//! parsing an unknown name is a distinct caller error, never a silent
//! fallback to another metric.

use crate::indicator::IndicatorSet;
use edinet_statements::FinancialStatement;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Metric categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricCategory {
    /// Return-based profitability measures.
    Profitability,
    /// Asset efficiency measures.
    Efficiency,
    /// Balance-sheet stability measures.
    Stability,
    /// Raw statement scale figures (yen amounts).
    Scale,
}

/// A rankable metric.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Return on equity, percent.
    #[display("roe")]
    Roe,
    /// Return on assets, percent.
    #[display("roa")]
    Roa,
    /// Equity ratio, percent.
    #[display("equity_ratio")]
    EquityRatio,
    /// Operating margin, percent.
    #[display("operating_margin")]
    OperatingMargin,
    /// Net sales, yen.
    #[display("net_sales")]
    NetSales,
    /// Operating income, yen.
    #[display("operating_income")]
    OperatingIncome,
    /// Net income, yen.
    #[display("net_income")]
    NetIncome,
    /// Total assets, yen.
    #[display("total_assets")]
    TotalAssets,
}

impl Metric {
    /// All registered metrics, in registry order.
    pub const ALL: [Self; 8] = [
        Self::Roe,
        Self::Roa,
        Self::EquityRatio,
        Self::OperatingMargin,
        Self::NetSales,
        Self::OperatingIncome,
        Self::NetIncome,
        Self::TotalAssets,
    ];

    /// Wire name, matching `FromStr`.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Roe => "roe",
            Self::Roa => "roa",
            Self::EquityRatio => "equity_ratio",
            Self::OperatingMargin => "operating_margin",
            Self::NetSales => "net_sales",
            Self::OperatingIncome => "operating_income",
            Self::NetIncome => "net_income",
            Self::TotalAssets => "total_assets",
        }
    }

    /// Registry category.
    pub const fn category(&self) -> MetricCategory {
        match self {
            Self::Roe | Self::OperatingMargin => MetricCategory::Profitability,
            Self::Roa => MetricCategory::Efficiency,
            Self::EquityRatio => MetricCategory::Stability,
            Self::NetSales | Self::OperatingIncome | Self::NetIncome | Self::TotalAssets => {
                MetricCategory::Scale
            }
        }
    }

    /// Whether values are percentages (as opposed to yen amounts).
    pub const fn is_percentage(&self) -> bool {
        matches!(
            self,
            Self::Roe | Self::Roa | Self::EquityRatio | Self::OperatingMargin
        )
    }

    /// Extract this metric's value for one company.
    ///
    /// `None` means the metric is not computable for this company and the
    /// company must be excluded from ranked positions.
    pub const fn value(
        &self,
        statement: &FinancialStatement,
        indicators: &IndicatorSet,
    ) -> Option<f64> {
        match self {
            Self::Roe => indicators.roe,
            Self::Roa => indicators.roa,
            Self::EquityRatio => indicators.equity_ratio,
            Self::OperatingMargin => indicators.operating_margin,
            Self::NetSales => statement.net_sales,
            Self::OperatingIncome => statement.operating_income,
            Self::NetIncome => statement.net_income,
            Self::TotalAssets => statement.total_assets,
        }
    }
}

/// Unknown metric name supplied by a caller.
///
/// This is a configuration error, reported as such; it is never conflated
/// with "no data" for a known metric.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown metric `{0}` (expected one of: roe, roa, equity_ratio, operating_margin, net_sales, operating_income, net_income, total_assets)")]
pub struct UnknownMetric(pub String);

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| UnknownMetric(s.to_string()))
    }
}

/// Registry metadata for one metric.
#[derive(Debug, Clone, Serialize)]
pub struct MetricInfo {
    /// Wire name.
    pub name: &'static str,
    /// Category.
    pub category: MetricCategory,
    /// What the metric measures.
    pub description: &'static str,
}

/// Get all available metric info.
pub fn available_metrics() -> Vec<MetricInfo> {
    Metric::ALL
        .into_iter()
        .map(|metric| MetricInfo {
            name: metric.name(),
            category: metric.category(),
            description: describe(metric),
        })
        .collect()
}

/// Get metrics in a category.
pub fn metrics_by_category(category: MetricCategory) -> Vec<MetricInfo> {
    available_metrics()
        .into_iter()
        .filter(|info| info.category == category)
        .collect()
}

const fn describe(metric: Metric) -> &'static str {
    match metric {
        Metric::Roe => "Return on equity - net income over shareholders' equity",
        Metric::Roa => "Return on assets - net income over total assets",
        Metric::EquityRatio => "Equity ratio - shareholders' equity over total assets",
        Metric::OperatingMargin => "Operating margin - operating income over net sales",
        Metric::NetSales => "Net sales for the fiscal period",
        Metric::OperatingIncome => "Operating income for the fiscal period",
        Metric::NetIncome => "Net income for the fiscal period",
        Metric::TotalAssets => "Total assets at fiscal year end",
    }
}
