//! Qualitative rating classification.
//!
//! Ratings band each indicator into one of four ordered labels using fixed
//! cut points. The cut points travel with the invocation as an explicit
//! [`RatingThresholds`] value, so a threshold revision is auditable per call
//! rather than hidden in module state, and ratings stay comparable across
//! runs and company sets.

use crate::indicator::IndicatorSet;
use serde::{Deserialize, Serialize};

/// Ordered qualitative band, worst to best.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    /// 要改善 — below every cut point.
    #[display("caution")]
    Caution,
    /// 普通 — meets the fair cut point.
    #[display("fair")]
    Fair,
    /// 良好 — meets the good cut point.
    #[display("good")]
    Good,
    /// 優秀 — meets the excellent cut point.
    #[display("excellent")]
    Excellent,
}

impl Rating {
    /// Japanese label as printed by disclosure analysis reports.
    pub const fn label_ja(&self) -> &'static str {
        match self {
            Self::Excellent => "優秀",
            Self::Good => "良好",
            Self::Fair => "普通",
            Self::Caution => "要改善",
        }
    }
}

/// Cut points for one indicator dimension, in percent.
///
/// A value at or above a cut point earns that band; below all three it is
/// [`Rating::Caution`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bands {
    /// Minimum value for [`Rating::Excellent`].
    pub excellent: f64,
    /// Minimum value for [`Rating::Good`].
    pub good: f64,
    /// Minimum value for [`Rating::Fair`].
    pub fair: f64,
}

impl Bands {
    /// Classify one computed indicator value.
    pub fn classify(&self, value: f64) -> Rating {
        if value >= self.excellent {
            Rating::Excellent
        } else if value >= self.good {
            Rating::Good
        } else if value >= self.fair {
            Rating::Fair
        } else {
            Rating::Caution
        }
    }
}

/// Versioned threshold configuration for all three rated dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingThresholds {
    /// Threshold revision, bumped whenever a cut point changes.
    pub version: u32,
    /// ROE bands (profitability).
    pub profitability: Bands,
    /// ROA bands (efficiency).
    pub efficiency: Bands,
    /// Equity-ratio bands (stability).
    pub stability: Bands,
}

impl Default for RatingThresholds {
    fn default() -> Self {
        Self {
            version: 1,
            profitability: Bands {
                excellent: 15.0,
                good: 10.0,
                fair: 5.0,
            },
            efficiency: Bands {
                excellent: 10.0,
                good: 5.0,
                fair: 2.0,
            },
            stability: Bands {
                excellent: 50.0,
                good: 30.0,
                fair: 20.0,
            },
        }
    }
}

/// Ratings for one indicator set.
///
/// A dimension whose indicator is not computable carries `None`: absence
/// propagates, it never defaults to the worst or best band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RatingSet {
    /// Profitability rating, from ROE.
    pub profitability: Option<Rating>,

    /// Efficiency rating, from ROA.
    pub efficiency: Option<Rating>,

    /// Stability rating, from the equity ratio.
    pub stability: Option<Rating>,
}

impl RatingSet {
    /// Classify an indicator set against the given thresholds.
    pub fn classify(indicators: &IndicatorSet, thresholds: &RatingThresholds) -> Self {
        Self {
            profitability: indicators.roe.map(|v| thresholds.profitability.classify(v)),
            efficiency: indicators.roa.map(|v| thresholds.efficiency.classify(v)),
            stability: indicators
                .equity_ratio
                .map(|v| thresholds.stability.classify(v)),
        }
    }
}
