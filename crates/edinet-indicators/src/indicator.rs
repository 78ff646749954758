//! Indicator calculation.
//!
//! Each ratio is a pure function of one statement. Results are percentages
//! rounded to two decimal places with round-half-away-from-zero, applied
//! identically to every ratio so boundary classifications are reproducible
//! across runs.

use edinet_statements::FinancialStatement;
use serde::{Deserialize, Serialize};

/// Derived indicators for one (company, fiscal period).
///
/// `None` is the explicit "not computable" marker: the required inputs were
/// absent from the disclosure or the denominator was exactly zero. It is
/// never conflated with a computed value of zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct IndicatorSet {
    /// Return on equity: net income / shareholders' equity, in percent.
    pub roe: Option<f64>,

    /// Return on assets: net income / total assets, in percent.
    pub roa: Option<f64>,

    /// Equity ratio: shareholders' equity / total assets, in percent.
    pub equity_ratio: Option<f64>,

    /// Operating margin: operating income / net sales, in percent.
    pub operating_margin: Option<f64>,
}

impl IndicatorSet {
    /// Compute all indicators from one normalized statement.
    ///
    /// Business-level missing data never raises an error; the affected
    /// indicator is simply not computable.
    pub fn compute(statement: &FinancialStatement) -> Self {
        Self {
            roe: ratio(statement.net_income, statement.equity),
            roa: ratio(statement.net_income, statement.total_assets),
            equity_ratio: ratio(statement.equity, statement.total_assets),
            operating_margin: ratio(statement.operating_income, statement.net_sales),
        }
    }

    /// Whether no indicator could be computed.
    pub const fn is_empty(&self) -> bool {
        self.roe.is_none()
            && self.roa.is_none()
            && self.equity_ratio.is_none()
            && self.operating_margin.is_none()
    }
}

/// Percentage ratio with explicit absence propagation.
fn ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    let n = numerator?;
    let d = denominator?;
    if d == 0.0 {
        return None;
    }
    Some(round2(n / d * 100.0))
}

/// Round to two decimals, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn statement(
        net_income: Option<f64>,
        equity: Option<f64>,
        total_assets: Option<f64>,
    ) -> FinancialStatement {
        FinancialStatement {
            net_income,
            equity,
            total_assets,
            ..Default::default()
        }
    }

    #[test]
    fn test_spec_example_values() {
        let s = statement(
            Some(370_466_000_000.0),
            Some(2_494_640_000_000.0),
            Some(3_000_000_000_000.0),
        );
        let indicators = IndicatorSet::compute(&s);
        assert_relative_eq!(indicators.roe.unwrap(), 14.85);
        assert_relative_eq!(indicators.roa.unwrap(), 12.35);
        assert_relative_eq!(indicators.equity_ratio.unwrap(), 83.15);
    }

    #[test]
    fn test_zero_equity_makes_roe_not_computable() {
        let s = statement(Some(100.0), Some(0.0), Some(500.0));
        let indicators = IndicatorSet::compute(&s);
        assert_eq!(indicators.roe, None);
        assert_relative_eq!(indicators.roa.unwrap(), 20.0);
        // equity of zero is a valid numerator
        assert_relative_eq!(indicators.equity_ratio.unwrap(), 0.0);
    }

    #[rstest]
    #[case(None, Some(100.0))]
    #[case(Some(100.0), None)]
    #[case(None, None)]
    fn test_absent_input_makes_ratio_not_computable(
        #[case] net_income: Option<f64>,
        #[case] equity: Option<f64>,
    ) {
        let s = statement(net_income, equity, None);
        let indicators = IndicatorSet::compute(&s);
        assert_eq!(indicators.roe, None);
        assert_eq!(indicators.roa, None);
    }

    #[test]
    fn test_negative_income_computes_negative_roe() {
        let s = statement(Some(-50.0), Some(1_000.0), Some(2_000.0));
        let indicators = IndicatorSet::compute(&s);
        assert_relative_eq!(indicators.roe.unwrap(), -5.0);
        assert_relative_eq!(indicators.roa.unwrap(), -2.5);
    }

    #[test]
    fn test_operating_margin() {
        let s = FinancialStatement {
            operating_income: Some(528_941_000_000.0),
            net_sales: Some(1_672_077_000_000.0),
            ..Default::default()
        };
        let indicators = IndicatorSet::compute(&s);
        assert_relative_eq!(indicators.operating_margin.unwrap(), 31.63);
    }

    #[rstest]
    #[case(14.854999, 14.85)]
    #[case(14.855001, 14.86)]
    #[case(-2.345001, -2.35)]
    fn test_rounding_half_away_from_zero(#[case] raw: f64, #[case] rounded: f64) {
        assert_relative_eq!(round2(raw), rounded);
    }

    #[test]
    fn test_empty_statement_yields_empty_indicators() {
        let indicators = IndicatorSet::compute(&FinancialStatement::default());
        assert!(indicators.is_empty());
    }
}
