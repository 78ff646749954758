//! Canonical financial statement record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One fiscal period's figures for one company, in yen.
///
/// Every figure is a tagged optional: `None` means the disclosure did not
/// carry the field (or it could not be coerced to a number), which is a
/// different state from a reported value of zero. Downstream ratio
/// computation relies on that distinction and never substitutes zero for an
/// absent figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FinancialStatement {
    /// Fiscal period label as reported, e.g. `2024年3月期`.
    pub fiscal_period: Option<String>,

    /// Fiscal year end date.
    pub fiscal_year_end: Option<NaiveDate>,

    /// Net sales (売上高).
    pub net_sales: Option<f64>,

    /// Operating income (営業利益).
    pub operating_income: Option<f64>,

    /// Ordinary income (経常利益).
    pub ordinary_income: Option<f64>,

    /// Net income (当期純利益).
    pub net_income: Option<f64>,

    /// Total assets (総資産).
    pub total_assets: Option<f64>,

    /// Net assets (純資産).
    pub net_assets: Option<f64>,

    /// Shareholders' equity (自己資本).
    pub equity: Option<f64>,
}

impl FinancialStatement {
    /// Whether the period carries no figures at all.
    pub const fn is_empty(&self) -> bool {
        self.net_sales.is_none()
            && self.operating_income.is_none()
            && self.ordinary_income.is_none()
            && self.net_income.is_none()
            && self.total_assets.is_none()
            && self.net_assets.is_none()
            && self.equity.is_none()
    }
}
