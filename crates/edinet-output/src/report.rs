//! Console reports.
//!
//! Human-readable rendering of analysis results, in the style of the
//! original EDINET analysis console: yen amounts scale to 兆/億/万 units,
//! percentages print with two decimals, and absent values print `N/A`.

use edinet_analysis::{AnalyzedCompany, ComparisonRow, ComparisonTable, RankingResult};
use edinet_indicators::Rating;
use std::fmt;

const RULE: &str = "================================================================================";

/// Format a yen amount with Japanese unit scaling (`1.23兆`, `45.60億`).
pub fn format_yen(value: Option<f64>) -> String {
    let Some(v) = value else {
        return "N/A".to_string();
    };
    let abs = v.abs();
    if abs >= 1e12 {
        format!("{:.2}兆", v / 1e12)
    } else if abs >= 1e8 {
        format!("{:.2}億", v / 1e8)
    } else if abs >= 1e4 {
        format!("{:.2}万", v / 1e4)
    } else {
        format!("{v:.0}")
    }
}

/// Format a percentage with two decimals, `N/A` when not computable.
pub fn format_percent(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{v:.2}%"))
}

/// Format a rating with its Japanese label, `N/A` when undefined.
pub fn format_rating(rating: Option<Rating>) -> String {
    rating.map_or_else(|| "N/A".to_string(), |r| r.label_ja().to_string())
}

/// Report wrapper: `Display` renders the console report for a result.
#[derive(Debug)]
pub struct Report<'a, T>(pub &'a T);

impl fmt::Display for Report<'_, RankingResult> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        writeln!(f, "{RULE}")?;
        writeln!(f, "{} ランキング ({})", result.metric, result.order)?;
        writeln!(f, "{RULE}")?;
        for entry in &result.entries {
            let value = if result.metric.is_percentage() {
                format_percent(Some(entry.value))
            } else {
                format_yen(Some(entry.value))
            };
            writeln!(
                f,
                "{:2}. {:<30} {:>16} ({})",
                entry.rank, entry.company.name, value, entry.company.code
            )?;
        }
        if !result.excluded.is_empty() {
            writeln!(f, "---")?;
            for excluded in &result.excluded {
                writeln!(
                    f,
                    "    {:<30} 対象外: データ不足 ({})",
                    excluded.company.name, excluded.company.code
                )?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Report<'_, AnalyzedCompany> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = self.0;
        writeln!(f, "{RULE}")?;
        writeln!(f, "財務分析: {} ({})", a.company.name, a.company.code)?;
        writeln!(f, "{RULE}")?;
        if let Some(period) = &a.statement.fiscal_period {
            writeln!(f, "決算期: {period}")?;
        }
        writeln!(f)?;
        writeln!(f, "【損益計算書】")?;
        writeln!(f, "  売上高:       {}", format_yen(a.statement.net_sales))?;
        writeln!(f, "  営業利益:     {}", format_yen(a.statement.operating_income))?;
        writeln!(f, "  経常利益:     {}", format_yen(a.statement.ordinary_income))?;
        writeln!(f, "  当期純利益:   {}", format_yen(a.statement.net_income))?;
        writeln!(f)?;
        writeln!(f, "【貸借対照表】")?;
        writeln!(f, "  総資産:       {}", format_yen(a.statement.total_assets))?;
        writeln!(f, "  純資産:       {}", format_yen(a.statement.net_assets))?;
        writeln!(f, "  自己資本:     {}", format_yen(a.statement.equity))?;
        writeln!(f)?;
        writeln!(f, "【財務指標】")?;
        writeln!(
            f,
            "  ROE:          {} [{}]",
            format_percent(a.indicators.roe),
            format_rating(a.ratings.profitability)
        )?;
        writeln!(
            f,
            "  ROA:          {} [{}]",
            format_percent(a.indicators.roa),
            format_rating(a.ratings.efficiency)
        )?;
        writeln!(
            f,
            "  自己資本比率: {} [{}]",
            format_percent(a.indicators.equity_ratio),
            format_rating(a.ratings.stability)
        )?;
        writeln!(
            f,
            "  営業利益率:   {}",
            format_percent(a.indicators.operating_margin)
        )?;
        for warning in &a.warnings {
            writeln!(f, "  ⚠ {warning}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Report<'_, ComparisonTable> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.0;
        writeln!(f, "{RULE}")?;
        writeln!(f, "企業比較")?;
        writeln!(f, "{RULE}")?;

        write!(f, "{:<16}", "項目")?;
        for row in &table.rows {
            write!(f, "{:>20}", row.company.name)?;
        }
        writeln!(f)?;

        type Getter = fn(&ComparisonRow) -> Option<f64>;
        let yen_rows: [(&str, Getter); 5] = [
            ("売上高", |r| r.statement.net_sales),
            ("営業利益", |r| r.statement.operating_income),
            ("当期純利益", |r| r.statement.net_income),
            ("総資産", |r| r.statement.total_assets),
            ("自己資本", |r| r.statement.equity),
        ];
        for (label, getter) in yen_rows {
            write!(f, "{label:<16}")?;
            for row in &table.rows {
                write!(f, "{:>20}", format_yen(getter(row)))?;
            }
            writeln!(f)?;
        }

        let pct_rows: [(&str, Getter); 4] = [
            ("ROE", |r| r.indicators.roe),
            ("ROA", |r| r.indicators.roa),
            ("自己資本比率", |r| r.indicators.equity_ratio),
            ("営業利益率", |r| r.indicators.operating_margin),
        ];
        for (label, getter) in pct_rows {
            write!(f, "{label:<16}")?;
            for row in &table.rows {
                write!(f, "{:>20}", format_percent(getter(row)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
