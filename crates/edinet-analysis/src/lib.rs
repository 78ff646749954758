#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/edinet-tools/edinet-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod comparison;
pub mod error;
pub mod pipeline;
pub mod ranking;

pub use comparison::{ComparisonRow, ComparisonTable, compare};
pub use error::{AnalysisError, Result};
pub use pipeline::{AnalyzedCompany, Batch, SkipReason, Skipped, analyze, analyze_universe};
pub use ranking::{
    ExcludedEntry, ExclusionReason, RankingEntry, RankingResult, SortOrder, UnknownSortOrder,
    build_ranking,
};
