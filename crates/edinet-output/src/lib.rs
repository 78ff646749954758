#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/edinet-tools/edinet-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod report;

pub use export::{ExportError, ExportFormat, Exporter, NOT_AVAILABLE};
pub use report::{Report, format_percent, format_rating, format_yen};
