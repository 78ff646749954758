#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/edinet-tools/edinet-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod company;
pub mod error;
pub mod normalize;
pub mod statement;

pub use company::CompanyIdentity;
pub use error::{NormalizeError, Result};
pub use normalize::{FieldWarning, Normalized, normalize};
pub use statement::FinancialStatement;
