#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/edinet-tools/edinet-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod client;
pub mod error;

pub use client::{CompanyProfile, EdinetClient};
pub use error::{ClientError, Result};
