#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/edinet-tools/edinet-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export main types from sub-crates
pub use edinet_analysis as analysis;
pub use edinet_client as client;
pub use edinet_indicators as indicators;
pub use edinet_output as output;
pub use edinet_statements as statements;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
