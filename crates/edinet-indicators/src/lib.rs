#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/edinet-tools/edinet-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod indicator;
pub mod metric;
pub mod rating;

pub use indicator::IndicatorSet;
pub use metric::{Metric, MetricCategory, MetricInfo, UnknownMetric, available_metrics};
pub use rating::{Bands, Rating, RatingSet, RatingThresholds};
