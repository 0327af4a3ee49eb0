//! Checks that every `Feature` in a nested GeoJSON `FeatureCollection` carries a
//! `properties.count` at or above a minimum.
//!
//! # Pipeline overview
//!
//! 1. **Load**: `Path -> serde_json::Value` ([`load_document`])
//! 2. **Check**: depth-first walk, stopping at the first feature below the
//!    [`Minimum`] ([`check_document`])
//! 3. **Report**: the summary line and the offending feature ([`write_violation`])
//!
//! Collections may nest to any depth; children are visited in array order.
//! Values that are neither a `Feature` nor a `FeatureCollection` are skipped.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod check;
mod document;
mod foundation;
mod report;

pub use check::minimum::Minimum;
pub use check::walker::{Outcome, Violation, check_document};
pub use document::load::load_document;
pub use document::model::{FEATURE, FEATURE_COLLECTION, Feature, Node};
pub use document::path::{NodePath, PathElem};
pub use foundation::error::{CheckError, CheckResult};
pub use report::diagnostic::{summary_line, write_violation};
