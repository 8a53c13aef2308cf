//! Report renderers for inspection results.
//!
//! - [`terminal`]: colored, human-readable blocks, one per analyzer; respects `--quiet`.
//!
//! JSON output is the serialized [`InspectionReport`](crate::models::InspectionReport).

pub mod terminal;
