//! Independent, read-only analyzers over an extracted collection directory.
//!
//! Each analyzer produces one piece of evidence. Missing evidence is a normal
//! `Ok` result; only failures of [`Severity::Fatal`](crate::error::Severity)
//! are returned as errors.

use std::path::Path;

use crate::error::Result;

pub mod changelog;
pub mod community;
pub mod license;
pub mod requirements;
pub mod runtime;

pub trait Analyzer {
    type Evidence;

    fn analyze(&self, root: &Path) -> Result<Self::Evidence>;
}
