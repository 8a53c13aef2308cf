//! License identification for collection license files.
//!
//! - [`identify`]: guesses an SPDX identifier from the text of a license file.
//! - [`spdx`]: maps SPDX identifiers to a [`LicenseRisk`](crate::models::LicenseRisk)
//!   and canonicalizes `SPDX-License-Identifier` tags.

pub mod identify;
pub mod spdx;
