use crate::models::LicenseRisk;

/// License families [`identify`](super::identify::identify) can report, by base SPDX id.
const FAMILIES: &[(&str, LicenseRisk)] = &[
    ("MIT", LicenseRisk::Permissive),
    ("MIT-0", LicenseRisk::Permissive),
    ("Apache-2.0", LicenseRisk::Permissive),
    ("BSD-2-Clause", LicenseRisk::Permissive),
    ("BSD-3-Clause", LicenseRisk::Permissive),
    ("ISC", LicenseRisk::Permissive),
    ("0BSD", LicenseRisk::Permissive),
    ("Unlicense", LicenseRisk::Permissive),
    ("CC0-1.0", LicenseRisk::Permissive),
    ("LGPL-2.0", LicenseRisk::WeakCopyleft),
    ("LGPL-2.1", LicenseRisk::WeakCopyleft),
    ("LGPL-3.0", LicenseRisk::WeakCopyleft),
    ("MPL-2.0", LicenseRisk::WeakCopyleft),
    ("GPL-1.0", LicenseRisk::StrongCopyleft),
    ("GPL-2.0", LicenseRisk::StrongCopyleft),
    ("GPL-3.0", LicenseRisk::StrongCopyleft),
    ("AGPL-3.0", LicenseRisk::StrongCopyleft),
];

/// Risk level of an SPDX identifier. `-only` and `-or-later` variants share
/// the risk of their family; ids outside [`FAMILIES`] are `Unknown`.
pub fn classify_spdx_id(id: &str) -> LicenseRisk {
    let (base, _) = split_suffix(id.trim());
    FAMILIES
        .iter()
        .find(|(known, _)| *known == base)
        .map(|(_, risk)| *risk)
        .unwrap_or_default()
}

/// Canonical spelling of an `SPDX-License-Identifier:` value.
///
/// Known families match case-insensitively and the deprecated `+` suffix is
/// rewritten to `-or-later`. Anything else is returned trimmed but unchanged.
pub fn canonical_tag(raw: &str) -> String {
    let raw = raw.trim();
    let (base, suffix) = split_suffix(raw);
    let suffix = if suffix == "+" { "-or-later" } else { suffix };

    match FAMILIES.iter().find(|(known, _)| known.eq_ignore_ascii_case(base)) {
        Some((known, _)) => format!("{known}{suffix}"),
        None => raw.to_string(),
    }
}

fn split_suffix(id: &str) -> (&str, &str) {
    ["-or-later", "-only", "+"]
        .iter()
        .find_map(|suffix| id.strip_suffix(suffix).map(|base| (base, *suffix)))
        .unwrap_or((id, ""))
}
