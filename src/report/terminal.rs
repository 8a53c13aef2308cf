use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::models::{InspectionReport, LicenseRisk, RequirementEntry};

/// Render a colored terminal report.
pub fn render(report: &InspectionReport, quiet: bool) -> Result<()> {
    if quiet {
        println!("{}", summary_line(report));
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "collection-checkr".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Inspecting: {}\n", report.coordinates);

    for block in blocks(report) {
        println!("{}\n", block);
    }

    Ok(())
}

/// One block of text per analyzer, in a fixed order.
fn blocks(report: &InspectionReport) -> Vec<String> {
    vec![
        registry_block(report),
        runtime_block(report),
        license_block(report),
        changelog_block(report),
        requirements_block(&report.requirements),
        community_block(&report.community_references),
    ]
}

fn registry_block(report: &InspectionReport) -> String {
    match report.exists_in_registry {
        Some(true) => "Source exists in galaxy.".yellow().to_string(),
        Some(false) => "Source does not exist in galaxy.".green().to_string(),
        None => "Registry check skipped.".dimmed().to_string(),
    }
}

fn runtime_block(report: &InspectionReport) -> String {
    match &report.requires_ansible {
        Some(constraint) => format!(
            "{} requires ansible-core version {}",
            report.coordinates,
            constraint.bold()
        ),
        None => "`requires_ansible` does not exist.".red().to_string(),
    }
}

fn license_block(report: &InspectionReport) -> String {
    let license = &report.license;
    if license.is_absent() {
        return "No license file found.".red().to_string();
    }

    let file = license.source_file.as_deref().unwrap_or_default();
    match &license.identifier {
        Some(id) => format!(
            "The license as mentioned in the {} file is {} ({})",
            file,
            id.bold(),
            risk_label(license.risk)
        ),
        None => format!("The license in the {} file could not be identified.", file)
            .yellow()
            .to_string(),
    }
}

fn risk_label(risk: LicenseRisk) -> ColoredString {
    let label = risk.to_string();
    match risk {
        LicenseRisk::Permissive => label.green(),
        LicenseRisk::WeakCopyleft => label.yellow(),
        LicenseRisk::StrongCopyleft => label.red(),
        LicenseRisk::Unknown => label.dimmed(),
    }
}

fn changelog_block(report: &InspectionReport) -> String {
    let changelog = &report.changelog;
    if changelog.is_empty() {
        return "There is no changelog entry found for this version."
            .red()
            .to_string();
    }

    let file = changelog.source_file.as_deref().unwrap_or("changelog");
    let mut block = format!(
        "{} {}:\n",
        "Changelog entries from".bold(),
        file.bold()
    );
    block.push_str(&changelog.lines.join("\n"));
    block
}

fn requirements_block(requirements: &[RequirementEntry]) -> String {
    if requirements.is_empty() {
        return "No Python requirements found.".to_string();
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Package").add_attribute(Attribute::Bold),
            Cell::new("Constraints").add_attribute(Attribute::Bold),
        ]);

    for entry in requirements {
        let constraints = if entry.constraints.is_empty() {
            Cell::new("any").fg(Color::DarkGrey)
        } else {
            Cell::new(entry.constraints.join(", "))
        };
        table.add_row(vec![Cell::new(&entry.name), constraints]);
    }

    format!("{}\n{}", "Python requirements:".bold(), table)
}

fn community_block(references: &[String]) -> String {
    if references.is_empty() {
        return "No community collection references found."
            .green()
            .to_string();
    }

    format!(
        "{}\n{}",
        format!("{} community collection reference(s):", references.len())
            .yellow()
            .bold(),
        references.join("\n")
    )
}

fn summary_line(report: &InspectionReport) -> String {
    let registry = match report.exists_in_registry {
        Some(true) => "yes",
        Some(false) => "no",
        None => "skipped",
    };
    format!(
        "{}  galaxy: {}  requires_ansible: {}  license: {}  changelog: {} line(s)  requirements: {}  community refs: {}",
        report.coordinates,
        registry,
        report.requires_ansible.as_deref().unwrap_or("-"),
        report.license.identifier.as_deref().unwrap_or("-"),
        report.changelog.lines.len(),
        report.requirements.len(),
        report.community_references.len(),
    )
}
