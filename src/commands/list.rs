//! List command implementation

use std::path::PathBuf;

use console::Style;

use crate::commands::helpers::open_store;
use portacode::error::Result;

/// Run list command
pub fn run(store: Option<PathBuf>) -> Result<()> {
    let store = open_store(store)?;
    let records = store.list()?;

    if records.is_empty() {
        println!("No bundles stored.");
        return Ok(());
    }

    println!("Stored bundles ({}):", records.len());
    println!();

    for record in &records {
        println!(
            "  {}  {}",
            Style::new().dim().apply_to(&record.id.to_string()[..8]),
            Style::new().bold().yellow().apply_to(&record.label)
        );
        if let Some(ref executable) = record.filepath_executable {
            println!("    {} {}", Style::new().bold().apply_to("Executable:"), executable);
        }
        if !record.description.is_empty() {
            println!(
                "    {} {}",
                Style::new().bold().apply_to("Description:"),
                record.description
            );
        }
    }

    Ok(())
}
