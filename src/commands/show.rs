//! Show command implementation

use std::path::PathBuf;

use console::Style;

use crate::cli::SelectorArgs;
use crate::commands::helpers::open_store;
use portacode::error::Result;
use portacode::{PortableBundle, Repository};

pub fn run(store: Option<PathBuf>, args: SelectorArgs) -> Result<()> {
    let store = open_store(store)?;
    let bundle = store.load(&args.bundle)?;
    display_bundle(&bundle)
}

fn display_bundle(bundle: &PortableBundle) -> Result<()> {
    let bold = Style::new().bold();

    println!("{}", Style::new().bold().yellow().apply_to(bundle.label()));
    println!("  {} {}", bold.apply_to("Id:"), bundle.id());
    if !bundle.description().is_empty() {
        println!("  {} {}", bold.apply_to("Description:"), bundle.description());
    }

    let executable = match bundle.executable_path() {
        Some(entry) if bundle.validate().is_ok() => Style::new().green().apply_to(entry.to_string()),
        Some(entry) => Style::new().red().apply_to(format!("{entry} (not stored)")),
        None => Style::new().red().apply_to("(not set)".to_string()),
    };
    println!("  {} {}", bold.apply_to("Executable:"), executable);

    if !bundle.prepend_text().is_empty() {
        println!("  {} {}", bold.apply_to("Prepend text:"), bundle.prepend_text());
    }
    if !bundle.append_text().is_empty() {
        println!("  {} {}", bold.apply_to("Append text:"), bundle.append_text());
    }

    let repository = bundle.repository();
    println!("  {} {}", bold.apply_to("Fingerprint:"), repository.fingerprint());
    println!("  {} ({})", bold.apply_to("Files:"), repository.len());
    for name in repository.list_object_names()? {
        println!("    {name}");
    }

    Ok(())
}
