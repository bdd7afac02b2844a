//! Validate command implementation

use std::path::PathBuf;

use console::Style;

use crate::cli::SelectorArgs;
use crate::commands::helpers::open_store;
use portacode::error::Result;

pub fn run(store: Option<PathBuf>, args: SelectorArgs) -> Result<()> {
    let store = open_store(store)?;
    let bundle = store.load(&args.bundle)?;
    bundle.validate()?;

    println!(
        "{} {}: executable `{}` is stored",
        Style::new().green().bold().apply_to("Valid"),
        bundle.label(),
        bundle
            .executable_path()
            .map(ToString::to_string)
            .unwrap_or_default()
    );
    Ok(())
}
