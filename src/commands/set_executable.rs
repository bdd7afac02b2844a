//! Set-executable command implementation

use std::path::PathBuf;

use console::Style;

use crate::cli::SetExecutableArgs;
use crate::commands::helpers::open_store;
use portacode::error::Result;

pub fn run(store: Option<PathBuf>, args: SetExecutableArgs) -> Result<()> {
    let store = open_store(store)?;
    let mut bundle = store.load(&args.bundle)?;

    bundle.set_executable_path(&args.executable)?;
    if !args.no_validate {
        bundle.validate()?;
    }
    store.save(&bundle)?;

    println!(
        "{} executable of {} to {}",
        Style::new().green().bold().apply_to("Set"),
        bundle.label(),
        bundle
            .executable_path()
            .map(ToString::to_string)
            .unwrap_or_default()
    );
    Ok(())
}
