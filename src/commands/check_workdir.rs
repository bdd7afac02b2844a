//! Check-workdir command implementation

use std::path::PathBuf;

use console::Style;

use crate::cli::CheckWorkdirArgs;
use crate::commands::helpers::open_store;
use portacode::SandboxFolder;
use portacode::error::Result;

pub fn run(store: Option<PathBuf>, args: CheckWorkdirArgs) -> Result<()> {
    let store = open_store(store)?;
    let bundle = store.load(&args.bundle)?;
    let sandbox = SandboxFolder::new(&args.folder)?;

    bundle.check_working_directory(&sandbox)?;

    println!(
        "{} {} can be staged next to {}",
        Style::new().green().bold().apply_to("OK"),
        args.folder.display(),
        bundle.label()
    );
    Ok(())
}
