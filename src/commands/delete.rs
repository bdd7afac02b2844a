//! Delete command implementation

use std::path::PathBuf;

use console::Style;

use crate::cli::SelectorArgs;
use crate::commands::helpers::open_store;
use portacode::error::Result;

pub fn run(store: Option<PathBuf>, args: SelectorArgs) -> Result<()> {
    let store = open_store(store)?;
    let record = store.delete(&args.bundle)?;

    println!(
        "{} {} ({})",
        Style::new().red().bold().apply_to("Deleted"),
        record.label,
        record.id
    );
    Ok(())
}
