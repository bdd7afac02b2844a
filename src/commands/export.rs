//! Export command implementation
//!
//! Dumps the files of a bundle into a folder and writes the bundle's
//! description as `<label>.yaml` next to that folder, so the pair can be
//! imported again with `portacode create --config`.

use std::fs;
use std::path::{Path, PathBuf};

use console::Style;

use crate::cli::ExportArgs;
use crate::commands::helpers::open_store;
use portacode::config::Settings;
use portacode::error::storage::io_at;
use portacode::error::{Result, output_exists};
use portacode::path_utils::make_path_safe;
use portacode::{OverwritePolicy, PortableBundle};

pub fn run(store: Option<PathBuf>, args: ExportArgs) -> Result<()> {
    let store = open_store(store)?;
    let settings = Settings::load(store.root())?;
    let bundle = store.load(&args.bundle)?;
    bundle.validate()?;

    let policy = if args.overwrite {
        OverwritePolicy::Overwrite
    } else {
        settings.export.overwrite
    };

    let target = match args.target {
        Some(target) => absolute(target)?,
        None => absolute(PathBuf::from(make_path_safe(bundle.label())))?,
    };
    let description_path = description_path(&bundle, &target);

    if policy == OverwritePolicy::Fail && description_path.exists() {
        return Err(output_exists(&description_path));
    }

    let manifest = bundle.export(&target)?;
    let written = manifest.materialize(policy)?;

    let mut description = bundle.describe(&target)?;
    if let Some(folder) = target.file_name() {
        description.filepath_files = PathBuf::from(folder);
    }
    fs::write(&description_path, description.to_yaml()?)
        .map_err(|e| io_at("failed to write", &description_path, &e))?;

    println!(
        "{} {} files of {} to {}",
        Style::new().green().bold().apply_to("Exported"),
        written,
        Style::new().bold().yellow().apply_to(bundle.label()),
        target.display()
    );
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Description:"),
        description_path.display()
    );
    Ok(())
}

fn absolute(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = std::env::current_dir().map_err(|e| io_at("failed to resolve", &path, &e))?;
    Ok(cwd.join(path))
}

/// `<parent of target>/<label>.yaml`
fn description_path(bundle: &PortableBundle, target: &Path) -> PathBuf {
    let parent = target.parent().unwrap_or(target);
    parent.join(format!("{}.yaml", make_path_safe(bundle.label())))
}
