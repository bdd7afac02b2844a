//! Create command implementation

use std::path::{Path, PathBuf};

use console::Style;

use crate::cli::CreateArgs;
use crate::commands::helpers::open_store;
use portacode::error::{Result, invalid_input};
use portacode::{BundleBuilder, BundleDescription, PortableBundle};

/// Run create command
pub fn run(store: Option<PathBuf>, args: CreateArgs) -> Result<()> {
    let store = open_store(store)?;

    let bundle = match args.config {
        Some(ref path) => store.import_description(&BundleDescription::load(path)?)?,
        None => {
            let (Some(executable), Some(files)) = (args.executable.as_deref(), args.files.as_deref())
            else {
                return Err(invalid_input(
                    "either --config or both --filepath-executable and --filepath-files are required",
                ));
            };
            let builder = builder_from_args(&args, files);
            store.create_bundle(builder, executable, files)?
        }
    };

    print_created(&bundle);
    Ok(())
}

fn builder_from_args(args: &CreateArgs, files: &Path) -> BundleBuilder {
    let label = args.label.clone().unwrap_or_else(|| default_label(files));
    let mut builder = BundleBuilder::new(label);
    if let Some(ref description) = args.description {
        builder = builder.description(description);
    }
    if let Some(ref text) = args.prepend_text {
        builder = builder.prepend_text(text);
    }
    if let Some(ref text) = args.append_text {
        builder = builder.append_text(text);
    }
    builder
}

/// Folder name of `files`, used when no label is given
fn default_label(files: &Path) -> String {
    files
        .canonicalize()
        .ok()
        .as_deref()
        .and_then(Path::file_name)
        .or_else(|| files.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unknown".to_string())
}

fn print_created(bundle: &PortableBundle) {
    println!(
        "{} {} ({}, {} files)",
        Style::new().green().bold().apply_to("Created"),
        Style::new().bold().yellow().apply_to(bundle.label()),
        bundle.id(),
        bundle.repository().len()
    );
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_label_is_folder_name() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("my-code");
        std::fs::create_dir_all(&dir).unwrap();
        assert_eq!(default_label(&dir), "my-code");
    }

    #[test]
    fn test_default_label_of_missing_folder() {
        assert_eq!(default_label(Path::new("does/not/exist")), "exist");
    }
}
