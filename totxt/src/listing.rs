use anyhow::Context;
use std::ops::Not;
use std::path::{Path, PathBuf};

const SOURCE_EXTENSIONS: [&str; 2] = ["js", "html"];
const TARGET_EXTENSION: &str = "txt";

/// A direct child of the target directory that shall be converted, together with the `.txt` path it becomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibleEntry {
    pub source: PathBuf,
    pub target: PathBuf,
}

/// Enumerates the files of `directory` that carry a matching extension.
/// Subdirectories are not descended into; a directory whose name looks like `foo.js` is skipped because it is not a file.
/// Failing to list the directory itself is fatal, everything else is just filtered out.
pub fn eligible_entries(directory: &Path) -> anyhow::Result<Vec<EligibleEntry>> {
    let read_dir = std::fs::read_dir(directory)
        .with_context(|| format!("Cannot list directory '{}'", directory.display()))?;

    let mut entries = Vec::new();

    for dir_entry in read_dir {
        let dir_entry = dir_entry
            .with_context(|| format!("Cannot enumerate directory '{}'", directory.display()))?;

        let path = dir_entry.path();

        if path.is_file().not() {
            continue;
        }

        if let Some(target) = target_path(&path) {
            entries.push(EligibleEntry { source: path, target });
        }
    }

    entries.sort_by_key(|entry| entry.source.as_os_str().to_ascii_lowercase());

    Ok(entries)
}

/// The `.txt` path for `path`, or [None] when the extension does not match `.js`/`.html` (ASCII case-insensitive).
fn target_path(path: &Path) -> Option<PathBuf> {
    let extension = path.extension()?;

    SOURCE_EXTENSIONS
        .iter()
        .any(|candidate| extension.eq_ignore_ascii_case(candidate))
        .then(|| path.with_extension(TARGET_EXTENSION))
}
