#![forbid(unsafe_code)]

use crate::convert::convert_file;
use crate::listing::eligible_entries;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod convert;
mod listing;
mod statistics;

pub use convert::ConvertError;
pub use listing::EligibleEntry;
pub use statistics::Statistics;

pub struct ConvertOptions {
    pub directory: PathBuf,
}

pub fn run(options: ConvertOptions) -> ExitCode {
    let statistics = match convert_directory(&options.directory) {
        Ok(statistics) => statistics,
        Err(error) => {
            log::error!("Cannot process directory '{}': {:#}", options.directory.display(), error);
            return ExitCode::FAILURE;
        }
    };

    if statistics.processed_files() > 0 {
        println!("==============================");
        println!("Failed files:    {}", statistics.failed_files);
        println!("Converted files: {}", statistics.converted_files);
    }

    // Per-file failures are reported above but do not fail the run.
    // Only a directory that cannot be enumerated does.
    ExitCode::SUCCESS
}

/// Converts every direct `.js`/`.html` entry of `directory` into a `.txt` file and deletes the original.
/// A failing entry is logged and skipped, the remaining entries are still processed.
pub fn convert_directory(directory: &Path) -> anyhow::Result<Statistics> {
    let entries = eligible_entries(directory)?;

    let mut statistics = Statistics::new();

    for entry in entries {
        match convert_file(&entry.source, &entry.target) {
            Ok(()) => {
                log::info!(
                    "Converted and removed {} -> {}",
                    file_name_for_display(&entry.source),
                    file_name_for_display(&entry.target)
                );
                statistics.converted_files += 1;
            }
            Err(error) => {
                log::warn!("Error processing {}: {}", file_name_for_display(&entry.source), error);
                statistics.failed_files += 1;
            }
        }
    }

    Ok(statistics)
}

fn file_name_for_display(path: &Path) -> String {
    path.file_name()
        .map(|file_name| file_name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ops::Not;

    #[test]
    fn converts_matching_files_and_leaves_the_rest_untouched() {
        let directory = tempfile::tempdir().unwrap();
        std::fs::write(directory.path().join("a.js"), "x=1").unwrap();
        std::fs::write(directory.path().join("b.HTML"), "<p>hi</p>").unwrap();
        std::fs::write(directory.path().join("c.css"), "body{}").unwrap();

        let statistics = convert_directory(directory.path()).unwrap();

        assert_eq!(statistics, Statistics { converted_files: 2, failed_files: 0 });

        assert_eq!(std::fs::read_to_string(directory.path().join("a.txt")).unwrap(), "x=1");
        assert!(directory.path().join("a.js").exists().not());

        assert_eq!(std::fs::read_to_string(directory.path().join("b.txt")).unwrap(), "<p>hi</p>");
        assert!(directory.path().join("b.HTML").exists().not());

        assert_eq!(std::fs::read_to_string(directory.path().join("c.css")).unwrap(), "body{}");
        assert!(directory.path().join("c.txt").exists().not());
    }

    #[test]
    fn a_second_run_finds_nothing_left_to_convert() {
        let directory = tempfile::tempdir().unwrap();
        std::fs::write(directory.path().join("a.js"), "x=1").unwrap();

        let first = convert_directory(directory.path()).unwrap();
        let second = convert_directory(directory.path()).unwrap();

        assert_eq!(first, Statistics { converted_files: 1, failed_files: 0 });
        assert_eq!(second, Statistics::new());
        assert_eq!(std::fs::read_to_string(directory.path().join("a.txt")).unwrap(), "x=1");
    }

    #[test]
    fn a_preexisting_txt_target_is_overwritten() {
        let directory = tempfile::tempdir().unwrap();
        std::fs::write(directory.path().join("a.js"), "x=1").unwrap();
        std::fs::write(directory.path().join("a.txt"), "something unrelated").unwrap();

        let statistics = convert_directory(directory.path()).unwrap();

        assert_eq!(statistics, Statistics { converted_files: 1, failed_files: 0 });
        assert_eq!(std::fs::read_to_string(directory.path().join("a.txt")).unwrap(), "x=1");
    }

    #[test]
    fn a_failing_entry_does_not_abort_the_batch() {
        let directory = tempfile::tempdir().unwrap();
        std::fs::write(directory.path().join("a.js"), "x=1").unwrap();
        std::fs::write(directory.path().join("d.js"), "y=2").unwrap();
        // A directory at the target path makes the write for d.js fail.
        std::fs::create_dir(directory.path().join("d.txt")).unwrap();

        let statistics = convert_directory(directory.path()).unwrap();

        assert_eq!(statistics, Statistics { converted_files: 1, failed_files: 1 });

        assert!(directory.path().join("d.js").exists());
        assert_eq!(std::fs::read_to_string(directory.path().join("a.txt")).unwrap(), "x=1");
        assert!(directory.path().join("a.js").exists().not());
    }

    #[test]
    fn an_empty_directory_changes_nothing() {
        let directory = tempfile::tempdir().unwrap();

        let statistics = convert_directory(directory.path()).unwrap();

        assert_eq!(statistics, Statistics::new());
        assert_eq!(std::fs::read_dir(directory.path()).unwrap().count(), 0);
    }

    #[test]
    fn a_missing_directory_is_a_fatal_error() {
        let directory = tempfile::tempdir().unwrap();

        assert!(convert_directory(&directory.path().join("nope")).is_err());
    }
}
