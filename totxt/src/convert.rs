use std::path::Path;

/// The per-file failures, one variant per operation of the conversion sequence.
/// A failed file never aborts the batch, it is reported and the run moves on.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("cannot read the file: {0}")]
    Read(std::io::Error),

    #[error("the file is not valid UTF-8: {0}")]
    Decode(std::string::FromUtf8Error),

    #[error("cannot write the converted file: {0}")]
    Write(std::io::Error),

    #[error("cannot delete the original file: {0}")]
    Delete(std::io::Error),
}

/// Reads `source` as UTF-8 text, writes it verbatim to `target` and deletes `source`.
/// An already existing `target` is overwritten without a pre-check.
/// There is no rollback: when the deletion fails after a successful write, both files coexist.
pub fn convert_file(source: &Path, target: &Path) -> Result<(), ConvertError> {
    let bytes = std::fs::read(source).map_err(ConvertError::Read)?;
    let content = String::from_utf8(bytes).map_err(ConvertError::Decode)?;

    std::fs::write(target, content).map_err(ConvertError::Write)?;
    std::fs::remove_file(source).map_err(ConvertError::Delete)?;

    Ok(())
}
