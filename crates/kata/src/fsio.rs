use crate::Result;
use std::{fs::File, path::Path};

/// Opens `path` for reading.
///
/// # Errors
///
/// Returns [`Error::Io`] carrying the underlying [`std::io::Error`]; a missing
/// file surfaces as [`std::io::ErrorKind::NotFound`] and can be checked with
/// [`Error::is_not_found`].
///
/// [`Error::Io`]: crate::Error::Io
/// [`Error::is_not_found`]: crate::Error::is_not_found
pub fn open_file(path: impl AsRef<Path>) -> Result<File> {
    Ok(File::open(path)?)
}
