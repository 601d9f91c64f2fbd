//! Error types shared by the fallible utilities in this crate.
//!
//! ## Error Cases
//! - `OddInput`: an odd integer was passed to [`reject_odd`].
//! - `RecordNotFound`: a record id fell outside [`RECORD_ID_RANGE`].
//! - `Io`: an underlying filesystem operation failed.
//!
//! [`reject_odd`]: crate::reject_odd
//! [`RECORD_ID_RANGE`]: crate::RECORD_ID_RANGE

pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for the `kata` utilities.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The input was odd where an even value was required.
    #[error("input is odd: {0}")]
    OddInput(i64),

    /// No record exists for the requested id.
    #[error("user with id {0} does not exist")]
    RecordNotFound(i64),

    /// A filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` if this is an I/O error whose kind is
    /// [`std::io::ErrorKind::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    /// Returns the underlying [`std::io::ErrorKind`], if this is an I/O error.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Io(e) => Some(e.kind()),
            _ => None,
        }
    }
}
