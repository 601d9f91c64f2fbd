use crate::{Error, Result};
use core::ops::RangeInclusive;

/// Ids for which [`get_record_by_id`] reports an existing record.
pub const RECORD_ID_RANGE: RangeInclusive<i64> = 1..=5;

/// Looks up a user record by id.
///
/// This stands in for a database read: ids inside [`RECORD_ID_RANGE`] exist,
/// everything else does not.
///
/// # Errors
///
/// Returns [`Error::RecordNotFound`] when `id` is outside
/// [`RECORD_ID_RANGE`].
pub fn get_record_by_id(id: i64) -> Result<()> {
    if !RECORD_ID_RANGE.contains(&id) {
        return Err(Error::RecordNotFound(id));
    }
    Ok(())
}
