use crate::{Error, Result};

/// Rejects odd integers.
///
/// Returns [`Error::OddInput`] for any odd `x`, negative values included, and
/// `Ok(())` for even ones.
///
/// # Errors
///
/// Returns [`Error::OddInput`] when `x` is odd.
pub fn reject_odd(x: i64) -> Result<()> {
    if x % 2 != 0 {
        return Err(Error::OddInput(x));
    }
    Ok(())
}
