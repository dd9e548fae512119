//! Error type shared by [`List`](crate::List) and [`ByteStr`](crate::ByteStr).
//!
//! There is a single failure mode: an index or range argument that falls
//! outside the window the value currently holds. Nothing is retried or
//! clamped internally; the caller decides what to do.

use thiserror::Error;

/// Out-of-range access on a list or byte string.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An element or byte index outside `[0, len)` (`[0, len]` for insertion).
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A `start`/`len` window that does not fit inside the value.
    #[error("range {start}..{start}+{len} out of bounds for length {total}")]
    InvalidRange {
        start: usize,
        len: usize,
        total: usize,
    },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

impl Error {
    pub(crate) fn index(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }

    /// Returns `Ok(())` when `index < len`.
    #[inline]
    pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
        if index < len {
            Ok(())
        } else {
            Err(Error::index(index, len))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::index(3, 2).to_string(),
            "index 3 out of range for length 2"
        );
        assert_eq!(
            Error::InvalidRange {
                start: 1,
                len: 9,
                total: 4
            }
            .to_string(),
            "range 1..1+9 out of bounds for length 4"
        );
    }

    #[test]
    fn check_index_window() {
        assert_eq!(Error::check_index(0, 1), Ok(()));
        assert_eq!(Error::check_index(1, 1), Err(Error::index(1, 1)));
        assert_eq!(Error::check_index(0, 0), Err(Error::index(0, 0)));
    }
}
