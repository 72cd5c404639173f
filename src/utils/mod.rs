//! Internal validation helpers shared across operations.

use crate::error::{ChannelError, SparseFilterError};

/// Rejects images with a zero dimension.
pub fn ensure_non_empty(width: u32, height: u32) -> Result<(), SparseFilterError> {
    if width == 0 || height == 0 {
        Err(SparseFilterError::EmptyImage { width, height })
    } else {
        Ok(())
    }
}

/// Rejects a channel plane whose dimensions differ from the expected pair.
pub fn ensure_matching_dimensions(
    expected: (u32, u32),
    actual: (u32, u32),
) -> Result<(), ChannelError> {
    if expected != actual {
        Err(ChannelError::DimensionMismatch { expected, actual })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_non_empty_rejects_zero_dimensions() {
        ensure_non_empty(100, 100).unwrap();
        ensure_non_empty(1, 1).unwrap();
        assert!(matches!(
            ensure_non_empty(0, 100),
            Err(SparseFilterError::EmptyImage {
                width: 0,
                height: 100
            })
        ));
        assert!(ensure_non_empty(100, 0).is_err());
        assert!(ensure_non_empty(0, 0).is_err());
    }

    #[test]
    fn ensure_matching_dimensions_rejects_differing_pairs() {
        ensure_matching_dimensions((50, 75), (50, 75)).unwrap();
        assert!(matches!(
            ensure_matching_dimensions((100, 100), (100, 50)),
            Err(ChannelError::DimensionMismatch {
                expected: (100, 100),
                actual: (100, 50),
            })
        ));
        assert!(ensure_matching_dimensions((100, 100), (50, 100)).is_err());
    }
}
