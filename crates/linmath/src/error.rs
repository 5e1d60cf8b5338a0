use std::{error::Error, fmt};

/// Error returned when converting a slice of the wrong length into a [`Vector`] or [`Matrix`].
///
/// [`Vector`]: crate::Vector
/// [`Matrix`]: crate::Matrix
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// let err = Vec3::try_from(&[1.0, 2.0][..]).unwrap_err();
/// assert_eq!(err.expected(), 3);
/// assert_eq!(err.actual(), 2);
/// assert_eq!(err.to_string(), "expected 3 elements, got 2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionMismatch {
    expected: usize,
    actual: usize,
}

impl DimensionMismatch {
    pub(crate) fn check(expected: usize, actual: usize) -> Result<(), Self> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self { expected, actual })
        }
    }

    /// The number of elements the target type holds.
    #[inline]
    pub fn expected(&self) -> usize {
        self.expected
    }

    /// The number of elements that were provided.
    #[inline]
    pub fn actual(&self) -> usize {
        self.actual
    }
}

impl fmt::Display for DimensionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {} elements, got {}",
            self.expected, self.actual
        )
    }
}

impl Error for DimensionMismatch {}
