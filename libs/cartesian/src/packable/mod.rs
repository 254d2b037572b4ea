//! Flat-buffer staging for fixed-width numeric values.
//!
//! A [`Packable`] type serializes into a fixed number of consecutive `f64`
//! slots of a caller-supplied buffer and reads itself back from the same
//! slots. Bulk storage code uses this to lay out many values in one
//! contiguous buffer without allocating per value.

use std::ops::Range;

use crate::error::{CartesianError, CartesianResult};

/// A value with a fixed-width representation in a flat `f64` buffer.
///
/// Implementors provide the width and the offset-taking `pack_at` /
/// `unpack_at`; the remaining methods are derived from them. For every
/// value `v` and in-bounds offset `i`,
/// `unpack_at(v.pack_at(buffer, i)?, i)? == v`.
///
/// # Examples
/// ```
/// use cartesian::{Cartesian2, Packable};
///
/// let mut buffer = vec![0.0; 3];
/// Cartesian2::new(1.0, 2.0).pack_at(&mut buffer, 1).unwrap();
/// assert_eq!(buffer, [0.0, 1.0, 2.0]);
/// ```
pub trait Packable: Sized {
    /// Number of buffer slots one value occupies.
    const PACKED_LENGTH: usize;

    /// Writes `self` into `buffer` starting at `starting_index`.
    ///
    /// Fails without touching the buffer when fewer than
    /// [`Self::PACKED_LENGTH`] slots remain after `starting_index`.
    fn pack_at<'a>(
        &self,
        buffer: &'a mut [f64],
        starting_index: usize,
    ) -> CartesianResult<&'a mut [f64]>;

    /// Reads a value from `buffer` starting at `starting_index`.
    fn unpack_at(buffer: &[f64], starting_index: usize) -> CartesianResult<Self>;

    /// Writes `self` at the start of `buffer`.
    fn pack<'a>(&self, buffer: &'a mut [f64]) -> CartesianResult<&'a mut [f64]> {
        self.pack_at(buffer, 0)
    }

    /// Writes `self` into a growable buffer, extending it with zeros when it
    /// is too short to hold the value at `starting_index`.
    fn pack_into_vec<'a>(
        &self,
        buffer: &'a mut Vec<f64>,
        starting_index: usize,
    ) -> CartesianResult<&'a mut Vec<f64>> {
        let end = starting_index
            .checked_add(Self::PACKED_LENGTH)
            .ok_or_else(|| {
                CartesianError::out_of_bounds(
                    "pack_into_vec",
                    starting_index,
                    Self::PACKED_LENGTH,
                    buffer.len(),
                )
            })?;
        if buffer.len() < end {
            buffer.resize(end, 0.0);
        }
        self.pack_at(buffer, starting_index)?;
        Ok(buffer)
    }

    /// Reads a value from the start of `buffer`.
    fn unpack(buffer: &[f64]) -> CartesianResult<Self> {
        Self::unpack_at(buffer, 0)
    }

    /// Reads a value from `buffer` into a caller-owned `result`.
    ///
    /// `result` is left untouched when the read fails.
    fn unpack_into<'r>(
        buffer: &[f64],
        starting_index: usize,
        result: &'r mut Self,
    ) -> CartesianResult<&'r mut Self> {
        *result = Self::unpack_at(buffer, starting_index)?;
        Ok(result)
    }
}

/// Returns the slot range `starting_index..starting_index + width` if it
/// fits inside a buffer of length `len`.
pub fn packed_slots(
    operation: &'static str,
    len: usize,
    starting_index: usize,
    width: usize,
) -> CartesianResult<Range<usize>> {
    starting_index
        .checked_add(width)
        .filter(|&end| end <= len)
        .map(|end| starting_index..end)
        .ok_or_else(|| CartesianError::out_of_bounds(operation, starting_index, width, len))
}
