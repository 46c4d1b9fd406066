//! Fixed-point to floating-point conversion
//!
//! Gains and filter coefficients in the processing chain are carried as
//! unsigned Q14 values: 2 integer bits and 14 fractional bits, so the
//! representable range is `[0.0, 4.0)` with a step of `1 / 16384`.

use crate::error::{AudioError, AudioResult};

/// Number of fractional bits in a Q14 value
pub const FRACTIONAL_BITS: u32 = 14;

/// Scale factor between a Q14 value and its real value (`1 << 14`)
pub const Q14_SCALE: f32 = (1u32 << FRACTIONAL_BITS) as f32;

/// Convert a fixed-point number with a 14 bit fractional part to floating point.
#[inline]
pub fn q14_to_float(v: u16) -> f32 {
    f32::from(v) / Q14_SCALE
}

/// Unsigned Q14 fixed-point value (2.14 format)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Q14(pub u16);

impl Q14 {
    pub const ZERO: Q14 = Q14(0);
    pub const ONE: Q14 = Q14(1 << FRACTIONAL_BITS);
    pub const MAX: Q14 = Q14(u16::MAX);

    /// Convert to floating point
    #[inline]
    pub fn to_f32(self) -> f32 {
        q14_to_float(self.0)
    }
}

impl From<Q14> for f32 {
    fn from(value: Q14) -> Self {
        value.to_f32()
    }
}

/// Convert a block of Q14 values into a caller-provided buffer.
///
/// Both slices must have the same length.
pub fn q14_slice_to_float(input: &[u16], output: &mut [f32]) -> AudioResult<()> {
    if input.len() != output.len() {
        return Err(AudioError::buffer_size_mismatch(input.len(), output.len()));
    }

    for (out, &v) in output.iter_mut().zip(input) {
        *out = q14_to_float(v);
    }

    Ok(())
}

/// Convert a block of Q14 values into a newly allocated vector.
pub fn q14_vec_to_float(input: &[u16]) -> Vec<f32> {
    input.iter().map(|&v| q14_to_float(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_values() {
        assert_eq!(q14_to_float(0), 0.0);
        assert_eq!(q14_to_float(16384), 1.0);
        assert_eq!(q14_to_float(8192), 0.5);
        assert_eq!(q14_to_float(32768), 2.0);
    }

    #[test]
    fn test_max_value() {
        let max = q14_to_float(u16::MAX);
        assert!((max - 3.999_938_96).abs() < 1e-6);
        assert!(max < 4.0);
    }

    #[test]
    fn test_newtype_matches_free_function() {
        assert_eq!(Q14::ONE.to_f32(), 1.0);
        assert_eq!(Q14::ZERO.to_f32(), 0.0);
        assert_eq!(f32::from(Q14::MAX), q14_to_float(u16::MAX));
    }

    #[test]
    fn test_slice_conversion() {
        let input = [0u16, 4096, 16384, 49152];
        let mut output = [0.0f32; 4];
        q14_slice_to_float(&input, &mut output).unwrap();
        assert_eq!(output, [0.0, 0.25, 1.0, 3.0]);
    }

    #[test]
    fn test_slice_length_mismatch() {
        let input = [0u16; 3];
        let mut output = [0.0f32; 2];
        let err = q14_slice_to_float(&input, &mut output).unwrap_err();
        assert_eq!(err, AudioError::BufferSizeMismatch { input: 3, output: 2 });
    }
}
