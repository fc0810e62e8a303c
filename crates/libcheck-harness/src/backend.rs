//! Implementations under test.
//!
//! The suites only see these traits, so any implementation of the bounded
//! string functions or of `tan` can be run through the same battery.

/// Bounded string copy/concatenation (`strlcpy`/`strlcat`).
pub trait BoundedStrings {
    /// Copy `src` into `dest` writing at most `size` bytes; returns `strlen(src)`.
    fn strlcpy(&self, dest: &mut [u8], src: &[u8], size: usize) -> usize;

    /// Append `src` to `dest` within `size` bytes; returns the untruncated length.
    fn strlcat(&self, dest: &mut [u8], src: &[u8], size: usize) -> usize;
}

/// Trigonometric functions.
pub trait Trigonometry {
    fn tan(&self, x: f64) -> f64;
}

/// Backend over the safe implementations in `libcheck-core`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoreBackend;

impl BoundedStrings for CoreBackend {
    fn strlcpy(&self, dest: &mut [u8], src: &[u8], size: usize) -> usize {
        libcheck_core::string::strlcpy(dest, src, size)
    }

    fn strlcat(&self, dest: &mut [u8], src: &[u8], size: usize) -> usize {
        libcheck_core::string::strlcat(dest, src, size)
    }
}

impl Trigonometry for CoreBackend {
    fn tan(&self, x: f64) -> f64 {
        libcheck_core::math::tan(x)
    }
}
