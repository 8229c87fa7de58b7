//! Channel layout descriptor and buffer errors.

use core::fmt;

/// Channel layout of a flat pixel buffer.
///
/// Within each pixel the byte order is fixed: blue, green, red, then alpha
/// when present. This matches the little-endian packed-color convention the
/// display side consumes, and it is a round-trip contract — any reordering
/// to red-first formats is the caller's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum ChannelLayout {
    /// Blue, green, red. Fully opaque; no alpha byte is stored.
    Rgb = 3,
    /// Blue, green, red, alpha.
    Rgba = 4,
}

impl ChannelLayout {
    /// Bytes occupied by one pixel under this layout.
    #[inline]
    pub const fn bytes_per_pixel(self) -> usize {
        self as usize
    }

    /// Whether this layout stores an alpha byte.
    #[inline]
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba)
    }

    /// Byte length of a tightly-packed buffer with the given dimensions.
    ///
    /// `None` when the product overflows `usize`; no real buffer can be
    /// that large, so callers treat it as a length mismatch.
    #[inline]
    pub fn buffer_len(self, width: u32, height: u32) -> Option<usize> {
        (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(self.bytes_per_pixel())
    }
}

/// Errors from pixel buffer operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum BufferError {
    /// Buffer length disagrees with the layout's bytes-per-pixel or with
    /// the stated dimensions.
    InvalidBufferLayout,
    /// Zero dimension, or a target dimension exceeding the source.
    InvalidArguments,
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBufferLayout => {
                write!(f, "buffer length does not match the layout and dimensions")
            }
            Self::InvalidArguments => {
                write!(f, "dimensions are zero or the target exceeds the source")
            }
        }
    }
}
