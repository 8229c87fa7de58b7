//! Byte buffer ⇄ typed pixel conversion.
//!
//! Maps a flat buffer in blue, green, red, alpha byte order to a sequence
//! of [`Rgba`] values and back. Decoding a [`ChannelLayout::Rgb`] buffer
//! fills alpha with 255; encoding to `Rgb` discards it.

use alloc::vec::Vec;

use imgref::ImgVec;
use rgb::Rgba;

use crate::layout::{BufferError, ChannelLayout};

/// Decode a flat byte buffer into pixels.
///
/// Pixels come back in buffer order (row-major). Alpha is 255 for the
/// `Rgb` layout.
///
/// # Errors
///
/// Returns [`BufferError::InvalidBufferLayout`] when the buffer length is
/// not a multiple of the layout's bytes-per-pixel. Trailing bytes are never
/// silently dropped.
pub fn decode(data: &[u8], layout: ChannelLayout) -> Result<Vec<Rgba<u8>>, BufferError> {
    let bpp = layout.bytes_per_pixel();
    if !data.len().is_multiple_of(bpp) {
        return Err(BufferError::InvalidBufferLayout);
    }
    let pixels = data
        .chunks_exact(bpp)
        .map(|px| Rgba {
            r: px[2],
            g: px[1],
            b: px[0],
            a: if layout.has_alpha() { px[3] } else { 255 },
        })
        .collect();
    Ok(pixels)
}

/// Decode a dimension-checked buffer into a 2D [`ImgVec`].
///
/// # Errors
///
/// Returns [`BufferError::InvalidArguments`] when either dimension is zero,
/// or [`BufferError::InvalidBufferLayout`] when the buffer length is not
/// exactly `width * height * bytes_per_pixel`.
pub fn decode_image(
    data: &[u8],
    width: u32,
    height: u32,
    layout: ChannelLayout,
) -> Result<ImgVec<Rgba<u8>>, BufferError> {
    if width == 0 || height == 0 {
        return Err(BufferError::InvalidArguments);
    }
    if Some(data.len()) != layout.buffer_len(width, height) {
        return Err(BufferError::InvalidBufferLayout);
    }
    let pixels = decode(data, layout)?;
    Ok(ImgVec::new(pixels, width as usize, height as usize))
}

/// Encode pixels back into a flat byte buffer.
///
/// The inverse of [`decode`]: bytes come out blue, green, red, and alpha
/// per pixel. For the `Rgb` layout each pixel's alpha is discarded.
pub fn encode(pixels: &[Rgba<u8>], layout: ChannelLayout) -> Vec<u8> {
    let mut data = Vec::with_capacity(pixels.len() * layout.bytes_per_pixel());
    for px in pixels {
        data.push(px.b);
        data.push(px.g);
        data.push(px.r);
        if layout.has_alpha() {
            data.push(px.a);
        }
    }
    data
}
