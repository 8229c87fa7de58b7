//! Area-average (box filter) downscaling.
//!
//! Operates directly on flat byte buffers for the hot path, with no
//! intermediate typed-pixel allocation, but preserves the same blue,
//! green, red, alpha channel semantics as [`crate::codec`].

use alloc::vec;
use alloc::vec::Vec;

use crate::layout::{BufferError, ChannelLayout};

/// Downscale a pixel buffer by averaging each output pixel's source window.
///
/// Every output pixel `(nx, ny)` covers the half-open source rectangle
/// `[floor(nx * src_w / dst_w), floor((nx+1) * src_w / dst_w))` (and the
/// analogous rows); each channel is the truncating mean of that window.
/// The window always holds at least one pixel when the target fits inside
/// the source, so an identity resize returns the input bytes unchanged.
///
/// Deterministic and allocation-only: the source is never mutated, and
/// identical inputs yield byte-identical output.
///
/// # Errors
///
/// Returns [`BufferError::InvalidArguments`] when any dimension is zero or
/// a target dimension exceeds its source dimension (upscaling is out of
/// scope), and [`BufferError::InvalidBufferLayout`] when `src.len()` is not
/// `src_w * src_h * bytes_per_pixel`.
pub fn downscale(
    src: &[u8],
    src_w: u32,
    src_h: u32,
    dst_w: u32,
    dst_h: u32,
    layout: ChannelLayout,
) -> Result<Vec<u8>, BufferError> {
    if src_w == 0 || src_h == 0 || dst_w == 0 || dst_h == 0 {
        return Err(BufferError::InvalidArguments);
    }
    if dst_w > src_w || dst_h > src_h {
        return Err(BufferError::InvalidArguments);
    }
    if Some(src.len()) != layout.buffer_len(src_w, src_h) {
        return Err(BufferError::InvalidBufferLayout);
    }

    let bpp = layout.bytes_per_pixel();
    let out_len = layout
        .buffer_len(dst_w, dst_h)
        .ok_or(BufferError::InvalidArguments)?;
    let mut out = vec![0u8; out_len];

    let x_ratio = f64::from(src_w) / f64::from(dst_w);
    let y_ratio = f64::from(src_h) / f64::from(dst_h);

    for ny in 0..dst_h {
        let start_y = (f64::from(ny) * y_ratio) as u32;
        let end_y = (f64::from(src_h).min(f64::from(ny + 1) * y_ratio)) as u32;
        for nx in 0..dst_w {
            let start_x = (f64::from(nx) * x_ratio) as u32;
            let end_x = (f64::from(src_w).min(f64::from(nx + 1) * x_ratio)) as u32;

            // Channel sums in buffer byte order: blue, green, red, [alpha].
            let mut sums = [0u64; 4];
            let mut count = 0u64;
            for y in start_y..end_y {
                let row = y as usize * src_w as usize;
                for x in start_x..end_x {
                    let idx = (row + x as usize) * bpp;
                    for (sum, &byte) in sums.iter_mut().zip(&src[idx..idx + bpp]) {
                        *sum += u64::from(byte);
                    }
                    count += 1;
                }
            }

            let idx = (ny as usize * dst_w as usize + nx as usize) * bpp;
            for (dst, &sum) in out[idx..idx + bpp].iter_mut().zip(&sums) {
                // Truncating division.
                *dst = (sum / count) as u8;
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_2x2_to_single_pixel() {
        // Diagonal checkerboard: two black, two white pixels.
        #[rustfmt::skip]
        let src = [
            0, 0, 0,        255, 255, 255,
            255, 255, 255,  0, 0, 0,
        ];
        let out = downscale(&src, 2, 2, 1, 1, ChannelLayout::Rgb).unwrap();
        // (0 + 255 + 255 + 0) / 4 = 127 with truncation.
        assert_eq!(out, vec![127, 127, 127]);
    }

    #[test]
    fn identity_resize_returns_input() {
        let src: Vec<u8> = (0..3 * 4 * 4).map(|i| i as u8).collect();
        let out = downscale(&src, 4, 4, 4, 4, ChannelLayout::Rgb).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn uniform_input_is_invariant() {
        let src = vec![255u8; 4 * 4 * 3];
        let out = downscale(&src, 4, 4, 2, 2, ChannelLayout::Rgb).unwrap();
        assert_eq!(out, vec![255u8; 2 * 2 * 3]);
    }

    #[test]
    fn output_length_matches_target() {
        let src = vec![0u8; 8 * 6 * 4];
        let out = downscale(&src, 8, 6, 3, 2, ChannelLayout::Rgba).unwrap();
        assert_eq!(out.len(), 3 * 2 * 4);

        let src = vec![0u8; 8 * 6 * 3];
        let out = downscale(&src, 8, 6, 5, 5, ChannelLayout::Rgb).unwrap();
        assert_eq!(out.len(), 5 * 5 * 3);
    }

    #[test]
    fn deterministic() {
        let src: Vec<u8> = (0..6 * 6 * 4).map(|i| (i * 7) as u8).collect();
        let a = downscale(&src, 6, 6, 4, 3, ChannelLayout::Rgba).unwrap();
        let b = downscale(&src, 6, 6, 4, 3, ChannelLayout::Rgba).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn uneven_windows_split_at_floor() {
        // 3 pixels -> 2: windows are [0,1) and [1,3).
        #[rustfmt::skip]
        let src = [
            10, 20, 30,  100, 100, 100,  200, 200, 200,
        ];
        let out = downscale(&src, 3, 1, 2, 1, ChannelLayout::Rgb).unwrap();
        assert_eq!(out, vec![10, 20, 30, 150, 150, 150]);
    }

    #[test]
    fn alpha_is_averaged_for_rgba() {
        #[rustfmt::skip]
        let src = [
            0, 0, 0, 0,  0, 0, 0, 100,
            0, 0, 0, 50, 0, 0, 0, 255,
        ];
        let out = downscale(&src, 2, 2, 1, 1, ChannelLayout::Rgba).unwrap();
        // (0 + 100 + 50 + 255) / 4 = 101 with truncation.
        assert_eq!(out, vec![0, 0, 0, 101]);
    }

    #[test]
    fn rejects_upscale() {
        let src = vec![0u8; 2 * 2 * 3];
        assert_eq!(
            downscale(&src, 2, 2, 3, 2, ChannelLayout::Rgb).unwrap_err(),
            BufferError::InvalidArguments
        );
        assert_eq!(
            downscale(&src, 2, 2, 2, 4, ChannelLayout::Rgb).unwrap_err(),
            BufferError::InvalidArguments
        );
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            downscale(&[], 0, 2, 1, 1, ChannelLayout::Rgb).unwrap_err(),
            BufferError::InvalidArguments
        );
        assert_eq!(
            downscale(&[0, 0, 0], 1, 1, 0, 1, ChannelLayout::Rgb).unwrap_err(),
            BufferError::InvalidArguments
        );
    }

    #[test]
    fn rejects_overflowing_dimensions() {
        // width * height * bpp exceeds usize; must error, not panic.
        let src = [0u8; 3];
        assert_eq!(
            downscale(&src, u32::MAX, u32::MAX, 1, 1, ChannelLayout::Rgb).unwrap_err(),
            BufferError::InvalidBufferLayout
        );
    }

    #[test]
    fn rejects_length_mismatch() {
        // 2x2 RGBA needs 16 bytes, not 12.
        let src = vec![0u8; 12];
        assert_eq!(
            downscale(&src, 2, 2, 1, 1, ChannelLayout::Rgba).unwrap_err(),
            BufferError::InvalidBufferLayout
        );
    }

    #[test]
    fn channel_order_survives_downscale() {
        // Uniform 2x2 with distinct per-channel values: averaging must not
        // shuffle blue/green/red positions.
        let px = [40u8, 80, 120];
        let src: Vec<u8> = px.iter().copied().cycle().take(2 * 2 * 3).collect();
        let out = downscale(&src, 2, 2, 1, 1, ChannelLayout::Rgb).unwrap();
        assert_eq!(out, vec![40, 80, 120]);
    }
}
