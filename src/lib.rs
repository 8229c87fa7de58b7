//! Box-filter downscaling and BGR(A) pixel codec for zen* image pipelines.
//!
//! This crate covers the two pure-computation pieces of a thumbnailing
//! pipeline:
//!
//! - [`codec`] — decode a flat byte buffer into typed [`Rgba`] pixels
//!   (and encode back), given a [`ChannelLayout`]
//! - [`scale`] — produce a reduced-resolution byte buffer where each output
//!   pixel is the area average of the source pixels under it
//!
//! Container decoding, file I/O, and display belong to the callers: they
//! hand this crate a flat buffer, its dimensions, and the already-detected
//! channel layout, and get a new buffer back. No input is ever mutated.
//!
//! Buffers use the little-endian packed-color byte order: blue, green, red,
//! then alpha when present. See [`ChannelLayout`] for the exact contract.

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod codec;
mod layout;
pub mod scale;

pub use layout::{BufferError, ChannelLayout};

// Re-exports for callers working with decoded pixels.
pub use imgref::{Img, ImgRef, ImgVec};
pub use rgb::Rgba;
