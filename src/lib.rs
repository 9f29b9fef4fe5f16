//! # zenrawpng
//!
//! Raw pixel buffer to PNG encoder.
//!
//! The input is any byte buffer whose pixel layout is described by a short
//! descriptor string (`"r8g8b8a8"`, `"bgr"`, `"...G"`, see [`InputFormat`]).
//! Each pixel is sampled through that descriptor, converted to one of four PNG
//! color types, and written as unfiltered scanlines inside a zlib stream made
//! of stored DEFLATE blocks.
//!
//! ## Output
//!
//! `signature, IHDR, IDAT, tEXt*, IEND`. All chunks carry correct CRC-32s and
//! the zlib stream a correct Adler-32, so any PNG decoder reads the result.
//!
//! ## Non-Goals
//!
//! - Compression. Data is stored, so output is slightly larger than the raw
//!   scanlines.
//! - Bit depths other than 8, palettes, interlacing, filtering.
//! - Decoding (beyond walking chunks with [`RawChunkIter`]).
//!
//! ## Usage
//!
//! ```
//! use zenrawpng::{ColorType, EncodeRequest, PixelLayout, encode_png};
//!
//! // 2x2 RGBA, all channels kept
//! let rgba = [255u8, 0, 0, 255, 0, 255, 0, 128, 0, 0, 255, 64, 9, 9, 9, 255];
//! let png = encode_png(&rgba, 2, 2, PixelLayout::Rgba8)?;
//!
//! // Read gray from the 4th byte of each pixel, height derived from length
//! let png = EncodeRequest::new()
//!     .with_pixels(&rgba)
//!     .with_input_format("...G")?
//!     .with_color_type(ColorType::Grayscale)
//!     .with_width(2)
//!     .encode()?;
//! # Ok::<(), zenrawpng::PngError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod checksum;
mod chunk;
mod color;
mod encode;
mod error;
mod input;
mod limits;
mod pixel;
mod sample;
mod scanline;
#[cfg(feature = "rgb")]
mod typed;
mod zlib;

// Re-exports
pub use checksum::{Crc32, adler32, crc32};
pub use chunk::{ChunkType, MAX_KEYWORD_LEN, PNG_SIGNATURE, RawChunk, RawChunkIter};
pub use color::ColorType;
pub use encode::{EncodeRequest, ImageConfig, derive_dimensions, encode_png};
pub use error::{ColorTypeError, FormatError, PngError, ValidationError};
pub use input::{Channel, ChannelSpec, InputFormat};
pub use limits::Limits;
#[cfg(feature = "rgb")]
pub use pixel::EncodePixel;
pub use pixel::PixelLayout;
pub use sample::{OPAQUE, Sample, sample};
pub use scanline::build_image_data;
#[cfg(feature = "imgref")]
pub use typed::encode_imgref;
#[cfg(feature = "rgb")]
pub use typed::encode_pixels;
pub use zlib::{MAX_BLOCK_LEN, zlib_wrap};
