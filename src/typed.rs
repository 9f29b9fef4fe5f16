//! Typed pixel input via the `rgb` and `imgref` crates.

use alloc::vec::Vec;

use rgb::ComponentBytes;

use crate::encode::encode_png;
use crate::error::PngError;
use crate::pixel::EncodePixel;

/// Encode a slice of typed pixels, keeping all their channels.
pub fn encode_pixels<P: EncodePixel>(
    pixels: &[P],
    width: u32,
    height: u32,
) -> Result<Vec<u8>, PngError>
where
    [P]: ComponentBytes<u8>,
{
    encode_png(pixels.as_bytes(), width, height, P::layout())
}

/// Encode an [`imgref::ImgRef`], dropping any stride padding.
#[cfg(feature = "imgref")]
pub fn encode_imgref<P: EncodePixel>(img: imgref::ImgRef<'_, P>) -> Result<Vec<u8>, PngError>
where
    [P]: ComponentBytes<u8>,
{
    let too_large = || PngError::DimensionsTooLarge {
        width: u32::try_from(img.width()).unwrap_or(u32::MAX),
        height: u32::try_from(img.height()).unwrap_or(u32::MAX),
    };
    let width = u32::try_from(img.width()).map_err(|_| too_large())?;
    let height = u32::try_from(img.height()).map_err(|_| too_large())?;

    let mut packed = Vec::with_capacity(img.width() * img.height());
    for row in img.rows() {
        packed.extend_from_slice(row);
    }
    encode_pixels(&packed, width, height)
}
