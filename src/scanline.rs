//! Unfiltered PNG scanlines.

use alloc::vec::Vec;

use crate::color::ColorType;
use crate::sample::Sample;

/// PNG filter type 0, "None". Rows are never filtered.
const FILTER_NONE: u8 = 0;

/// Length in bytes of one scanline, filter byte included.
pub fn row_len(width: u32, color_type: ColorType) -> Option<usize> {
    (width as usize)
        .checked_mul(color_type.bytes_per_pixel())?
        .checked_add(1)
}

/// Length of the whole scanline stream, or `None` on overflow.
pub fn image_data_len(width: u32, height: u32, color_type: ColorType) -> Option<usize> {
    row_len(width, color_type)?.checked_mul(height as usize)
}

/// Serialize `width * height` samples into the scanline stream.
///
/// `sample_at` is called with each pixel index in row-major order. Callers
/// must have checked [`image_data_len`] already.
pub fn build_image_data(
    width: u32,
    height: u32,
    color_type: ColorType,
    mut sample_at: impl FnMut(usize) -> Sample,
) -> Vec<u8> {
    let w = width as usize;
    let h = height as usize;
    let mut out = Vec::with_capacity(image_data_len(width, height, color_type).unwrap_or(0));

    for y in 0..h {
        out.push(FILTER_NONE);
        for x in 0..w {
            color_type.push_pixel(sample_at(y * w + x), &mut out);
        }
    }

    out
}
