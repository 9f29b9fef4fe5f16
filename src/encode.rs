use alloc::string::String;
use alloc::vec::Vec;

use crate::chunk::{ChunkType, PNG_SIGNATURE, ihdr_payload, text_payload, write_chunk};
use crate::color::ColorType;
use crate::error::{PngError, ValidationError};
use crate::input::InputFormat;
use crate::limits::Limits;
use crate::pixel::PixelLayout;
use crate::sample::sample;
use crate::scanline::{build_image_data, image_data_len};
use crate::zlib::{wrapped_len, zlib_wrap};

/// Builder for a PNG encode.
///
/// Defaults: input format `"r8g8b8a8"`, color type [`ColorType::Truecolor`],
/// dimensions derived from the buffer length, no metadata.
///
/// ```
/// use zenrawpng::EncodeRequest;
///
/// let pixels = [255u8, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];
/// let png = EncodeRequest::new()
///     .with_pixels(&pixels)
///     .with_input_format("rgb")?
///     .with_color_type_name("grayscale")?
///     .with_width(2)
///     .with_meta("Title", "stripes")
///     .encode()?;
/// assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
/// # Ok::<(), zenrawpng::PngError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct EncodeRequest<'a> {
    pixels: Option<&'a [u8]>,
    input: InputFormat,
    color_type: ColorType,
    width: Option<u32>,
    height: Option<u32>,
    meta: Vec<(String, String)>,
    limits: Option<&'a Limits>,
}

impl<'a> EncodeRequest<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw pixel buffer. A trailing partial pixel encodes as zero bytes.
    pub fn with_pixels(mut self, pixels: &'a [u8]) -> Self {
        self.pixels = Some(pixels);
        self
    }

    /// Parse and set the input format descriptor, e.g. `"b8g8r8a8"`.
    pub fn with_input_format(mut self, descriptor: &str) -> Result<Self, PngError> {
        self.input = InputFormat::parse(descriptor)?;
        Ok(self)
    }

    pub fn with_input(mut self, input: InputFormat) -> Self {
        self.input = input;
        self
    }

    /// Set the input format and the color type that preserves it.
    pub fn with_layout(mut self, layout: PixelLayout) -> Self {
        self.input = layout.input_format();
        self.color_type = layout.color_type();
        self
    }

    pub fn with_color_type(mut self, color_type: ColorType) -> Self {
        self.color_type = color_type;
        self
    }

    /// Set the color type by name: `"grayscale"`, `"truecolor"`,
    /// `"grayscale+alpha"` or `"truecolor+alpha"`.
    pub fn with_color_type_name(mut self, name: &str) -> Result<Self, PngError> {
        self.color_type = name.parse()?;
        Ok(self)
    }

    /// Image width. `0` leaves it to be derived.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = (width != 0).then_some(width);
        self
    }

    /// Image height. `0` leaves it to be derived.
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = (height != 0).then_some(height);
        self
    }

    pub fn with_size(self, width: u32, height: u32) -> Self {
        self.with_width(width).with_height(height)
    }

    /// Add a tEXt entry. Entries are written in insertion order; reusing a
    /// keyword replaces its text and keeps its position.
    pub fn with_meta(mut self, keyword: impl Into<String>, text: impl Into<String>) -> Self {
        let keyword = keyword.into();
        let text = text.into();
        match self.meta.iter_mut().find(|(k, _)| *k == keyword) {
            Some(entry) => entry.1 = text,
            None => self.meta.push((keyword, text)),
        }
        self
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Check the configuration and fix the image dimensions.
    pub fn validate(&self) -> Result<ImageConfig<'a>, PngError> {
        let pixels = self.pixels.ok_or(ValidationError::Missing("pixels"))?;
        let pixel_count = self.input.pixel_count(pixels.len());
        let (width, height) = derive_dimensions(self.width, self.height, pixel_count)?;
        if width == 0 {
            return Err(ValidationError::Missing("width").into());
        }
        if height == 0 {
            return Err(ValidationError::Missing("height").into());
        }

        if let Some(limits) = self.limits {
            limits.check(width, height)?;
        }
        let data_len = image_data_len(width, height, self.color_type)
            .ok_or(PngError::DimensionsTooLarge { width, height })?;
        let idat_len = wrapped_len(data_len)
            .filter(|&len| u32::try_from(len).is_ok())
            .ok_or(PngError::DimensionsTooLarge { width, height })?;
        if let Some(limits) = self.limits {
            limits.check_memory(data_len.saturating_add(idat_len))?;
        }

        Ok(ImageConfig {
            pixels,
            width,
            height,
            color_type: self.color_type,
            input: self.input,
            meta: self.meta.clone(),
        })
    }

    /// Validate, then encode.
    pub fn encode(&self) -> Result<Vec<u8>, PngError> {
        Ok(self.validate()?.encode())
    }
}

/// Fill in whichever of `width` and `height` is missing.
///
/// With neither, the image is the smallest square holding `pixel_count`
/// pixels; with one, the other is the number of rows (or columns) needed.
/// `Some(0)` counts as not given.
pub fn derive_dimensions(
    width: Option<u32>,
    height: Option<u32>,
    pixel_count: usize,
) -> Result<(u32, u32), PngError> {
    let width = width.filter(|&w| w != 0);
    let height = height.filter(|&h| h != 0);
    let too_large = |w: usize, h: usize| PngError::DimensionsTooLarge {
        width: u32::try_from(w).unwrap_or(u32::MAX),
        height: u32::try_from(h).unwrap_or(u32::MAX),
    };
    let fit = |side: usize, w: usize, h: usize| u32::try_from(side).map_err(|_| too_large(w, h));

    match (width, height) {
        (Some(w), Some(h)) => Ok((w, h)),
        (Some(w), None) => {
            let h = pixel_count.div_ceil(w as usize);
            Ok((w, fit(h, w as usize, h)?))
        }
        (None, Some(h)) => {
            let w = pixel_count.div_ceil(h as usize);
            Ok((fit(w, w, h as usize)?, h))
        }
        (None, None) => {
            let side = ceil_sqrt(pixel_count);
            let side = fit(side, side, side)?;
            Ok((side, side))
        }
    }
}

fn ceil_sqrt(n: usize) -> usize {
    let root = n.isqrt();
    if root * root < n { root + 1 } else { root }
}

/// A validated encode: dimensions fixed, nothing left to fail.
#[derive(Clone, Debug)]
pub struct ImageConfig<'a> {
    pixels: &'a [u8],
    width: u32,
    height: u32,
    color_type: ColorType,
    input: InputFormat,
    meta: Vec<(String, String)>,
}

impl ImageConfig<'_> {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn color_type(&self) -> ColorType {
        self.color_type
    }

    pub fn input(&self) -> &InputFormat {
        &self.input
    }

    pub fn meta(&self) -> &[(String, String)] {
        &self.meta
    }

    /// Assemble the PNG: signature, IHDR, IDAT, one tEXt per entry, IEND.
    pub fn encode(&self) -> Vec<u8> {
        log::debug!(
            "encoding {}x{} {} from {} ({} bytes)",
            self.width,
            self.height,
            self.color_type,
            self.input,
            self.pixels.len()
        );

        let sample_at = |i| sample(self.pixels, i, &self.input);
        let data = build_image_data(self.width, self.height, self.color_type, sample_at);
        let idat = zlib_wrap(&data);

        let text_len: usize = self.meta.iter().map(|(k, v)| k.len() + v.len()).sum();
        let chunks_len = 25 + (idat.len() + 12) + (text_len + 13 * self.meta.len()) + 12;
        let mut out = Vec::with_capacity(PNG_SIGNATURE.len() + chunks_len);
        out.extend_from_slice(&PNG_SIGNATURE);
        write_chunk(
            &mut out,
            ChunkType::IHDR,
            &ihdr_payload(self.width, self.height, self.color_type),
        );
        // bKGD would go here. It is not written for any color type.
        write_chunk(&mut out, ChunkType::IDAT, &idat);
        for (keyword, text) in &self.meta {
            write_chunk(&mut out, ChunkType::tEXt, &text_payload(keyword, text));
        }
        write_chunk(&mut out, ChunkType::IEND, &[]);

        log::debug!(
            "encoded {} bytes ({} scanline bytes)",
            out.len(),
            data.len()
        );
        out
    }
}

/// Encode a buffer in one of the named layouts, keeping all its channels.
pub fn encode_png(
    pixels: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
) -> Result<Vec<u8>, PngError> {
    EncodeRequest::new()
        .with_pixels(pixels)
        .with_layout(layout)
        .with_size(width, height)
        .encode()
}
