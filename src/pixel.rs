use crate::color::ColorType;
use crate::input::InputFormat;

/// Common pixel memory layouts, as shorthand for a descriptor string.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    /// Single channel, 8-bit grayscale.
    Gray8,
    /// 2 channels, 8-bit grayscale + alpha.
    GrayAlpha8,
    /// 3 channels, 8-bit RGB.
    Rgb8,
    /// 4 channels, 8-bit RGBA.
    Rgba8,
    /// 3 channels, 8-bit BGR.
    Bgr8,
    /// 4 channels, 8-bit BGRA.
    Bgra8,
    /// 4 channels, 8-bit BGRX (opaque; 4th byte is padding, not alpha).
    Bgrx8,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Gray8 => 1,
            Self::GrayAlpha8 => 2,
            Self::Rgb8 | Self::Bgr8 => 3,
            Self::Rgba8 | Self::Bgra8 | Self::Bgrx8 => 4,
        }
    }

    /// The equivalent input format descriptor.
    pub fn descriptor(&self) -> &'static str {
        match self {
            Self::Gray8 => "G8",
            Self::GrayAlpha8 => "G8a8",
            Self::Rgb8 => "r8g8b8",
            Self::Rgba8 => "r8g8b8a8",
            Self::Bgr8 => "b8g8r8",
            Self::Bgra8 => "b8g8r8a8",
            Self::Bgrx8 => "b8g8r8.8",
        }
    }

    /// The parsed form of [`Self::descriptor`].
    pub fn input_format(&self) -> InputFormat {
        // Arguments are byte offsets of r, g, b, a, G.
        match self {
            Self::Gray8 => InputFormat::from_offsets([None, None, None, None, Some(0)], 1),
            Self::GrayAlpha8 => InputFormat::from_offsets([None, None, None, Some(1), Some(0)], 2),
            Self::Rgb8 => InputFormat::from_offsets([Some(0), Some(1), Some(2), None, None], 3),
            Self::Rgba8 => InputFormat::RGBA8,
            Self::Bgr8 => InputFormat::from_offsets([Some(2), Some(1), Some(0), None, None], 3),
            Self::Bgra8 => InputFormat::from_offsets([Some(2), Some(1), Some(0), Some(3), None], 4),
            Self::Bgrx8 => InputFormat::from_offsets([Some(2), Some(1), Some(0), None, None], 4),
        }
    }

    /// The PNG color type that keeps every channel of this layout.
    pub fn color_type(&self) -> ColorType {
        match self {
            Self::Gray8 => ColorType::Grayscale,
            Self::GrayAlpha8 => ColorType::GrayscaleAlpha,
            Self::Rgb8 | Self::Bgr8 | Self::Bgrx8 => ColorType::Truecolor,
            Self::Rgba8 | Self::Bgra8 => ColorType::TruecolorAlpha,
        }
    }
}

/// Typed pixels that map onto a [`PixelLayout`].
#[cfg(feature = "rgb")]
pub trait EncodePixel: Copy + 'static {
    fn layout() -> PixelLayout;
}

#[cfg(feature = "rgb")]
impl EncodePixel for rgb::RGB8 {
    fn layout() -> PixelLayout {
        PixelLayout::Rgb8
    }
}

#[cfg(feature = "rgb")]
impl EncodePixel for rgb::RGBA8 {
    fn layout() -> PixelLayout {
        PixelLayout::Rgba8
    }
}

#[cfg(feature = "rgb")]
impl EncodePixel for rgb::alt::BGR8 {
    fn layout() -> PixelLayout {
        PixelLayout::Bgr8
    }
}

#[cfg(feature = "rgb")]
impl EncodePixel for rgb::alt::BGRA8 {
    fn layout() -> PixelLayout {
        PixelLayout::Bgra8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [PixelLayout; 7] = [
        PixelLayout::Gray8,
        PixelLayout::GrayAlpha8,
        PixelLayout::Rgb8,
        PixelLayout::Rgba8,
        PixelLayout::Bgr8,
        PixelLayout::Bgra8,
        PixelLayout::Bgrx8,
    ];

    #[test]
    fn input_format_matches_descriptor() {
        for layout in ALL {
            let parsed = InputFormat::parse(layout.descriptor()).unwrap();
            assert_eq!(layout.input_format(), parsed, "{layout:?}");
            assert_eq!(parsed.bytes_per_pixel(), layout.bytes_per_pixel());
        }
    }

    #[test]
    fn color_type_keeps_alpha() {
        for layout in ALL {
            assert_eq!(
                layout.color_type().has_alpha(),
                layout.input_format().has_alpha(),
                "{layout:?}"
            );
        }
    }
}
