use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::ColorTypeError;
use crate::sample::Sample;

/// Output PNG color model. All variants use 8 bits per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorType {
    /// Y, color type 0.
    Grayscale,
    /// RGB, color type 2.
    #[default]
    Truecolor,
    /// YA, color type 4.
    GrayscaleAlpha,
    /// RGBA, color type 6.
    TruecolorAlpha,
}

impl ColorType {
    pub const ALL: [ColorType; 4] = [
        Self::Grayscale,
        Self::Truecolor,
        Self::GrayscaleAlpha,
        Self::TruecolorAlpha,
    ];

    /// Bits per channel as written to IHDR.
    pub const fn bit_depth(self) -> u8 {
        8
    }

    /// IHDR color type code.
    pub const fn code(self) -> u8 {
        match self {
            Self::Grayscale => 0,
            Self::Truecolor => 2,
            Self::GrayscaleAlpha => 4,
            Self::TruecolorAlpha => 6,
        }
    }

    /// Bytes per output pixel.
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Grayscale => 1,
            Self::Truecolor => 3,
            Self::GrayscaleAlpha => 2,
            Self::TruecolorAlpha => 4,
        }
    }

    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::GrayscaleAlpha | Self::TruecolorAlpha)
    }

    /// The configuration name, e.g. `"grayscale+alpha"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale",
            Self::Truecolor => "truecolor",
            Self::GrayscaleAlpha => "grayscale+alpha",
            Self::TruecolorAlpha => "truecolor+alpha",
        }
    }

    /// Append one sample in this color model's byte order.
    #[inline]
    pub fn push_pixel(self, s: Sample, out: &mut Vec<u8>) {
        match self {
            Self::Grayscale => out.push(s.gray() as u8),
            Self::Truecolor => out.extend_from_slice(&[s.r as u8, s.g as u8, s.b as u8]),
            Self::GrayscaleAlpha => out.extend_from_slice(&[s.gray() as u8, s.a as u8]),
            Self::TruecolorAlpha => {
                out.extend_from_slice(&[s.r as u8, s.g as u8, s.b as u8, s.a as u8])
            }
        }
    }
}

impl FromStr for ColorType {
    type Err = ColorTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| ColorTypeError(s.to_string()))
    }
}

impl fmt::Display for ColorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
