//! Input format descriptors: where each channel lives inside a raw pixel.
//!
//! A descriptor is a string of channel tokens, each optionally followed by its
//! bit width:
//!
//! | token | meaning |
//! |---|---|
//! | `r` `g` `b` | red, green, blue |
//! | `a` | alpha |
//! | `G` | gray (cannot be combined with `r`, `g`, `b`) |
//! | `.` | skip |
//!
//! `"rgba"` and `"r8g8b8a8"` describe the same 4-byte layout; `"...G"` reads
//! gray from the fourth byte and ignores the first three. Only 8-bit widths
//! are supported. Any other character is ignored.

use core::fmt;
use core::str::FromStr;

use crate::error::FormatError;

/// A logical channel of an input pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
    Gray,
}

impl Channel {
    const ALL: [Channel; 5] = [
        Channel::Red,
        Channel::Green,
        Channel::Blue,
        Channel::Alpha,
        Channel::Gray,
    ];

    fn from_token(token: u8) -> Option<Self> {
        Some(match token {
            b'r' => Self::Red,
            b'g' => Self::Green,
            b'b' => Self::Blue,
            b'a' => Self::Alpha,
            b'G' => Self::Gray,
            _ => return None,
        })
    }

    /// The descriptor letter for this channel.
    pub const fn token(self) -> char {
        match self {
            Self::Red => 'r',
            Self::Green => 'g',
            Self::Blue => 'b',
            Self::Alpha => 'a',
            Self::Gray => 'G',
        }
    }

    const fn index(self) -> usize {
        self as usize
    }

    const fn is_color(self) -> bool {
        matches!(self, Self::Red | Self::Green | Self::Blue)
    }
}

const SKIP: u8 = b'.';

/// How to pull one channel value out of a pixel's bytes.
///
/// The value is `((pixel[offset] & mask) << shl) >> shr`. The parser only
/// produces whole bytes (`mask = 0xFF`, no shifts).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChannelSpec {
    pub offset: usize,
    pub mask: u16,
    pub shl: u32,
    pub shr: u32,
}

impl ChannelSpec {
    /// A full 8-bit channel at byte `offset`.
    pub const fn byte(offset: usize) -> Self {
        Self {
            offset,
            mask: 0x00FF,
            shl: 0,
            shr: 0,
        }
    }

    /// Extract the channel value from one pixel's bytes.
    ///
    /// A pixel too short to contain the channel reads as zero, as does any
    /// shift of 16 bits or more.
    #[inline]
    pub fn extract(&self, pixel: &[u8]) -> u16 {
        let raw = pixel.get(self.offset).copied().map_or(0, u16::from);
        let shifted = (raw & self.mask).checked_shl(self.shl).unwrap_or(0);
        shifted.checked_shr(self.shr).unwrap_or(0)
    }
}

/// A parsed input format descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InputFormat {
    channels: [Option<ChannelSpec>; 5],
    bytes_per_pixel: usize,
}

impl InputFormat {
    /// `"r8g8b8a8"`, the default layout.
    pub const RGBA8: Self = Self {
        channels: [
            Some(ChannelSpec::byte(0)),
            Some(ChannelSpec::byte(1)),
            Some(ChannelSpec::byte(2)),
            Some(ChannelSpec::byte(3)),
            None,
        ],
        bytes_per_pixel: 4,
    };

    /// Byte-aligned 8-bit channels at the given offsets, in `r g b a G` order.
    pub(crate) const fn from_offsets(offsets: [Option<usize>; 5], bytes_per_pixel: usize) -> Self {
        let mut channels = [None; 5];
        let mut i = 0;
        while i < 5 {
            if let Some(offset) = offsets[i] {
                channels[i] = Some(ChannelSpec::byte(offset));
            }
            i += 1;
        }
        Self {
            channels,
            bytes_per_pixel,
        }
    }

    /// Parse a descriptor such as `"r8g8b8a8"`, `"bgr"` or `"...G"`.
    pub fn parse(descriptor: &str) -> Result<Self, FormatError> {
        let bytes = descriptor.as_bytes();
        let mut channels: [Option<ChannelSpec>; 5] = [None; 5];
        let mut cursor_bits: usize = 0;
        let mut i = 0;

        while i < bytes.len() {
            let token = bytes[i];
            let position = i;
            i += 1;

            let channel = Channel::from_token(token);
            if channel.is_none() && token != SKIP {
                continue;
            }

            let digits_start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            let bits = if digits_start == i {
                8
            } else {
                bytes[digits_start..i].iter().fold(0u32, |acc, d| {
                    acc.saturating_mul(10).saturating_add(u32::from(d - b'0'))
                })
            };
            if bits != 8 {
                return Err(FormatError::UnsupportedBitWidth {
                    token: char::from(token),
                    bits,
                    position,
                });
            }

            if let Some(channel) = channel {
                if channels[channel.index()].is_some() {
                    return Err(FormatError::DuplicateChannel {
                        channel: channel.token(),
                        position,
                    });
                }
                let mixes = match channel {
                    Channel::Gray => Channel::ALL
                        .iter()
                        .any(|c| c.is_color() && channels[c.index()].is_some()),
                    c if c.is_color() => channels[Channel::Gray.index()].is_some(),
                    _ => false,
                };
                if mixes {
                    return Err(FormatError::MixedGrayAndColor {
                        channel: channel.token(),
                        position,
                    });
                }
                channels[channel.index()] = Some(ChannelSpec::byte(cursor_bits / 8));
            }

            cursor_bits += bits as usize;
        }

        if channels.iter().all(Option::is_none) {
            return Err(FormatError::NoChannels);
        }

        Ok(Self {
            channels,
            bytes_per_pixel: cursor_bits / 8,
        })
    }

    /// Extraction record for `channel`, if the descriptor declares it.
    pub fn channel(&self, channel: Channel) -> Option<&ChannelSpec> {
        self.channels[channel.index()].as_ref()
    }

    /// Bytes occupied by one input pixel, skips included.
    pub fn bytes_per_pixel(&self) -> usize {
        self.bytes_per_pixel
    }

    pub fn has_alpha(&self) -> bool {
        self.channels[Channel::Alpha.index()].is_some()
    }

    pub fn is_grayscale(&self) -> bool {
        self.channels[Channel::Gray.index()].is_some()
    }

    /// Number of whole or partial pixels in a buffer of `len` bytes.
    pub fn pixel_count(&self, len: usize) -> usize {
        len.div_ceil(self.bytes_per_pixel)
    }
}

impl Default for InputFormat {
    fn default() -> Self {
        Self::RGBA8
    }
}

impl FromStr for InputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Writes the canonical descriptor, e.g. `r8g8b8a8` or `.8.8.8G8`.
impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for offset in 0..self.bytes_per_pixel {
            let token = Channel::ALL
                .iter()
                .find(|c| self.channel(**c).is_some_and(|spec| spec.offset == offset))
                .map_or('.', |c| c.token());
            write!(f, "{token}8")?;
        }
        Ok(())
    }
}
