use alloc::string::String;

/// Errors from configuring and encoding a PNG.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PngError {
    #[error("invalid input format: {0}")]
    Format(#[from] FormatError),

    #[error(transparent)]
    ColorType(#[from] ColorTypeError),

    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),
}

/// A malformed or unsupported input format descriptor.
///
/// Positions are byte offsets into the descriptor string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FormatError {
    #[error("descriptor is empty or has no channels (expected some of r, g, b, a, G)")]
    NoChannels,

    #[error("only 8-bit channels are supported, got {token}{bits} at {position}")]
    UnsupportedBitWidth {
        token: char,
        bits: u32,
        position: usize,
    },

    #[error("channel {channel:?} defined twice, again at {position}")]
    DuplicateChannel { channel: char, position: usize },

    #[error("cannot mix grayscale (G) and color (r, g, b) channels: {channel:?} at {position}")]
    MixedGrayAndColor { channel: char, position: usize },
}

/// An unknown output color type name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error(
    "unknown color type {0:?}: use one of \"grayscale\", \"truecolor\", \"grayscale+alpha\", \"truecolor+alpha\""
)]
pub struct ColorTypeError(pub String);

/// A required setting is missing when the encode is requested.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("{0} not set")]
    Missing(&'static str),
}
