use alloc::format;

use crate::error::PngError;

/// Caps on what an encode may produce.
///
/// Every field defaults to `None`, meaning unbounded.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum `width * height`.
    pub max_pixels: Option<u64>,
    /// Maximum bytes held at once: scanlines plus the zlib stream.
    pub max_memory_bytes: Option<u64>,
}

fn within(what: &str, value: u64, max: Option<u64>) -> Result<(), PngError> {
    match max {
        Some(max) if value > max => Err(PngError::LimitExceeded(format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}

impl Limits {
    /// Reject dimensions over any configured cap.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), PngError> {
        within("width", u64::from(width), self.max_width)?;
        within("height", u64::from(height), self.max_height)?;
        within(
            "pixel count",
            u64::from(width) * u64::from(height),
            self.max_pixels,
        )
    }

    /// Reject a working set larger than `max_memory_bytes`.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), PngError> {
        within(
            "working set (bytes)",
            u64::try_from(bytes).unwrap_or(u64::MAX),
            self.max_memory_bytes,
        )
    }
}
