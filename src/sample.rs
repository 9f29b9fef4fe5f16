//! Per-pixel sampling from a raw buffer through an [`InputFormat`].

use crate::input::{Channel, InputFormat};

/// Alpha for formats without an alpha channel. Output keeps the low byte.
pub const OPAQUE: u16 = 0xFFFF;

/// One logical color sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sample {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Sample {
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Unweighted channel average.
    #[inline]
    pub fn gray(&self) -> u16 {
        ((u32::from(self.r) + u32::from(self.g) + u32::from(self.b)) / 3) as u16
    }
}

/// Sample pixel `index` of `buffer`.
///
/// A pixel cut short by the end of the buffer is read as all zero bytes.
pub fn sample(buffer: &[u8], index: usize, format: &InputFormat) -> Sample {
    let bpp = format.bytes_per_pixel();
    let pixel = index
        .checked_mul(bpp)
        .and_then(|start| buffer.get(start..start.checked_add(bpp)?))
        .unwrap_or(&[]);

    let read = |channel| format.channel(channel).map(|spec| spec.extract(pixel));
    let a = read(Channel::Alpha).unwrap_or(OPAQUE);

    if let Some(gray) = read(Channel::Gray) {
        Sample::new(gray, gray, gray, a)
    } else {
        Sample::new(
            read(Channel::Red).unwrap_or(0),
            read(Channel::Green).unwrap_or(0),
            read(Channel::Blue).unwrap_or(0),
            a,
        )
    }
}
