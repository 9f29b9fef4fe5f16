//! PNG chunk framing.
//!
//! Every chunk is `length (u32 BE) ++ type ++ payload ++ crc (u32 BE)`, with
//! the CRC covering type and payload.

use alloc::vec::Vec;
use core::fmt::{self, Debug, Write};

use crate::checksum::Crc32;
use crate::color::ColorType;

/// The 8 bytes every PNG file starts with.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Longest keyword a tEXt chunk may carry.
pub const MAX_KEYWORD_LEN: usize = 79;

/// A four-letter chunk type tag.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ChunkType(pub [u8; 4]);

#[allow(nonstandard_style)]
impl ChunkType {
    pub const IHDR: Self = Self(*b"IHDR");
    pub const IDAT: Self = Self(*b"IDAT");
    pub const IEND: Self = Self(*b"IEND");
    pub const tEXt: Self = Self(*b"tEXt");
    /// Background color. Defined but never written by the encoder.
    pub const bKGD: Self = Self(*b"bKGD");

    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl Debug for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            f.write_char(b as char)?;
        }
        Ok(())
    }
}

/// Append one framed chunk to `out`.
///
/// Payloads longer than `u32::MAX` cannot be framed; callers size-check first.
pub fn write_chunk(out: &mut Vec<u8>, ty: ChunkType, payload: &[u8]) {
    debug_assert!(u32::try_from(payload.len()).is_ok());
    log::trace!("chunk {:?}: {} bytes", ty, payload.len());

    let mut crc = Crc32::new();
    crc.update(ty.as_bytes());
    crc.update(payload);

    out.reserve(payload.len() + 12);
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(ty.as_bytes());
    out.extend_from_slice(payload);
    out.extend_from_slice(&crc.finish().to_be_bytes());
}

/// IHDR payload: 8-bit depth, deflate compression, adaptive filtering, no interlace.
pub fn ihdr_payload(width: u32, height: u32, color_type: ColorType) -> [u8; 13] {
    let mut out = [0u8; 13];
    out[0..4].copy_from_slice(&width.to_be_bytes());
    out[4..8].copy_from_slice(&height.to_be_bytes());
    out[8] = color_type.bit_depth();
    out[9] = color_type.code();
    // compression, filter and interlace methods stay 0
    out
}

/// tEXt payload: keyword, NUL, text.
///
/// NUL bytes are dropped from keyword and text, as the first NUL is the
/// separator. The keyword is then cut to 79 bytes, which can split a
/// multi-byte UTF-8 character; PNG reads keywords as Latin-1.
pub fn text_payload(keyword: &str, text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(keyword.len().min(MAX_KEYWORD_LEN) + 1 + text.len());
    out.extend(keyword.bytes().filter(|&b| b != 0).take(MAX_KEYWORD_LEN));
    out.push(0);
    out.extend(text.bytes().filter(|&b| b != 0));
    out
}

/// An unparsed chunk read back from PNG bytes.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RawChunk<'b> {
    pub ty: ChunkType,
    pub payload: &'b [u8],
    pub declared_crc: u32,
}

impl RawChunk<'_> {
    /// Whether the stored CRC matches the type and payload.
    pub fn crc_matches(&self) -> bool {
        let mut crc = Crc32::new();
        crc.update(self.ty.as_bytes());
        crc.update(self.payload);
        crc.finish() == self.declared_crc
    }
}

impl Debug for RawChunk<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head = &self.payload[..self.payload.len().min(12)];
        f.debug_struct("RawChunk")
            .field("ty", &self.ty)
            .field("payload", &(head, self.payload.len()))
            .field("declared_crc", &self.declared_crc)
            .finish()
    }
}

/// Iterates the chunks of a PNG byte stream.
///
/// The signature is skipped without being checked. Iteration stops at the
/// first chunk that runs past the end of the data.
#[derive(Clone, Debug)]
pub struct RawChunkIter<'b>(&'b [u8]);

impl<'b> RawChunkIter<'b> {
    pub fn new(png: &'b [u8]) -> Self {
        Self(png.get(PNG_SIGNATURE.len()..).unwrap_or(&[]))
    }
}

impl<'b> Iterator for RawChunkIter<'b> {
    type Item = RawChunk<'b>;

    fn next(&mut self) -> Option<Self::Item> {
        let (len, rest) = self.0.split_first_chunk::<4>()?;
        let (ty, rest) = rest.split_first_chunk::<4>()?;
        let len = usize::try_from(u32::from_be_bytes(*len)).ok()?;
        if rest.len() < len {
            self.0 = &[];
            return None;
        }
        let (payload, rest) = rest.split_at(len);
        let Some((crc, rest)) = rest.split_first_chunk::<4>() else {
            self.0 = &[];
            return None;
        };
        self.0 = rest;
        Some(RawChunk {
            ty: ChunkType(*ty),
            payload,
            declared_crc: u32::from_be_bytes(*crc),
        })
    }
}
