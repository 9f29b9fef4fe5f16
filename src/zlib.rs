//! zlib streams made of stored (uncompressed) DEFLATE blocks.
//!
//! Layout:
//!
//! ```text
//! 78 01                       CMF, FLG: deflate, 32K window, no dictionary
//! BH LL LL NN NN data...      one per block, at most MAX_BLOCK_LEN data bytes
//! AA AA AA AA                 Adler-32 of the input, big-endian
//! ```
//!
//! `BH` is 1 on the last block and 0 otherwise (BTYPE 00 = stored), `LL` is the
//! block length and `NN` its one's complement, both little-endian.

use alloc::vec::Vec;

use crate::checksum::adler32;

const CMF: u8 = 0x78;
const FLG: u8 = 0x01;

/// Largest data length of a single stored block.
pub const MAX_BLOCK_LEN: usize = 32767;

const BLOCK_HEADER_LEN: usize = 5;

/// Exact output size of [`zlib_wrap`] for `len` input bytes.
pub fn wrapped_len(len: usize) -> Option<usize> {
    let blocks = len.div_ceil(MAX_BLOCK_LEN).max(1);
    blocks
        .checked_mul(BLOCK_HEADER_LEN)?
        .checked_add(len)?
        .checked_add(2 + 4)
}

/// Wrap `data` in a zlib stream without compressing it.
///
/// Empty input still gets one (empty, final) block so that the stream is
/// a complete DEFLATE stream.
pub fn zlib_wrap(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(wrapped_len(data.len()).unwrap_or(data.len()));
    out.push(CMF);
    out.push(FLG);

    if data.is_empty() {
        push_stored_block(&mut out, &[], true);
    } else {
        let mut blocks = data.chunks(MAX_BLOCK_LEN).peekable();
        while let Some(block) = blocks.next() {
            push_stored_block(&mut out, block, blocks.peek().is_none());
        }
    }

    out.extend_from_slice(&adler32(data).to_be_bytes());
    out
}

fn push_stored_block(out: &mut Vec<u8>, block: &[u8], last: bool) {
    debug_assert!(block.len() <= MAX_BLOCK_LEN);
    let len = block.len() as u16;
    out.push(u8::from(last));
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(&(!len).to_le_bytes());
    out.extend_from_slice(block);
}
