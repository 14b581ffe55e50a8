use crate::reader::{DecodeResult, Reader};
use std::io::Read;

/// The framing of a single SMF chunk: a 4-byte ASCII tag and a byte length.
///
/// The tag is consumed but never validated; files in the wild carry proprietary
/// tags and the decoder only cares about chunk order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    /// Chunk type tag, `MThd` or `MTrk` in well-formed files.
    pub tag: [u8; 4],
    /// Declared length of the chunk body in bytes.
    pub len: u32,
}

impl ChunkHeader {
    /// Read a chunk's tag and length, installing the length as the reader's
    /// chunk budget.
    pub fn read<R: Read>(reader: &mut Reader<R>) -> DecodeResult<Self> {
        let mut tag = [0u8; 4];
        for byte in &mut tag {
            *byte = reader.expect_byte()?;
        }
        let len = reader.read_u32_be()?;
        reader.begin_chunk(len);
        Ok(Self { tag, len })
    }
}
