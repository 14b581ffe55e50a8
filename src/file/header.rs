use super::ChunkHeader;
use crate::reader::{DecodeResult, FormatError, Reader};
use std::io::Read;

/// The fixed fields of the SMF header chunk.
///
/// Only the channel count drives decoding. The format and division words are
/// kept raw for the consumer; this decoder does not interpret them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// SMF format word (0, 1 or 2 in well-formed files), not interpreted.
    pub format: u16,
    /// Number of channels/tracks declared by the file.
    pub channel_count: u16,
    /// Raw division word (ticks per quarter note or SMPTE), not interpreted.
    pub division: u16,
}

impl FileHeader {
    /// Format, channel count and division occupy six bytes.
    const FIXED_LEN: u32 = 6;

    /// Decode the header chunk.
    ///
    /// The chunk tag is consumed without being checked against `MThd`. Declared
    /// header bytes beyond the fixed fields are skipped one at a time.
    pub fn read<R: Read>(reader: &mut Reader<R>) -> DecodeResult<Self> {
        let chunk = ChunkHeader::read(reader)?;
        if chunk.len < Self::FIXED_LEN {
            return Err(reader.format_err(FormatError::HeaderTooShort(chunk.len)));
        }

        let format = reader.read_u16_be()?;
        let channel_count = reader.read_u16_be()?;
        let division = reader.read_u16_be()?;

        if channel_count == 0 {
            return Err(reader.format_err(FormatError::NoChannels));
        }

        while reader.chunk_remaining() > 0 {
            reader.expect_byte()?;
        }

        Ok(Self {
            format,
            channel_count,
            division,
        })
    }
}
