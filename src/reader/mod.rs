#![doc = r#"
Byte-level reading primitives for the SMF decoder
"#]

mod error;
pub use error::*;

use std::io::{self, Read};

/// A forward-only cursor over an SMF byte source.
///
/// The reader owns the source for the duration of one parse and tracks two
/// counters: the absolute number of bytes consumed (used for error positions) and
/// the remaining byte budget of the chunk currently being decoded. The budget is
/// signed; a read that crosses a chunk boundary drives it negative and the
/// caller's `> 0` loop check still terminates.
pub struct Reader<R> {
    source: R,
    position: u64,
    chunk_remaining: i64,
}

impl<R: Read> Reader<R> {
    /// Wrap a byte source. The source is released when the reader is dropped.
    pub fn new(source: R) -> Self {
        Self {
            source,
            position: 0,
            chunk_remaining: 0,
        }
    }

    /// Absolute number of bytes consumed so far.
    pub const fn position(&self) -> u64 {
        self.position
    }

    /// Bytes left in the chunk installed by [`begin_chunk`](Self::begin_chunk).
    pub const fn chunk_remaining(&self) -> i64 {
        self.chunk_remaining
    }

    /// Install a fresh chunk budget of `len` bytes.
    pub fn begin_chunk(&mut self, len: u32) {
        self.chunk_remaining = i64::from(len);
    }

    /// Read a single byte. `Ok(None)` on a clean end of input.
    pub fn read_byte(&mut self) -> DecodeResult<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.source.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.position += 1;
                    self.chunk_remaining -= 1;
                    return Ok(Some(buf[0]));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(DecodeError::new(self.position, e.into())),
            }
        }
    }

    /// Read a single byte, treating end of input as an error.
    pub fn expect_byte(&mut self) -> DecodeResult<u8> {
        self.read_byte()?
            .ok_or_else(|| DecodeError::eof(self.position))
    }

    /// Read a big-endian 16-bit unsigned integer.
    pub fn read_u16_be(&mut self) -> DecodeResult<u16> {
        let hi = self.expect_byte()?;
        let lo = self.expect_byte()?;
        Ok(u16::from_be_bytes([hi, lo]))
    }

    /// Read a big-endian 32-bit unsigned integer.
    pub fn read_u32_be(&mut self) -> DecodeResult<u32> {
        let mut bytes = [0u8; 4];
        for byte in &mut bytes {
            *byte = self.expect_byte()?;
        }
        Ok(u32::from_be_bytes(bytes))
    }

    /// Consume and discard `len` bytes.
    pub fn skip(&mut self, len: u32) -> DecodeResult<()> {
        for _ in 0..len {
            self.expect_byte()?;
        }
        Ok(())
    }

    /// Decode a MIDI variable-length quantity.
    ///
    /// Seven bits per byte, the high bit flags a continuation. A source that ends
    /// mid-quantity yields the partial accumulated value; the surrounding chunk
    /// budget check is responsible for flagging the truncation.
    pub fn read_var_len(&mut self) -> DecodeResult<u32> {
        let Some(first) = self.read_byte()? else {
            return Ok(0);
        };

        let mut value = u32::from(first & 0x7F);
        let mut byte = first;
        while byte & 0x80 != 0 {
            match self.read_byte()? {
                Some(next) => {
                    value = (value << 7) | u32::from(next & 0x7F);
                    byte = next;
                }
                None => break,
            }
        }
        Ok(value)
    }

    pub(crate) fn format_err(&self, err: FormatError) -> DecodeError {
        DecodeError::new(self.position, err.into())
    }
}
