use thiserror::Error;

#[doc = r#"
A set of errors that can occur while decoding a Standard MIDI File
"#]
#[derive(Debug, Error)]
#[error("decoding at byte {position}, {kind}")]
pub struct DecodeError {
    position: u64,
    pub(crate) kind: DecodeErrorKind,
}

/// A kind of error that the decoder can produce
#[derive(Debug, Error)]
pub enum DecodeErrorKind {
    /// The underlying byte source failed
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),
    /// The byte source ended before a required field or byte budget was satisfied
    #[error("unexpected end of input")]
    UnexpectedEof,
    /// Structurally invalid content
    #[error("{0}")]
    Format(#[from] FormatError),
}

/// A structural violation of the SMF format
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The header chunk declares fewer bytes than its fixed fields occupy
    #[error("header declares {0} bytes, shorter than its fixed fields")]
    HeaderTooShort(u32),
    /// The header declares a channel count of zero
    #[error("channel count of zero, is this a valid midi file?")]
    NoChannels,
    /// A status byte that is neither a channel message nor a known meta/sysex event
    #[error("unexpected event status {0:#04x}")]
    UnexpectedEvent(u8),
    /// A meta or sysex payload longer than the bytes left in the track chunk
    #[error("event length {length} exceeds the {remaining} bytes left in the chunk")]
    EventTooLong {
        /// Declared payload length
        length: u32,
        /// Bytes left in the chunk budget
        remaining: i64,
    },
    /// A tempo meta event with a payload other than 3 bytes
    #[error("tempo event declares {0} bytes, expected 3")]
    TempoLength(u32),
    /// A tempo of zero microseconds per quarter note
    #[error("tempo of zero microseconds per quarter note")]
    ZeroTempo,
}

impl DecodeError {
    /// Create a decode error from a position and kind
    pub fn new(position: u64, kind: DecodeErrorKind) -> Self {
        Self { position, kind }
    }

    /// Create a new unexpected-end-of-input error
    pub const fn eof(position: u64) -> Self {
        Self {
            position,
            kind: DecodeErrorKind::UnexpectedEof,
        }
    }

    /// True if the byte source ended prematurely
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, DecodeErrorKind::UnexpectedEof)
    }

    /// Returns the error kind of the decoder.
    pub fn kind(&self) -> &DecodeErrorKind {
        &self.kind
    }

    /// Returns the byte offset where decoding failed.
    pub fn position(&self) -> u64 {
        self.position
    }
}

/// The decode result type (see [`DecodeError`])
pub type DecodeResult<T> = Result<T, DecodeError>;
