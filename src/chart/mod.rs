#![doc = r#"
The decoded, queryable form of a MIDI file
"#]

mod lane;
pub use lane::*;

use crate::{
    Tempo,
    file::{FileHeader, TrackReader},
    reader::{DecodeError, DecodeResult, Reader},
};
use std::{fs::File, io::Read, path::Path};

/// Per-channel note timelines plus the file-scope tempo.
///
/// A `NoteChart` is a plain value owned by the caller; parsing replaces its
/// contents wholesale. A failed parse leaves the chart empty but queryable,
/// with [`error`](Self::error) describing the first failure; partially decoded
/// channels are never kept.
#[derive(Debug, Default)]
pub struct NoteChart {
    channels: Vec<ChannelLane>,
    tempo: Tempo,
    division: u16,
    parse_error: Option<String>,
}

impl NoteChart {
    /// Create an empty chart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an SMF byte source into this chart.
    ///
    /// All previously held state is discarded first. The source is read to the
    /// end of the last declared track and released when this returns, whether
    /// decoding succeeded or not.
    pub fn parse<R: Read>(&mut self, source: R) -> Result<(), DecodeError> {
        self.clear();

        let mut reader = Reader::new(source);
        match Self::decode(&mut reader) {
            Ok((header, channels, tempo)) => {
                self.channels = channels;
                self.tempo = tempo;
                self.division = header.division;
                Ok(())
            }
            Err(err) => {
                self.parse_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Open `path` and decode it. The file is closed when this returns.
    pub fn parse_path<P: AsRef<Path>>(&mut self, path: P) -> Result<(), DecodeError> {
        match File::open(path) {
            Ok(file) => self.parse(file),
            Err(err) => {
                self.clear();
                let err = DecodeError::new(0, err.into());
                self.parse_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    fn decode<R: Read>(
        reader: &mut Reader<R>,
    ) -> DecodeResult<(FileHeader, Vec<ChannelLane>, Tempo)> {
        let header = FileHeader::read(reader)?;

        let mut tempo = Tempo::default();
        let mut channels: Vec<ChannelLane> = (0..usize::from(header.channel_count))
            .map(ChannelLane::new)
            .collect();

        // One track chunk per declared channel; trailing chunks are not read.
        for lane in &mut channels {
            TrackReader::decode(reader, lane, &mut tempo)?;
        }

        Ok((header, channels, tempo))
    }

    /// Description of the last parse failure, or an empty string.
    pub fn error(&self) -> &str {
        self.parse_error.as_deref().unwrap_or("")
    }

    /// Number of decoded channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// File tempo in beats per minute. The last tempo meta anywhere in the file
    /// wins; 120 when the file has none.
    pub fn tempo(&self) -> u32 {
        self.tempo.bpm()
    }

    /// The header's raw division word. Not interpreted by the decoder;
    /// consumers converting ticks to wall time need it alongside
    /// [`tempo`](Self::tempo).
    pub fn division(&self) -> u16 {
        self.division
    }

    /// Number of note events on `channel`, or 0 for an invalid index.
    pub fn event_count(&self, channel: usize) -> usize {
        self.channels.get(channel).map_or(0, ChannelLane::len)
    }

    /// The note event at (`channel`, `index`), or `None` for any invalid index.
    pub fn event(&self, channel: usize, index: usize) -> Option<&NoteEvent> {
        self.channels.get(channel)?.event(index)
    }

    /// The lane for `channel`, or `None` for an invalid index.
    pub fn channel(&self, index: usize) -> Option<&ChannelLane> {
        self.channels.get(index)
    }

    /// All decoded lanes.
    pub fn channels(&self) -> &[ChannelLane] {
        &self.channels
    }

    /// Release all parsed state. Safe to call on an empty chart.
    pub fn clear(&mut self) {
        self.channels.clear();
        self.tempo = Tempo::default();
        self.division = 0;
        self.parse_error = None;
    }
}
