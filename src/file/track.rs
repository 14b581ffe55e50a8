use super::ChunkHeader;
use crate::{
    Tempo,
    chart::{ChannelLane, NoteEvent},
    reader::{DecodeResult, FormatError, Reader},
};
use num_enum::TryFromPrimitive;
use std::io::Read;

const META_EVENT: u8 = 0xFF;
const SYSEX_START: u8 = 0xF0;
const SYSEX_CONTINUE: u8 = 0xF7;

const META_TRACK_NAME: u8 = 0x03;
const META_TEMPO: u8 = 0x51;

#[doc = r#"
Channel message classes, keyed by the high nibble of a status byte.

Nibbles outside `0x8..=0xE` are not channel messages and fail conversion; those
status bytes dispatch as meta or system exclusive events instead.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum ChannelStatus {
    /// Note off, with key and release velocity
    NoteOff = 0x8,
    /// Note on, with key and velocity (velocity zero doubles as a note off)
    NoteOn = 0x9,
    /// Polyphonic key pressure
    PolyPressure = 0xA,
    /// Controller change
    ControlChange = 0xB,
    /// Program change
    ProgramChange = 0xC,
    /// Channel pressure
    ChannelPressure = 0xD,
    /// Pitch bend
    PitchBend = 0xE,
}

impl ChannelStatus {
    /// Classify a full status byte by its high nibble.
    pub fn classify(status: u8) -> Option<Self> {
        Self::try_from(status >> 4).ok()
    }

    /// Number of data bytes carried by this message class.
    pub const fn data_len(self) -> usize {
        match self {
            Self::ProgramChange | Self::ChannelPressure => 1,
            _ => 2,
        }
    }
}

/// The per-track event state machine.
///
/// One call to [`TrackReader::decode`] consumes exactly one track chunk and
/// appends the note events it finds to one channel lane. Tempo metas update the
/// file-scope tempo in place; every other non-note event is consumed and
/// dropped. Running status and the tick accumulator live here and nowhere else;
/// the state is discarded once the chunk's byte budget is spent.
pub(crate) struct TrackReader {
    running_status: Option<u8>,
    elapsed_ticks: u32,
}

impl TrackReader {
    /// Decode one track chunk into `lane`.
    pub(crate) fn decode<R: Read>(
        reader: &mut Reader<R>,
        lane: &mut ChannelLane,
        tempo: &mut Tempo,
    ) -> DecodeResult<()> {
        ChunkHeader::read(reader)?;

        let mut track = Self {
            running_status: None,
            elapsed_ticks: 0,
        };
        while reader.chunk_remaining() > 0 {
            track.next_event(reader, lane, tempo)?;
        }
        Ok(())
    }

    fn next_event<R: Read>(
        &mut self,
        reader: &mut Reader<R>,
        lane: &mut ChannelLane,
        tempo: &mut Tempo,
    ) -> DecodeResult<()> {
        let delta = reader.read_var_len()?;
        self.elapsed_ticks = self.elapsed_ticks.saturating_add(delta);

        let byte = reader.expect_byte()?;

        // A byte without its high bit set is the first data byte of a message
        // reusing the previous status (running status).
        let (status, consumed_data) = if byte & 0x80 == 0 {
            (self.running_status.unwrap_or(0), Some(byte))
        } else {
            self.running_status = Some(byte);
            (byte, None)
        };

        match ChannelStatus::classify(status) {
            Some(class) => self.channel_message(reader, lane, class, consumed_data),
            None => Self::system_message(reader, lane, tempo, status),
        }
    }

    fn channel_message<R: Read>(
        &mut self,
        reader: &mut Reader<R>,
        lane: &mut ChannelLane,
        class: ChannelStatus,
        consumed_data: Option<u8>,
    ) -> DecodeResult<()> {
        let key = match consumed_data {
            Some(byte) => byte,
            None => reader.expect_byte()?,
        };
        let velocity = if class.data_len() == 2 {
            reader.expect_byte()?
        } else {
            0
        };

        match class {
            ChannelStatus::NoteOn | ChannelStatus::NoteOff => {
                lane.push(NoteEvent {
                    ticks: self.elapsed_ticks,
                    active: class == ChannelStatus::NoteOn && velocity != 0,
                    note: key,
                    velocity,
                });
            }
            // Controllers, pressure, program changes and pitch bends are decoded
            // only to keep the cursor aligned.
            _ => {}
        }
        Ok(())
    }

    fn system_message<R: Read>(
        reader: &mut Reader<R>,
        lane: &mut ChannelLane,
        tempo: &mut Tempo,
        status: u8,
    ) -> DecodeResult<()> {
        match status {
            META_EVENT => {
                let meta_type = reader.expect_byte()?;
                let length = reader.read_var_len()?;
                Self::check_budget(reader, length)?;

                match meta_type {
                    META_TEMPO => {
                        if length != 3 {
                            return Err(reader.format_err(FormatError::TempoLength(length)));
                        }
                        let micros = Self::read_u24_be(reader)?;
                        *tempo = Tempo::from_micros_per_quarter(micros)
                            .map_err(|e| reader.format_err(e))?;
                        #[cfg(feature = "tracing")]
                        tracing::debug!("tempo meta: {micros} µs/quarter -> {} bpm", tempo.bpm());
                    }
                    META_TRACK_NAME => {
                        let name = Self::read_text(reader, length)?;
                        if !name.trim().is_empty() {
                            lane.set_name(name);
                        }
                    }
                    _ => reader.skip(length)?,
                }
            }
            SYSEX_START | SYSEX_CONTINUE => {
                let length = reader.read_var_len()?;
                Self::check_budget(reader, length)?;
                reader.skip(length)?;
            }
            other => return Err(reader.format_err(FormatError::UnexpectedEvent(other))),
        }
        Ok(())
    }

    fn check_budget<R: Read>(reader: &Reader<R>, length: u32) -> DecodeResult<()> {
        let remaining = reader.chunk_remaining();
        if i64::from(length) > remaining {
            return Err(reader.format_err(FormatError::EventTooLong { length, remaining }));
        }
        Ok(())
    }

    fn read_u24_be<R: Read>(reader: &mut Reader<R>) -> DecodeResult<u32> {
        let mut value = 0u32;
        for _ in 0..3 {
            value = (value << 8) | u32::from(reader.expect_byte()?);
        }
        Ok(value)
    }

    fn read_text<R: Read>(reader: &mut Reader<R>, length: u32) -> DecodeResult<String> {
        let mut bytes = Vec::with_capacity(length as usize);
        for _ in 0..length {
            bytes.push(reader.expect_byte()?);
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
