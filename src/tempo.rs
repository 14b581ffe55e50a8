use crate::reader::FormatError;

const MICROS_PER_MINUTE: f64 = 60_000_000.0;

/// A file-scope tempo in beats per minute.
///
/// SMF tempo metas carry microseconds per quarter note; the music engine wants
/// beats per minute, so the conversion happens once at decode time. A file with
/// no tempo meta plays at the MIDI default of 120 bpm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tempo(u32);

impl Tempo {
    /// The MIDI default of 120 beats per minute.
    pub const DEFAULT: Self = Self(120);

    /// Convert a tempo meta payload, rounding to the nearest whole bpm.
    pub fn from_micros_per_quarter(micros: u32) -> Result<Self, FormatError> {
        if micros == 0 {
            return Err(FormatError::ZeroTempo);
        }
        Ok(Self((MICROS_PER_MINUTE / f64::from(micros)).round() as u32))
    }

    /// Beats per minute.
    pub const fn bpm(self) -> u32 {
        self.0
    }
}

impl Default for Tempo {
    fn default() -> Self {
        Self::DEFAULT
    }
}
