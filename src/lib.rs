//! Standard MIDI File (SMF) decoder for rhythm and music games.
//!
//! `midilane` reads the binary SMF chunk stream and reduces it to the two
//! things a note-highway style engine needs: one ordered timeline of note
//! on/off events per channel, and the file's tempo in beats per minute.
//! Everything else in the file (controllers, pitch bends, system exclusive
//! data, unrecognized metas) is decoded just far enough to be skipped
//! correctly, including messages written with MIDI running status.
//!
//! # Example
//!
//! ```no_run
//! use midilane::prelude::*;
//!
//! # fn main() -> Result<(), midilane::reader::DecodeError> {
//! let mut chart = NoteChart::new();
//! chart.parse_path("assets/song.mid")?;
//!
//! println!("{} bpm", chart.tempo());
//! for lane in chart.channels() {
//!     println!("{}: {} note events", lane.name(), lane.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Format documentation
//!
//! - [`csie`]
//! - [`somascape.org`]
//!
//! [`csie`]: https://www.csie.ntu.edu.tw/~r92092/ref/midi/
//! [`somascape.org`]: http://www.somascape.org/midi/tech/mfile.html

pub mod chart;
pub mod file;
pub mod reader;

mod tempo;
pub use tempo::*;

/// Common imports for decoding files into a [`NoteChart`](chart::NoteChart).
pub mod prelude {
    pub use crate::{
        Tempo,
        chart::{ChannelLane, NoteChart, NoteEvent},
        file::{ChannelStatus, ChunkHeader, FileHeader},
        reader::{DecodeError, DecodeErrorKind, DecodeResult, FormatError, Reader},
    };
}
