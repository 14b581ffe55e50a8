#![doc = r#"
SMF chunk decoding

A Standard MIDI File is a sequence of chunks, each a 4-byte ASCII tag followed by
a 32-bit big-endian byte length and then the chunk body. The first chunk is the
header (`MThd`): a format word, the channel/track count and a division word.
Each following chunk (`MTrk`) holds one track's (delta-time, event) pairs.

This decoder consumes tags without validating them, reads the header fields it
needs and then decodes exactly one track chunk per header-declared channel.
"#]

mod chunk;
pub use chunk::*;

mod header;
pub use header::*;

mod track;
pub use track::ChannelStatus;
pub(crate) use track::TrackReader;
