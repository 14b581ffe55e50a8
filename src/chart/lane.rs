/// A single note activation or deactivation.
///
/// Only note on/off messages are kept by the decoder; everything else in the
/// file is skipped. A note on with velocity zero is normalized to `active =
/// false`, since files use either convention for releasing a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoteEvent {
    /// Cumulative delta time in ticks from the start of the track.
    pub ticks: u32,
    /// True for a note on; false for a note off or a velocity-zero note on.
    pub active: bool,
    /// MIDI key number, 0-127.
    pub note: u8,
    /// Velocity data byte, 0-127. Zero for one-data-byte messages.
    pub velocity: u8,
}

/// One channel's ordered timeline of note events.
///
/// Events are appended in file order as the track chunk is consumed, so `ticks`
/// never decreases from one event to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelLane {
    name: String,
    events: Vec<NoteEvent>,
}

impl ChannelLane {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            name: format!("Channel {:02}", index + 1),
            events: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, event: NoteEvent) {
        self.events.push(event);
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// The channel's name: the file's track name meta when one is present,
    /// otherwise a `Channel NN` placeholder.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All note events, in tick order.
    pub fn events(&self) -> &[NoteEvent] {
        &self.events
    }

    /// Number of note events on this lane.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if the lane holds no note events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The event at `index`, or `None` out of bounds.
    pub fn event(&self, index: usize) -> Option<&NoteEvent> {
        self.events.get(index)
    }
}
