use strum_macros::EnumString;

/// Room lifecycle events emitted by Prosody's event sync module
///
/// Anything Prosody sends that we do not act on is kept verbatim in
/// `Unrecognized` so it can be logged.
#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
pub enum EventKind {
    #[strum(serialize = "muc-room-created")]
    RoomCreated,

    #[strum(serialize = "muc-occupant-joined")]
    OccupantJoined,

    #[strum(serialize = "muc-occupant-left")]
    OccupantLeft,

    #[strum(serialize = "muc-room-destroyed")]
    RoomDestroyed,

    #[strum(default)]
    Unrecognized(String),
}

impl EventKind {
    /// Parses a raw `event_name`, falling back to `Unrecognized`
    pub fn from_event_name(name: &str) -> Self {
        name.parse()
            .unwrap_or_else(|_| EventKind::Unrecognized(name.to_string()))
    }

    /// The wire name of the event
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::RoomCreated => "muc-room-created",
            EventKind::OccupantJoined => "muc-occupant-joined",
            EventKind::OccupantLeft => "muc-occupant-left",
            EventKind::RoomDestroyed => "muc-room-destroyed",
            EventKind::Unrecognized(name) => name,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
