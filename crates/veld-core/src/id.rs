//! Strongly-typed identifiers for zones, participants, and mobs.

use std::fmt;

/// Identifies one region (zone) of the simulated world.
///
/// Zones are created once at world startup and live for the process
/// duration; their IDs come from the world's region table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoneId(pub u16);

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for ZoneId {
    fn from(v: u16) -> Self {
        Self(v)
    }
}

/// World-unique identifier of a connected participant (player).
///
/// Assigned externally at authentication time, never by this workspace.
/// Inside a zone, the player registry guarantees at most one participant
/// per `PlayerId` at any instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PlayerId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// In-zone identifier of a spawned transient entity (mob).
///
/// Allocated by the zone's monotonic allocator at spawn time. Unique
/// only within the owning zone, strictly increasing, and never reused
/// for the lifetime of the zone — removal does not recycle IDs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MobId(pub u32);

impl fmt::Display for MobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MobId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Template (kind) identifier of a mob.
///
/// Many mobs share one kind; this is **not** unique and is carried
/// only so the notifier can describe what spawned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MobKindId(pub u16);

impl fmt::Display for MobKindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for MobKindId {
    fn from(v: u16) -> Self {
        Self(v)
    }
}

/// Opaque notification destination handle for one participant.
///
/// Minted by the session/transport layer; the zone core never
/// interprets it, it only hands it back to the notifier alongside a
/// semantic event. Sends to a torn-down destination are discarded
/// harmlessly by the notifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionHandle(pub u64);

impl fmt::Display for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SessionHandle {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
