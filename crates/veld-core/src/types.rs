//! Domain value types carried inside change events and notifications.
//!
//! These are plain copy types owned by the entities themselves; the
//! zone core only reads them while forwarding events.

use std::fmt;

use crate::id::{MobId, PlayerId};

/// A tile position within one zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Horizontal tile coordinate.
    pub x: u16,
    /// Vertical tile coordinate.
    pub y: u16,
}

impl Position {
    /// Construct a position from tile coordinates.
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Numeric code of a visual motion (sit, stand, gesture, ...).
///
/// The code table belongs to the wire protocol; the core relays it
/// without interpretation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MotionCode(pub u8);

impl fmt::Display for MotionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Template identifier of an inventory item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemId(pub u16);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Equipment slot bitfield value (head, body, weapon, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EquipSlot(pub u16);

impl fmt::Display for EquipSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a skill within the skill table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SkillId(pub u16);

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a buff (status effect) within the buff table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BuffId(pub u16);

impl fmt::Display for BuffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A participant's role within a party.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PartyRole {
    /// Not in a party.
    #[default]
    None,
    /// Ordinary party member.
    Member,
    /// Party leader.
    Leader,
}

impl fmt::Display for PartyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Member => write!(f, "member"),
            Self::Leader => write!(f, "leader"),
        }
    }
}

/// Which vital pool a recovery event refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Vital {
    /// Hit points.
    Hp,
    /// Mana points.
    Mp,
    /// Stamina points.
    Sp,
}

impl fmt::Display for Vital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hp => write!(f, "hp"),
            Self::Mp => write!(f, "mp"),
            Self::Sp => write!(f, "sp"),
        }
    }
}

/// Reference to either kind of in-zone actor.
///
/// Combat events (skills, attacks, kills, buffs) may target or originate
/// from participants and mobs alike.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActorRef {
    /// A participant, by world-unique id.
    Player(PlayerId),
    /// A mob, by in-zone id.
    Mob(MobId),
}

impl fmt::Display for ActorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player(id) => write!(f, "player:{id}"),
            Self::Mob(id) => write!(f, "mob:{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_display() {
        assert_eq!(Position::new(120, 87).to_string(), "(120, 87)");
    }

    #[test]
    fn party_role_defaults_to_none() {
        assert_eq!(PartyRole::default(), PartyRole::None);
    }

    #[test]
    fn actor_ref_display_distinguishes_kinds() {
        assert_eq!(ActorRef::Player(PlayerId(7)).to_string(), "player:7");
        assert_eq!(ActorRef::Mob(MobId(7)).to_string(), "mob:7");
    }
}
