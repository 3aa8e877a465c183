//! Error types for the Veld zone core.
//!
//! Admission conflicts and absence are boolean/`Option` signals, not
//! errors — a duplicate join or an unknown-id lookup is a normal
//! outcome the caller decides how to handle. Error enums exist only
//! for conditions that indicate a defect in the caller's pairing of
//! attach/detach.

use std::error::Error;
use std::fmt;

use crate::id::PlayerId;

/// Errors from subscription wiring.
///
/// Attach and detach must be called exactly once per join and leave,
/// paired. Either variant therefore indicates a lifecycle bug in the
/// zone's join/leave path, not a recoverable runtime condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WiringError {
    /// `attach` was called for a participant whose sources are already
    /// wired to this zone.
    AlreadyAttached {
        /// The doubly-attached participant.
        player: PlayerId,
    },
    /// `detach` was called for a participant with no wiring recorded.
    NotAttached {
        /// The participant with no wiring.
        player: PlayerId,
    },
}

impl fmt::Display for WiringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyAttached { player } => {
                write!(f, "participant {player} is already attached")
            }
            Self::NotAttached { player } => {
                write!(f, "participant {player} is not attached")
            }
        }
    }
}

impl Error for WiringError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_participant() {
        let err = WiringError::AlreadyAttached {
            player: PlayerId(9),
        };
        assert_eq!(err.to_string(), "participant 9 is already attached");
        let err = WiringError::NotAttached {
            player: PlayerId(4),
        };
        assert_eq!(err.to_string(), "participant 4 is not attached");
    }
}
