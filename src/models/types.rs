use crate::error::DomainError;
use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Copy,
            Clone,
            Debug,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[repr(transparent)]
        #[serde(transparent)]
        pub struct $name(pub uuid::Uuid);

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $name {
            #[inline]
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// Identity of an item while it travels between containers.
define_id!(ItemId);

/// Room ids are small authored numbers (players teleport by typing them).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub u32);

impl core::fmt::Display for RoomId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl core::str::FromStr for RoomId {
    type Err = core::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(RoomId)
    }
}

/// Compass and vertical directions an exit can point to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    #[inline]
    pub fn canonical(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "n" | "north" => Some(Direction::North),
            "e" | "east" => Some(Direction::East),
            "s" | "south" => Some(Direction::South),
            "w" | "west" => Some(Direction::West),
            "u" | "up" => Some(Direction::Up),
            "d" | "down" => Some(Direction::Down),
            _ => None,
        }
    }
}

impl core::str::FromStr for Direction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::parse(s).ok_or_else(|| DomainError::InvalidDirection(s.to_string()))
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_short_and_long_forms() {
        for dir in Direction::ALL {
            assert_eq!(Direction::parse(&dir.canonical()[..1]), Some(dir));
            assert_eq!(Direction::parse(dir.canonical()), Some(dir));
            assert_eq!(Direction::parse(&dir.canonical().to_uppercase()), Some(dir));
        }
        assert_eq!(Direction::parse("northeast"), None);
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn room_id_parses_numbers_only() {
        assert_eq!("99".parse::<RoomId>().ok(), Some(RoomId(99)));
        assert_eq!(" 7 ".parse::<RoomId>().ok(), Some(RoomId(7)));
        assert!("ROOM".parse::<RoomId>().is_err());
        assert!("-1".parse::<RoomId>().is_err());
    }
}
