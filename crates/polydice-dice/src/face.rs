//! The closed enumeration of supported die sizes.

use std::cmp::Ordering;

use polydice_core::error::DiceError;

/// A supported face count. The set is closed: these five members are the
/// only die sizes the domain recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DieFace {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
}

impl DieFace {
    /// All members, smallest first.
    pub const ALL: [Self; 5] = [Self::D4, Self::D6, Self::D8, Self::D12, Self::D20];

    /// Returns the number of faces.
    #[must_use]
    pub fn faces(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D12 => 12,
            Self::D20 => 20,
        }
    }
}

// Ordering is defined by face count, stated explicitly rather than derived
// from declaration order.
impl Ord for DieFace {
    fn cmp(&self, other: &Self) -> Ordering {
        self.faces().cmp(&other.faces())
    }
}

impl PartialOrd for DieFace {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TryFrom<u32> for DieFace {
    type Error = DiceError;

    /// Converts a raw face count to a member.
    ///
    /// # Errors
    ///
    /// Returns `DiceError::InvalidDieType` for any count outside the
    /// supported set.
    fn try_from(faces: u32) -> Result<Self, Self::Error> {
        match faces {
            4 => Ok(Self::D4),
            6 => Ok(Self::D6),
            8 => Ok(Self::D8),
            12 => Ok(Self::D12),
            20 => Ok(Self::D20),
            other => Err(DiceError::InvalidDieType(other)),
        }
    }
}
