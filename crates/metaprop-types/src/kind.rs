//! Value kinds

use serde::Serialize;
use std::fmt;

/// The case of a [`Value`](crate::Value), without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValueKind {
    Integer,
    Real,
    Text,
    Boolean,
    Sequence,
    Absent,
}

impl ValueKind {
    /// Get the kind name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::Real => "Real",
            Self::Text => "Text",
            Self::Boolean => "Boolean",
            Self::Sequence => "Sequence",
            Self::Absent => "Absent",
        }
    }

    /// Check if this kind is one of the numeric kinds
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Real)
    }

    /// Check if values of this kind have a size (character or element count)
    pub const fn is_sized(&self) -> bool {
        matches!(self, Self::Text | Self::Sequence)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
