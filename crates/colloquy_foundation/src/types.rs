//! Speaking roles and exercise modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// Role
// =============================================================================

/// One of the two fixed conversational parties.
///
/// `A` and `B` are canonical. The labels `staff` (for `A`) and `guest`
/// (for `B`) are accepted on input, case-insensitively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Role {
    /// First party (e.g. staff).
    A,
    /// Second party (e.g. guest).
    B,
}

impl Role {
    /// Both roles, in canonical order.
    pub const ALL: [Role; 2] = [Role::A, Role::B];

    /// Returns the other party.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// Resolves a speaker label such as `"A"`, `"b"`, `"Staff"` or `"guest"`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("a") || label.eq_ignore_ascii_case("staff") {
            Some(Self::A)
        } else if label.eq_ignore_ascii_case("b") || label.eq_ignore_ascii_case("guest") {
            Some(Self::B)
        } else {
            None
        }
    }

    /// Returns the canonical label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| format!("unknown role label: {s}"))
    }
}

impl TryFrom<String> for Role {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// =============================================================================
// Mode
// =============================================================================

/// The three exercise modes, easiest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Linear read-through.
    Practice,
    /// Multiple-choice response selection.
    Select,
    /// Word/phrase tile reordering.
    Structure,
}

impl Mode {
    /// All modes in unlock order.
    pub const ALL: [Mode; 3] = [Mode::Practice, Mode::Select, Mode::Structure];

    /// Returns the mode that must be mastered before this one, if any.
    #[must_use]
    pub const fn prerequisite(self) -> Option<Self> {
        match self {
            Self::Practice => None,
            Self::Select => Some(Self::Practice),
            Self::Structure => Some(Self::Select),
        }
    }

    /// Returns true if this mode produces a score.
    #[must_use]
    pub const fn is_scored(self) -> bool {
        !matches!(self, Self::Practice)
    }

    /// Returns the lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Practice => "practice",
            Self::Select => "select",
            Self::Structure => "structure",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "practice" => Ok(Self::Practice),
            "select" => Ok(Self::Select),
            "structure" => Ok(Self::Structure),
            other => Err(format!("unknown mode: {other}")),
        }
    }
}
