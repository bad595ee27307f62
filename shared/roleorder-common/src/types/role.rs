//! Role Types

use std::fmt;

use serde::{Deserialize, Serialize};

use super::RoleId;

/// Position in the role hierarchy. Lower sorts first and is more senior.
///
/// `Owner` sits above every role and `Unranked` below every ranked role, so
/// the derived ordering doubles as the permission comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Rank {
    /// Server owner.
    Owner,
    /// Explicit rank number.
    Position(i64),
    /// No rank assigned.
    Unranked,
}

impl Rank {
    /// Whether `self` is strictly more senior than `other`.
    #[must_use]
    pub fn outranks(self, other: Self) -> bool {
        self < other
    }
}

impl From<Option<i64>> for Rank {
    fn from(rank: Option<i64>) -> Self {
        rank.map_or(Self::Unranked, Self::Position)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Owner => f.write_str("owner"),
            Self::Position(n) => write!(f, "#{n}"),
            Self::Unranked => f.write_str("unranked"),
        }
    }
}

/// Server role as seen by the settings screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    /// CSS colour, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colour: Option<String>,
    #[serde(default)]
    pub rank: Option<i64>,
}

impl Role {
    #[must_use]
    pub fn new(id: RoleId, name: impl Into<String>, rank: Option<i64>) -> Self {
        Self {
            id,
            name: name.into(),
            colour: None,
            rank,
        }
    }

    /// Rank on the hierarchy scale, `Unranked` when no rank is set.
    #[must_use]
    pub fn hierarchy_rank(&self) -> Rank {
        Rank::from(self.rank)
    }
}
