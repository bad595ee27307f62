//! Role hierarchy rules.
//!
//! - Rank resolution: how senior the acting member is
//! - Reordering: which part of the role list a member may rearrange

pub mod rank;
pub mod reorder;

use roleorder_common::{Rank, RoleId};

pub use rank::{
    can_manage_role, effective_rank, require_manageable_role, role_list, RoleListEntry,
    LOCKED_ROLE_HINT,
};
pub use reorder::{partition, propose_reorder, Decision, Partition};

/// Permission check errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionError {
    /// Target role is equal to or above the actor.
    RoleHierarchy { actor_rank: Rank, target_rank: Rank },

    /// Role does not exist in the server snapshot.
    UnknownRole(RoleId),
}

impl std::fmt::Display for PermissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoleHierarchy {
                actor_rank,
                target_rank,
            } => write!(
                f,
                "Cannot modify role at rank {target_rank} (your rank: {actor_rank})"
            ),
            Self::UnknownRole(id) => write!(f, "Role {id} not found"),
        }
    }
}

impl std::error::Error for PermissionError {}
