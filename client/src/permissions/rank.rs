//! Effective rank resolution.
//!
//! Authority over a role comes from the most senior role the acting member
//! holds. Server owners sit above every role.

use roleorder_common::{Member, Rank, Role, RoleId, Server};
use serde::Serialize;

use super::PermissionError;

/// Shown next to roles the acting member may not move or edit.
pub const LOCKED_ROLE_HINT: &str =
    "You cannot move or adjust roles equal to or higher than your own.";

/// Compute the acting member's effective rank in a server.
///
/// Resolution order:
/// 1. Server owner is `Rank::Owner`
/// 2. Assigned role ids are resolved against the server's roles; ids with no
///    matching role are ignored
/// 3. The most senior resolved rank wins; no resolved roles means `Unranked`
///
/// Always computed from the snapshot passed in, so role and membership
/// changes between calls are picked up.
pub fn effective_rank(server: &Server, member: &Member) -> Rank {
    if server.is_owner(member) {
        return Rank::Owner;
    }

    member
        .roles
        .iter()
        .filter_map(|id| server.role(id))
        .map(Role::hierarchy_rank)
        .min()
        .unwrap_or(Rank::Unranked)
}

/// Check if an actor can move or edit a target role.
///
/// Roles at or above the actor's rank are off limits (equal rank included).
pub fn can_manage_role(actor_rank: Rank, target: &Role) -> Result<(), PermissionError> {
    let target_rank = target.hierarchy_rank();
    if actor_rank.outranks(target_rank) {
        Ok(())
    } else {
        Err(PermissionError::RoleHierarchy {
            actor_rank,
            target_rank,
        })
    }
}

/// Resolve a role by id and require that `member` can manage it.
pub fn require_manageable_role<'a>(
    server: &'a Server,
    member: &Member,
    role_id: &RoleId,
) -> Result<&'a Role, PermissionError> {
    let role = server
        .role(role_id)
        .ok_or_else(|| PermissionError::UnknownRole(role_id.clone()))?;
    can_manage_role(effective_rank(server, member), role)?;
    Ok(role)
}

/// One row of the server role list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleListEntry {
    pub role: Role,
    /// Whether the acting member may drag or open this role.
    pub editable: bool,
}

impl RoleListEntry {
    /// Hint for locked rows, `None` for editable ones.
    #[must_use]
    pub const fn locked_hint(&self) -> Option<&'static str> {
        if self.editable {
            None
        } else {
            Some(LOCKED_ROLE_HINT)
        }
    }
}

/// Build the role list in display order with per-row editability.
pub fn role_list(server: &Server, member: &Member) -> Vec<RoleListEntry> {
    let actor_rank = effective_rank(server, member);
    server
        .ordered_roles()
        .into_iter()
        .map(|role| RoleListEntry {
            editable: can_manage_role(actor_rank, &role).is_ok(),
            role,
        })
        .collect()
}
