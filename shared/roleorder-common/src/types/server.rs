//! Server and Member Types

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Role, RoleId, ServerId, UserId};
use crate::error::Result;

/// Snapshot of a server's role configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    pub id: ServerId,
    pub owner_id: UserId,
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl Server {
    /// Decode a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up a role by id.
    #[must_use]
    pub fn role(&self, id: &RoleId) -> Option<&Role> {
        self.roles.iter().find(|r| &r.id == id)
    }

    /// Roles in display order: most senior first, unranked last.
    ///
    /// Equal ranks are ordered by id so the result does not depend on the
    /// order roles were loaded in.
    #[must_use]
    pub fn ordered_roles(&self) -> Vec<Role> {
        let mut roles = self.roles.clone();
        roles.sort_by(|a, b| {
            a.hierarchy_rank()
                .cmp(&b.hierarchy_rank())
                .then_with(|| a.id.cmp(&b.id))
        });
        roles
    }

    #[must_use]
    pub fn is_owner(&self, member: &Member) -> bool {
        member.user_id == self.owner_id
    }
}

/// The acting user's membership in a server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub user_id: UserId,
    /// Assigned role ids. Unordered.
    #[serde(default)]
    pub roles: HashSet<RoleId>,
}

impl Member {
    #[must_use]
    pub fn new(user_id: UserId, roles: impl IntoIterator<Item = RoleId>) -> Self {
        Self {
            user_id,
            roles: roles.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(id: &str, rank: Option<i64>) -> Role {
        Role::new(RoleId::new(id).unwrap(), id, rank)
    }

    #[test]
    fn test_ordered_roles_puts_unranked_last() {
        let server = Server {
            id: ServerId::new("s").unwrap(),
            owner_id: UserId::new("owner").unwrap(),
            roles: vec![role("c", None), role("b", Some(2)), role("a", Some(1))],
        };

        let ids: Vec<_> = server
            .ordered_roles()
            .into_iter()
            .map(|r| r.id.to_string())
            .collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_ordered_roles_breaks_ties_by_id() {
        let server = Server {
            id: ServerId::new("s").unwrap(),
            owner_id: UserId::new("owner").unwrap(),
            roles: vec![role("z", Some(1)), role("y", None), role("x", Some(1)), role("w", None)],
        };

        let ids: Vec<_> = server
            .ordered_roles()
            .into_iter()
            .map(|r| r.id.to_string())
            .collect();
        assert_eq!(ids, ["x", "z", "w", "y"]);
    }

    #[test]
    fn test_from_json_and_ownership() {
        let server = Server::from_json(
            r##"{
                "id": "srv",
                "owner_id": "u1",
                "roles": [{"id": "mod", "name": "Moderator", "colour": "#ff0000", "rank": 1}]
            }"##,
        )
        .unwrap();

        assert_eq!(server.role(&RoleId::new("mod").unwrap()).unwrap().name, "Moderator");
        assert!(server.role(&RoleId::new("nope").unwrap()).is_none());

        let owner = Member::new(UserId::new("u1").unwrap(), []);
        let other = Member::new(UserId::new("u2").unwrap(), []);
        assert!(server.is_owner(&owner));
        assert!(!server.is_owner(&other));
    }

    #[test]
    fn test_from_json_rejects_bad_ids() {
        let err = Server::from_json(r#"{"id": "", "owner_id": "u1"}"#);
        assert!(err.is_err());
    }
}
