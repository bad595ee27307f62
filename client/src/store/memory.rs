//! In-process role store.

use std::collections::HashMap;

use async_trait::async_trait;
use roleorder_common::{RoleId, Server, ServerId};
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use super::{RoleStore, StoreError};

/// Keeps server snapshots in memory and applies orderings by rewriting
/// ranks to list positions.
#[derive(Debug, Default)]
pub struct InMemoryRoleStore {
    servers: RwLock<HashMap<ServerId, Server>>,
    history: Mutex<Vec<(ServerId, Vec<RoleId>)>>,
}

impl InMemoryRoleStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_server(server: Server) -> Self {
        Self {
            servers: RwLock::new(HashMap::from([(server.id.clone(), server)])),
            history: Mutex::default(),
        }
    }

    pub async fn insert(&self, server: Server) {
        self.servers.write().await.insert(server.id.clone(), server);
    }

    /// Current snapshot of a server.
    pub async fn server(&self, id: &ServerId) -> Option<Server> {
        self.servers.read().await.get(id).cloned()
    }

    /// Every ordering applied so far, oldest first.
    pub async fn history(&self) -> Vec<(ServerId, Vec<RoleId>)> {
        self.history.lock().await.clone()
    }
}

#[async_trait]
impl RoleStore for InMemoryRoleStore {
    #[tracing::instrument(skip(self, order), fields(roles = order.len()))]
    async fn set_role_ordering(
        &self,
        server_id: &ServerId,
        order: &[RoleId],
    ) -> Result<(), StoreError> {
        let mut servers = self.servers.write().await;
        let server = servers
            .get_mut(server_id)
            .ok_or_else(|| StoreError::UnknownServer(server_id.clone()))?;

        if let Some(unknown) = order.iter().find(|id| server.role(id).is_none()) {
            return Err(StoreError::UnknownRole(unknown.clone()));
        }

        // Roles left out of the ordering keep their relative order after it
        let rest: Vec<RoleId> = server
            .ordered_roles()
            .into_iter()
            .map(|r| r.id)
            .filter(|id| !order.contains(id))
            .collect();

        for (position, id) in order.iter().chain(rest.iter()).enumerate() {
            let rank = i64::try_from(position).unwrap_or(i64::MAX);
            for role in server.roles.iter_mut().filter(|r| &r.id == id) {
                role.rank = Some(rank);
            }
        }

        debug!(server_id = %server_id, roles = order.len(), "Applied role ordering");
        self.history
            .lock()
            .await
            .push((server_id.clone(), order.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roleorder_common::{Role, UserId};

    fn id(value: &str) -> RoleId {
        RoleId::new(value).unwrap()
    }

    fn server() -> Server {
        Server {
            id: ServerId::new("srv").unwrap(),
            owner_id: UserId::new("owner").unwrap(),
            roles: vec![
                Role::new(id("a"), "A", Some(0)),
                Role::new(id("b"), "B", Some(1)),
                Role::new(id("c"), "C", None),
            ],
        }
    }

    fn order_of(server: &Server) -> Vec<String> {
        server
            .ordered_roles()
            .into_iter()
            .map(|r| r.id.to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_applies_ordering_as_ranks() {
        let store = InMemoryRoleStore::with_server(server());
        let server_id = ServerId::new("srv").unwrap();

        store
            .set_role_ordering(&server_id, &[id("c"), id("a"), id("b")])
            .await
            .unwrap();

        let updated = store.server(&server_id).await.unwrap();
        assert_eq!(order_of(&updated), ["c", "a", "b"]);
        assert_eq!(updated.role(&id("c")).unwrap().rank, Some(0));
        assert_eq!(store.history().await.len(), 1);
    }

    #[tokio::test]
    async fn test_roles_missing_from_ordering_go_last() {
        let store = InMemoryRoleStore::with_server(server());
        let server_id = ServerId::new("srv").unwrap();

        store
            .set_role_ordering(&server_id, &[id("b")])
            .await
            .unwrap();

        let updated = store.server(&server_id).await.unwrap();
        assert_eq!(order_of(&updated), ["b", "a", "c"]);
    }

    #[tokio::test]
    async fn test_rejects_unknown_server_and_role() {
        let store = InMemoryRoleStore::new();
        let missing = ServerId::new("missing").unwrap();
        assert!(matches!(
            store.set_role_ordering(&missing, &[]).await,
            Err(StoreError::UnknownServer(_))
        ));

        store.insert(server()).await;
        let server_id = ServerId::new("srv").unwrap();
        assert!(matches!(
            store.set_role_ordering(&server_id, &[id("a"), id("zzz")]).await,
            Err(StoreError::UnknownRole(r)) if r == id("zzz")
        ));
        assert!(store.history().await.is_empty());
    }
}
