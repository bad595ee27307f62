//! Reusable test helpers for role ordering integration tests.
//!
//! Snapshot builders plus stores that fail or block on demand.
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use roleorder_client::store::{RoleStore, StoreError};
use roleorder_common::{Member, Role, RoleId, Server, ServerId, UserId};
use tokio::sync::Notify;

pub const OWNER: &str = "owner";
pub const SERVER: &str = "srv";

pub fn role(id: &str, rank: Option<i64>) -> Role {
    Role::new(RoleId::new(id).unwrap(), id, rank)
}

pub fn ids(values: &[&str]) -> Vec<RoleId> {
    values.iter().map(|v| RoleId::new(v).unwrap()).collect()
}

pub fn server(roles: Vec<Role>) -> Server {
    Server {
        id: ServerId::new(SERVER).unwrap(),
        owner_id: UserId::new(OWNER).unwrap(),
        roles,
    }
}

pub fn member(user: &str, roles: &[&str]) -> Member {
    Member::new(UserId::new(user).unwrap(), ids(roles))
}

/// Admin(1), Mod(2), Helper(3), Guest(unranked)
pub fn community() -> Server {
    server(vec![
        role("guest", None),
        role("helper", Some(3)),
        role("admin", Some(1)),
        role("mod", Some(2)),
    ])
}

/// Store that rejects every ordering.
pub struct FailingStore;

#[async_trait]
impl RoleStore for FailingStore {
    async fn set_role_ordering(
        &self,
        server_id: &ServerId,
        _order: &[RoleId],
    ) -> Result<(), StoreError> {
        Err(StoreError::UnknownServer(server_id.clone()))
    }
}

/// Store that holds every save until released.
#[derive(Default)]
pub struct GatedStore {
    pub release: Arc<Notify>,
}

#[async_trait]
impl RoleStore for GatedStore {
    async fn set_role_ordering(
        &self,
        _server_id: &ServerId,
        _order: &[RoleId],
    ) -> Result<(), StoreError> {
        self.release.notified().await;
        Ok(())
    }
}
