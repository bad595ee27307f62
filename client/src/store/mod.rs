//! Role stores.
//!
//! A store owns the authoritative role ordering of each server and accepts a
//! complete new ordering in one call.

mod http;
mod memory;

use async_trait::async_trait;
use roleorder_common::{RoleId, ServerId};
use thiserror::Error;

pub use http::HttpRoleStore;
pub use memory::InMemoryRoleStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Unknown server: {0}")]
    UnknownServer(ServerId),

    #[error("Ordering references unknown role: {0}")]
    UnknownRole(RoleId),

    #[error("Connection failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server rejected ordering: {status} - {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Invalid API URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Persists role orderings.
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Replace the server's role ordering, most senior first.
    async fn set_role_ordering(
        &self,
        server_id: &ServerId,
        order: &[RoleId],
    ) -> Result<(), StoreError>;
}
