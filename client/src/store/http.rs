//! HTTP role store backed by the chat server's REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use roleorder_common::{RoleId, ServerId};
use serde::Serialize;
use tracing::{debug, error};
use url::Url;

use super::{RoleStore, StoreError};

/// Header carrying the session token.
const SESSION_HEADER: &str = "X-Session-Token";

#[derive(Debug, Serialize)]
struct RanksBody<'a> {
    ranks: &'a [RoleId],
}

/// Sends orderings to `PATCH {api_url}/servers/{server_id}/roles/ranks`.
#[derive(Debug, Clone)]
pub struct HttpRoleStore {
    http: HttpClient,
    api_url: Url,
    session_token: String,
}

impl HttpRoleStore {
    pub fn new(
        api_url: Url,
        session_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let http = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_url: with_trailing_slash(api_url),
            session_token: session_token.into(),
        })
    }

    /// Endpoint for a server's role ranks.
    pub fn ranks_url(&self, server_id: &ServerId) -> Result<Url, StoreError> {
        Ok(self
            .api_url
            .join(&format!("servers/{server_id}/roles/ranks"))?)
    }
}

/// `Url::join` replaces the last path segment unless the base ends in `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[async_trait]
impl RoleStore for HttpRoleStore {
    #[tracing::instrument(skip(self, order), fields(roles = order.len()))]
    async fn set_role_ordering(
        &self,
        server_id: &ServerId,
        order: &[RoleId],
    ) -> Result<(), StoreError> {
        let url = self.ranks_url(server_id)?;

        debug!("Saving role ordering for server {}", server_id);

        let response = self
            .http
            .patch(url)
            .header(SESSION_HEADER, &self.session_token)
            .json(&RanksBody { ranks: order })
            .send()
            .await
            .map_err(|e| {
                error!("Failed to save role ordering: {}", e);
                StoreError::Http(e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Failed to save role ordering: {} - {}", status, body);
            return Err(StoreError::Status { status, body });
        }

        debug!("Saved role ordering for server {}", server_id);
        Ok(())
    }
}
