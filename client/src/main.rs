//! Roleorder - Scenario Runner
//!
//! Replays a role drag from a scenario file and prints the decision.

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use tokio::sync::mpsc;
use tracing::info;

use roleorder_client::config::Config;
use roleorder_client::observability;
use roleorder_client::permissions::role_list;
use roleorder_client::scenario::Scenario;
use roleorder_client::store::{HttpRoleStore, InMemoryRoleStore, RoleStore};
use roleorder_client::RoleOrderingService;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    observability::init_tracing(config.log_json);

    let path = std::env::args()
        .nth(1)
        .context("usage: roleorder <scenario.json>")?;
    let scenario = Scenario::load(&path)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        server_id = %scenario.server.id,
        "Replaying role reorder"
    );

    let store: Arc<dyn RoleStore> = if let Some((api_url, token)) = config.remote_store() {
        info!(api_url = %api_url, "Using remote role store");
        Arc::new(HttpRoleStore::new(
            api_url.clone(),
            token,
            config.request_timeout,
        )?)
    } else {
        Arc::new(InMemoryRoleStore::with_server(scenario.server.clone()))
    };

    for entry in role_list(&scenario.server, &scenario.member) {
        info!(
            role_id = %entry.role.id,
            name = %entry.role.name,
            editable = entry.editable,
            "Role list entry"
        );
    }

    let (errors_tx, mut errors_rx) = mpsc::unbounded_channel();
    let service = RoleOrderingService::new(store).with_error_sink(errors_tx);

    let decision = service.handle_drag(&scenario.server, &scenario.member, &scenario.candidate);
    service.settled().await;

    println!("{}", serde_json::to_string_pretty(&decision)?);

    if let Ok(failure) = errors_rx.try_recv() {
        return Err(anyhow!(failure.error)
            .context(format!("Failed to save role ordering for {}", failure.server_id)));
    }

    Ok(())
}
