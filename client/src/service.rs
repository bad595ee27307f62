//! Drag-completion handler for the server role list.
//!
//! Decides synchronously, then saves accepted orderings in the background.
//! Saves are fire-and-forget: a failed save is logged and forwarded to the
//! error sink, never retried and never fed back into the decision.

use std::sync::Arc;

use roleorder_common::{Member, RoleId, Server, ServerId};
use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use crate::permissions::{effective_rank, propose_reorder, Decision};
use crate::store::{RoleStore, StoreError};

/// A background save that did not go through.
#[derive(Debug)]
pub struct SaveFailure {
    pub server_id: ServerId,
    pub order: Vec<RoleId>,
    pub error: StoreError,
}

/// Applies role reorder gestures against a [`RoleStore`].
pub struct RoleOrderingService {
    store: Arc<dyn RoleStore>,
    runtime: Handle,
    in_flight: Arc<watch::Sender<usize>>,
    errors: Option<mpsc::UnboundedSender<SaveFailure>>,
}

impl RoleOrderingService {
    /// Create a service that spawns saves on the current tokio runtime.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime.
    pub fn new(store: Arc<dyn RoleStore>) -> Self {
        Self::with_runtime(store, Handle::current())
    }

    pub fn with_runtime(store: Arc<dyn RoleStore>, runtime: Handle) -> Self {
        let (in_flight, _) = watch::channel(0);
        Self {
            store,
            runtime,
            in_flight: Arc::new(in_flight),
            errors: None,
        }
    }

    /// Forward failed saves to `sink`.
    #[must_use]
    pub fn with_error_sink(mut self, sink: mpsc::UnboundedSender<SaveFailure>) -> Self {
        self.errors = Some(sink);
        self
    }

    /// Handle a completed drag.
    ///
    /// Rank and the canonical order are derived from the snapshots on every
    /// call. At most one save is issued, and only for accepted orderings.
    pub fn handle_drag(&self, server: &Server, member: &Member, candidate: &[RoleId]) -> Decision {
        let actor_rank = effective_rank(server, member);
        let canonical = server.ordered_roles();

        debug!(
            server_id = %server.id,
            user_id = %member.user_id,
            %actor_rank,
            "Handling role reorder"
        );

        let decision = propose_reorder(&canonical, actor_rank, candidate);
        if let Some(order) = decision.ordering() {
            self.save(server.id.clone(), order.to_vec());
        }
        decision
    }

    /// Whether any save is still running.
    pub fn is_saving(&self) -> bool {
        *self.in_flight.borrow() > 0
    }

    /// Wait until every save issued so far has finished.
    pub async fn settled(&self) {
        let mut rx = self.in_flight.subscribe();
        // The sender lives in `self`, so the channel cannot close here
        let _ = rx.wait_for(|n| *n == 0).await;
    }

    fn save(&self, server_id: ServerId, order: Vec<RoleId>) {
        let guard = InFlight::start(Arc::clone(&self.in_flight));
        let store = Arc::clone(&self.store);
        let errors = self.errors.clone();

        self.runtime.spawn(async move {
            let _guard = guard;
            match store.set_role_ordering(&server_id, &order).await {
                Ok(()) => {
                    info!(server_id = %server_id, roles = order.len(), "Role ordering saved");
                }
                Err(error) => {
                    warn!(server_id = %server_id, error = %error, "Failed to save role ordering");
                    if let Some(errors) = errors {
                        let _ = errors.send(SaveFailure {
                            server_id,
                            order,
                            error,
                        });
                    }
                }
            }
        });
    }
}

/// Counts a running save; released on drop so a panicking save still settles.
struct InFlight(Arc<watch::Sender<usize>>);

impl InFlight {
    fn start(counter: Arc<watch::Sender<usize>>) -> Self {
        counter.send_modify(|n| *n += 1);
        Self(counter)
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.send_modify(|n| *n = n.saturating_sub(1));
    }
}
