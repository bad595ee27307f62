//! Role reordering rules.
//!
//! The canonical role list splits into a locked prefix (roles at or above
//! the actor's rank) and a movable suffix (everything from the first role
//! strictly junior to the actor). A drag may rearrange the suffix only; the
//! prefix always comes back first and in its original order.

use std::collections::HashSet;

use roleorder_common::{Rank, Role, RoleId};
use serde::Serialize;
use tracing::{debug, warn};

/// Split of the canonical order around the actor's rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// Roles the actor may not move or move past.
    pub locked: Vec<RoleId>,
    /// Roles the actor may rearrange.
    pub movable: Vec<RoleId>,
}

/// Outcome of a drag gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "order")]
pub enum Decision {
    /// The gesture is applied as given.
    Accept(Vec<RoleId>),
    /// Locked roles went missing from the gesture and were put back on top.
    /// The movable part of the gesture is kept.
    Corrected(Vec<RoleId>),
    /// The actor cannot move any role.
    NoOp,
    /// The gesture reordered locked roles among themselves.
    Rejected,
}

impl Decision {
    /// Ordering to persist, if any.
    #[must_use]
    pub fn ordering(&self) -> Option<&[RoleId]> {
        match self {
            Self::Accept(order) | Self::Corrected(order) => Some(order.as_slice()),
            Self::NoOp | Self::Rejected => None,
        }
    }
}

/// Split `canonical` at the first role strictly junior to `actor_rank`.
///
/// Returns `None` when no such role exists, including for an empty list.
pub fn partition(canonical: &[Role], actor_rank: Rank) -> Option<Partition> {
    let first_movable = canonical
        .iter()
        .position(|role| actor_rank.outranks(role.hierarchy_rank()))?;

    let (locked, movable) = canonical.split_at(first_movable);
    Some(Partition {
        locked: locked.iter().map(|r| r.id.clone()).collect(),
        movable: movable.iter().map(|r| r.id.clone()).collect(),
    })
}

/// Decide what to do with a candidate ordering produced by a drag.
///
/// Never fails: ids not in `canonical` are dropped and repeated ids only
/// count at their first occurrence.
pub fn propose_reorder(canonical: &[Role], actor_rank: Rank, candidate: &[RoleId]) -> Decision {
    let Some(Partition { locked, movable }) = partition(canonical, actor_rank) else {
        debug!(%actor_rank, roles = canonical.len(), "No movable roles, ignoring reorder");
        return Decision::NoOp;
    };

    let locked_ids: HashSet<&RoleId> = locked.iter().collect();
    let movable_ids: HashSet<&RoleId> = movable.iter().collect();

    let mut seen = HashSet::with_capacity(candidate.len());
    let mut new_locked = Vec::with_capacity(locked.len());
    let mut new_movable = Vec::with_capacity(movable.len());
    for id in candidate {
        if !seen.insert(id) {
            continue;
        }
        if locked_ids.contains(id) {
            new_locked.push(id.clone());
        } else if movable_ids.contains(id) {
            new_movable.push(id.clone());
        }
    }

    debug!(
        %actor_rank,
        locked = locked.len(),
        movable = movable.len(),
        recovered_locked = new_locked.len(),
        recovered_movable = new_movable.len(),
        "Partitioned reorder candidate"
    );

    if new_locked.len() < locked.len() {
        warn!(
            %actor_rank,
            missing = locked.len() - new_locked.len(),
            "Locked roles displaced by reorder, restoring them to the top"
        );
        let mut order = locked;
        order.extend(new_movable);
        return Decision::Corrected(order);
    }

    if new_locked == locked {
        let mut order = new_locked;
        order.extend(new_movable);
        Decision::Accept(order)
    } else {
        warn!(%actor_rank, "Reorder rearranged locked roles, rejecting");
        Decision::Rejected
    }
}
