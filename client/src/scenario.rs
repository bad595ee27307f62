//! Reorder scenarios: a server snapshot, the acting member and a dragged
//! ordering, as read by the `roleorder` binary.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use roleorder_common::{Member, RoleId, Server};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub server: Server,
    pub member: Member,
    /// Role ids in the order the drag left them.
    ///
    /// Entries that are not valid ids are dropped, like unknown ids.
    #[serde(deserialize_with = "lenient_role_ids")]
    pub candidate: Vec<RoleId>,
}

fn lenient_role_ids<'de, D>(deserializer: D) -> std::result::Result<Vec<RoleId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Value>::deserialize(deserializer)?;
    Ok(raw
        .iter()
        .filter_map(Value::as_str)
        .filter_map(|id| RoleId::new(id).ok())
        .collect())
}

impl Scenario {
    /// Read a scenario from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Invalid scenario {}", path.display()))
    }
}
