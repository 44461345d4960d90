use serde::{Deserialize, Serialize};

use crate::error::{NavError, NavResult};

use super::{ChartNavigator, NavigatorSnapshot};

pub const NAVIGATOR_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigatorSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: NavigatorSnapshot,
}

impl NavigatorSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> NavResult<String> {
        let payload = NavigatorSnapshotJsonContractV1 {
            schema_version: NAVIGATOR_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            NavError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> NavResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<NavigatorSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: NavigatorSnapshotJsonContractV1 = serde_json::from_str(input)
            .map_err(|e| {
                NavError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
            })?;
        if payload.schema_version != NAVIGATOR_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(NavError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl ChartNavigator {
    pub fn snapshot_json_contract_v1_pretty(&self) -> NavResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
