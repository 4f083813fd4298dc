use serde::{Deserialize, Serialize};

use crate::core::{CategoryGroup, SeriesPoint};
use crate::error::{ChartError, ChartResult};

use super::PipelineOutput;

pub const PIPELINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSnapshot {
    pub group: CategoryGroup,
    /// `#rrggbb`.
    pub color: String,
    pub points: Vec<SeriesPoint>,
}

/// Serializable deterministic view of a pipeline run, used by regression
/// tests and the CLI `--snapshot` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSnapshot {
    pub record_count: u64,
    pub skipped_count: usize,
    pub year_domain: (i32, i32),
    pub count_domain: (u32, u32),
    pub groups: Vec<GroupSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: PipelineSnapshot,
}

impl PipelineOutput {
    #[must_use]
    pub fn snapshot(&self) -> PipelineSnapshot {
        let groups = self
            .series
            .iter()
            .map(|(group, points)| GroupSnapshot {
                group: *group,
                color: self
                    .domains
                    .color_for(*group)
                    .map(|color| color.to_hex())
                    .unwrap_or_default(),
                points: points.clone(),
            })
            .collect();

        PipelineSnapshot {
            record_count: self.record_count(),
            skipped_count: self.skipped.len(),
            year_domain: self.domains.year_domain,
            count_domain: self.domains.count_domain,
            groups,
        }
    }
}

impl PipelineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = PipelineSnapshotJsonContractV1 {
            schema_version: PIPELINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned v1 contract.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<PipelineSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: PipelineSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != PIPELINE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
