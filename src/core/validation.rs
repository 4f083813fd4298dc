use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::SkippedRecord;
use crate::error::{ChartError, ChartResult};

/// How invalid records are handled. Applied identically by the loader and the
/// classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPolicy {
    /// The first invalid record fails the whole run.
    #[default]
    Abort,
    /// Invalid records are dropped and reported.
    SkipAndReport,
}

impl ValidationPolicy {
    /// Routes a per-record result through the policy.
    ///
    /// Returns `Ok(None)` when the record was skipped; non-validation errors
    /// always propagate.
    pub(crate) fn apply<T>(
        self,
        result: ChartResult<T>,
        skipped: &mut Vec<SkippedRecord>,
    ) -> ChartResult<Option<T>> {
        match (self, result) {
            (_, Ok(value)) => Ok(Some(value)),
            (Self::SkipAndReport, Err(ChartError::Validation { row, field, reason })) => {
                warn!(row, field, reason = %reason, "skipping invalid record");
                skipped.push(SkippedRecord {
                    row,
                    field: field.to_owned(),
                    reason,
                });
                Ok(None)
            }
            (_, Err(err)) => Err(err),
        }
    }
}
