use tracing::{debug, trace};

use crate::core::{
    AggregateTable, ClassifiedRecord, DomainSet, RawRecord, SeriesSet, SkippedRecord,
    ValidationPolicy, aggregate, build_series, classify_at, resolve_scales,
};
use crate::error::{ChartError, ChartResult};

use super::StaticLabels;

/// Everything derived from one dataset load.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub aggregate: AggregateTable,
    pub domains: DomainSet,
    pub series: SeriesSet,
    pub skipped: Vec<SkippedRecord>,
}

/// Immutable input handed to the frame builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRequest<'a> {
    pub domains: &'a DomainSet,
    pub series: &'a SeriesSet,
    pub labels: &'a StaticLabels,
}

impl PipelineOutput {
    #[must_use]
    pub fn draw_request<'a>(&'a self, labels: &'a StaticLabels) -> DrawRequest<'a> {
        DrawRequest {
            domains: &self.domains,
            series: &self.series,
            labels,
        }
    }

    /// Number of records that made it into the aggregate table.
    #[must_use]
    pub fn record_count(&self) -> u64 {
        self.aggregate.total_count()
    }
}

/// Classifies every record, applying `policy` to invalid ones.
///
/// Records are numbered from 1 in errors and skip reports.
pub fn classify_all(
    records: &[RawRecord],
    policy: ValidationPolicy,
    skipped: &mut Vec<SkippedRecord>,
) -> ChartResult<Vec<ClassifiedRecord>> {
    let mut classified = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if let Some(record) = policy.apply(classify_at(index + 1, record), skipped)? {
            trace!(year = record.year(), group = %record.category_group, "classified record");
            classified.push(record);
        }
    }
    Ok(classified)
}

/// Runs classification, aggregation, scale resolution and series building
/// over one immutable snapshot of records.
pub fn run_pipeline(records: &[RawRecord], policy: ValidationPolicy) -> ChartResult<PipelineOutput> {
    let mut skipped = Vec::new();
    let classified = classify_all(records, policy, &mut skipped)?;
    if classified.is_empty() {
        debug!(input = records.len(), skipped = skipped.len(), "no records to chart");
        return Err(ChartError::EmptyDataset);
    }

    let aggregate = aggregate(&classified);
    debug!(
        input = records.len(),
        classified = classified.len(),
        skipped = skipped.len(),
        groups = aggregate.group_count(),
        "aggregated records"
    );

    let domains = resolve_scales(&aggregate)?;
    debug!(
        year_min = domains.year_domain.0,
        year_max = domains.year_domain.1,
        count_max = domains.count_domain.1,
        "resolved domains"
    );

    let series = build_series(&aggregate);
    Ok(PipelineOutput {
        aggregate,
        domains,
        series,
        skipped,
    })
}
