use crate::dlog;
use crate::error::QueryError;
use crate::extract::{TimeWindow, extract};
use crate::store::WorkoutStore;
use crate::types::{Metric, MetricSeries, TagFilter};
use crate::utils::parse_range_millis;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryRange {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
}

impl QueryRange {
    /// Both boundaries in milliseconds. Unparsable strings are rejected.
    pub fn window(&self) -> Result<TimeWindow, QueryError> {
        Ok(TimeWindow {
            from_ms: parse_boundary("from", &self.from)?,
            to_ms: parse_boundary("to", &self.to)?,
        })
    }
}

fn parse_boundary(field: &'static str, value: &str) -> Result<i64, QueryError> {
    parse_range_millis(value).ok_or_else(|| QueryError::MalformedTime {
        field,
        value: value.to_string(),
    })
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryTarget {
    pub target: String,
    #[serde(default)]
    pub ref_id: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// Body of a Grafana `/query` call.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    #[serde(default)]
    pub range: QueryRange,
    #[serde(default)]
    pub targets: Vec<QueryTarget>,
    #[serde(default)]
    pub adhoc_filters: Vec<TagFilter>,
}

/// Answer `request` against the current contents of `store`.
///
/// An empty store, or no workout matching the ad-hoc filters, yields an empty
/// list. Any unknown target fails the whole request; no partial result is
/// returned.
pub fn translate(
    store: &WorkoutStore,
    request: &QueryRequest,
) -> Result<Vec<MetricSeries>, QueryError> {
    if store.is_empty() {
        dlog!("query against empty store");
        return Ok(Vec::new());
    }

    let Some(workout) = store.resolve(&request.adhoc_filters) else {
        dlog!(
            "no workout matches filters filters={}",
            request.adhoc_filters.len()
        );
        return Ok(Vec::new());
    };

    let metrics = request
        .targets
        .iter()
        .map(|t| {
            Metric::from_name(&t.target)
                .ok_or_else(|| QueryError::UnknownTarget(t.target.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if metrics.is_empty() {
        return Ok(Vec::new());
    }

    let window = request.range.window()?;

    Ok(metrics
        .into_iter()
        .map(|metric| extract(metric, &workout, window))
        .collect())
}
