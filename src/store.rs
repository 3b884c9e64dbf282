use crate::error::IngestError;
use crate::filter::matches_human;
use crate::types::{TagFilter, Workout};
use crate::utils::human_label;
use parking_lot::RwLock;
use std::sync::Arc;

/// Append-only, in-memory collection of every uploaded workout.
///
/// Created once at startup and shared with the HTTP handlers. Workouts are
/// never mutated or removed after insertion, so readers get `Arc` handles and
/// release the lock before doing any per-sample work.
#[derive(Debug, Default)]
pub struct WorkoutStore {
    workouts: RwLock<Vec<Arc<Workout>>>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append without checking for duplicates. Prefer [`Self::ingest`].
    pub fn add(&self, workout: Workout) {
        self.workouts.write().push(Arc::new(workout));
    }

    /// Append `workout` unless one with the same timestamp is already stored,
    /// returning its human label.
    ///
    /// A workout whose timestamp has no label could never be listed or
    /// selected, so it is refused. The duplicate check and the push happen
    /// under the same write guard.
    pub fn ingest(&self, workout: Workout) -> Result<String, IngestError> {
        let label = human_label(workout.timestamp)
            .ok_or(IngestError::UnrenderableTimestamp(workout.timestamp))?;

        let mut workouts = self.workouts.write();
        if workouts.iter().any(|w| w.timestamp == workout.timestamp) {
            return Err(IngestError::Conflict(workout.timestamp));
        }
        workouts.push(Arc::new(workout));
        Ok(label)
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.read().is_empty()
    }

    pub fn len(&self) -> usize {
        self.workouts.read().len()
    }

    /// First workout, in insertion order, that passes every filter.
    ///
    /// An empty filter list constrains nothing, so the first stored workout wins.
    pub fn resolve(&self, filters: &[TagFilter]) -> Option<Arc<Workout>> {
        self.workouts
            .read()
            .iter()
            .find(|w| filters.iter().all(|f| matches_human(w, f)))
            .cloned()
    }

    /// Human labels of all stored workouts, in insertion order.
    pub fn tag_values(&self) -> Vec<String> {
        self.workouts
            .read()
            .iter()
            .filter_map(|w| {
                let label = human_label(w.timestamp);
                if label.is_none() {
                    tracing::warn!(timestamp = w.timestamp, "stored workout has no label");
                }
                label
            })
            .collect()
    }
}
