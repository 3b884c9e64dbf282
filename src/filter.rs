use crate::types::{TagFilter, Workout};
use crate::utils::human_label;

/// Inclusive on both ends.
pub const fn matches_time(timestamp: i64, from_ms: i64, to_ms: i64) -> bool {
    timestamp >= from_ms && timestamp <= to_ms
}

/// Does the workout's human label equal `filter.value`?
///
/// `key` and `operator` are not consulted: the only tag key we advertise is
/// "Workout", and Grafana fills `value` from `/tag-values`, which renders the
/// same label.
pub fn matches_human(workout: &Workout, filter: &TagFilter) -> bool {
    human_label(workout.timestamp).is_some_and(|label| label == filter.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workout(timestamp: i64) -> Workout {
        Workout {
            timestamp,
            heartrate: Vec::new(),
            location: Vec::new(),
        }
    }

    fn filter(value: &str) -> TagFilter {
        TagFilter {
            key: "Workout".to_string(),
            operator: "=".to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn time_window_is_inclusive() {
        assert!(matches_time(10, 10, 20));
        assert!(matches_time(20, 10, 20));
        assert!(matches_time(15, 10, 20));
        assert!(!matches_time(9, 10, 20));
        assert!(!matches_time(21, 10, 20));
    }

    #[test]
    fn empty_window_when_inverted() {
        assert!(!matches_time(15, 20, 10));
    }

    #[test]
    fn human_filter_compares_label() {
        let w = workout(1_551_776_700_000);
        assert!(matches_human(&w, &filter("2019/March/5 (10:05)")));
        assert!(!matches_human(&w, &filter("2019/March/5 (9:05)")));
        assert!(!matches_human(&w, &filter("")));
    }

    #[test]
    fn human_filter_ignores_key_and_operator() {
        let w = workout(1_551_776_700_000);
        let f = TagFilter {
            key: "anything".to_string(),
            operator: "!=".to_string(),
            value: "2019/March/5 (10:05)".to_string(),
        };
        assert!(matches_human(&w, &f));
    }
}
