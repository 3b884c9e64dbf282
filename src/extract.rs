use crate::dlog;
use crate::filter::matches_time;
use crate::types::{Datapoint, Metric, MetricSeries, Workout};

/// Inclusive millisecond window a query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub from_ms: i64,
    pub to_ms: i64,
}

impl TimeWindow {
    pub const fn contains(self, timestamp: i64) -> bool {
        matches_time(timestamp, self.from_ms, self.to_ms)
    }
}

/// Project one metric of `workout` into a series, keeping only samples inside `window`.
///
/// Points keep the order of the source samples and carry their timestamps verbatim.
pub fn extract(metric: Metric, workout: &Workout, window: TimeWindow) -> MetricSeries {
    let datapoints = match metric {
        Metric::Heartrate => heartrate(workout, window),
        Metric::Speed => speed(workout, window),
        Metric::Altitude => altitude(workout, window),
    };

    dlog!(
        "extract metric={metric} workout={} points={}",
        workout.timestamp,
        datapoints.len()
    );

    MetricSeries {
        metric_name: metric.name().to_string(),
        datapoints,
    }
}

#[allow(clippy::cast_precision_loss)]
fn point(value: f64, timestamp: i64) -> Datapoint {
    Datapoint {
        value,
        timestamp: timestamp as f64,
    }
}

fn heartrate(workout: &Workout, window: TimeWindow) -> Vec<Datapoint> {
    workout
        .heartrate
        .iter()
        .filter(|s| window.contains(s.timestamp))
        .map(|s| point(f64::from(s.bpm), s.timestamp))
        .collect()
}

fn speed(workout: &Workout, window: TimeWindow) -> Vec<Datapoint> {
    workout
        .location
        .iter()
        .filter(|s| window.contains(s.timestamp))
        .map(|s| point(s.speed, s.timestamp))
        .collect()
}

fn altitude(workout: &Workout, window: TimeWindow) -> Vec<Datapoint> {
    workout
        .location
        .iter()
        .filter(|s| window.contains(s.timestamp))
        .map(|s| point(s.altitude, s.timestamp))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Heartrate, Location};

    const T: i64 = 1_551_776_700_000;

    fn sample_workout() -> Workout {
        Workout {
            timestamp: T,
            heartrate: vec![
                Heartrate { timestamp: T, bpm: 100 },
                Heartrate { timestamp: T + 1_000, bpm: 105 },
                Heartrate { timestamp: T + 2_000, bpm: 90 },
            ],
            location: vec![
                Location {
                    timestamp: T + 2_000,
                    lat: 52.5,
                    lon: 13.4,
                    speed: 3.5,
                    altitude: 40.0,
                },
                Location {
                    timestamp: T,
                    lat: 52.5,
                    lon: 13.4,
                    speed: 2.0,
                    altitude: 35.5,
                },
            ],
        }
    }

    fn values(series: &MetricSeries) -> Vec<(f64, f64)> {
        series
            .datapoints
            .iter()
            .map(|d| (d.value, d.timestamp))
            .collect()
    }

    #[test]
    fn heartrate_in_window() {
        let window = TimeWindow {
            from_ms: T,
            to_ms: T + 1_000,
        };
        let series = extract(Metric::Heartrate, &sample_workout(), window);
        assert_eq!(series.metric_name, "heartrate");
        assert_eq!(
            values(&series),
            vec![(100.0, T as f64), (105.0, (T + 1_000) as f64)]
        );
    }

    #[test]
    fn location_metrics_keep_sample_order() {
        let window = TimeWindow {
            from_ms: T,
            to_ms: T + 2_000,
        };
        let speed = extract(Metric::Speed, &sample_workout(), window);
        assert_eq!(
            values(&speed),
            vec![(3.5, (T + 2_000) as f64), (2.0, T as f64)]
        );

        let altitude = extract(Metric::Altitude, &sample_workout(), window);
        assert_eq!(altitude.metric_name, "altitude");
        assert_eq!(
            values(&altitude),
            vec![(40.0, (T + 2_000) as f64), (35.5, T as f64)]
        );
    }

    #[test]
    fn every_point_is_inside_window() {
        let workout = sample_workout();
        for (from_ms, to_ms) in [(T, T), (T + 1, T + 1_999), (T - 5, T + 5_000), (0, 0)] {
            let window = TimeWindow { from_ms, to_ms };
            for metric in Metric::ALL {
                for dp in extract(metric, &workout, window).datapoints {
                    assert!(dp.timestamp >= from_ms as f64 && dp.timestamp <= to_ms as f64);
                }
            }
        }
    }

    #[test]
    fn no_samples_gives_empty_series() {
        let workout = Workout {
            timestamp: T,
            heartrate: Vec::new(),
            location: Vec::new(),
        };
        let window = TimeWindow {
            from_ms: 0,
            to_ms: i64::MAX,
        };
        let series = extract(Metric::Speed, &workout, window);
        assert_eq!(series.metric_name, "speed");
        assert!(series.datapoints.is_empty());
    }
}
