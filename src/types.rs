use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heartrate {
    pub timestamp: i64,
    pub bpm: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub timestamp: i64,
    pub lat: f64,
    pub lon: f64,
    pub speed: f64,
    pub altitude: f64,
}

/// One recorded session. `timestamp` (ms since epoch) is its identity in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub timestamp: i64,
    #[serde(default)]
    pub heartrate: Vec<Heartrate>,
    #[serde(default)]
    pub location: Vec<Location>,
}

/// Grafana ad-hoc filter. Only `value` is compared, against the workout's human label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagFilter {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub operator: String,
    #[serde(default)]
    pub value: String,
}

/// A single point; serialized as `[value, timestamp]` the way Grafana reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datapoint {
    pub value: f64,
    pub timestamp: f64,
}

impl Serialize for Datapoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.value, self.timestamp).serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSeries {
    #[serde(rename = "target")]
    pub metric_name: String,
    pub datapoints: Vec<Datapoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Heartrate,
    Speed,
    Altitude,
}

impl Metric {
    pub const ALL: [Self; 3] = [Self::Heartrate, Self::Speed, Self::Altitude];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Heartrate => "heartrate",
            Self::Speed => "speed",
            Self::Altitude => "altitude",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
