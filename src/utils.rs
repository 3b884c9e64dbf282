use chrono::{DateTime, NaiveDateTime};
use chrono_tz::Europe::Berlin;
use tracing_subscriber::{EnvFilter, fmt};

#[macro_export]
macro_rules! dlog {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*);
    };
}

/// Layout Grafana uses for `range.from` / `range.to`.
pub const RANGE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

const HUMAN_LABEL_FORMAT: &str = "%Y/%B/%-d (%-H:%M)";

/// Initialize colorful logging.
///
/// Default level is INFO.
/// - `-v` => DEBUG
/// - `-vv` => TRACE
/// - `-q` => WARN
/// - `-qq` => ERROR
///
/// `RUST_LOG` overrides everything (e.g. `RUST_LOG=trace`).
pub fn init_logging(verbose: u8, quiet: u8) {
    let net = i16::from(verbose) - i16::from(quiet);
    let level = match net {
        i16::MIN..=-2 => "error",
        -1 => "warn",
        0 => "info",
        1 => "debug",
        2..=i16::MAX => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,workout_datasource={level},tower_http={level}"
        ))
    });

    let show_src = matches!(level, "debug" | "trace");

    fmt()
        .with_env_filter(filter)
        .with_ansi(true)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_file(show_src)
        .with_line_number(show_src)
        .compact()
        .init();
}

/// Render a millisecond timestamp as the label shown in Grafana's filter picker.
///
/// Always rendered in Europe/Berlin so the label doesn't depend on the host's
/// locale. Returns `None` for timestamps chrono can't represent.
pub fn human_label(timestamp_ms: i64) -> Option<String> {
    let utc = DateTime::from_timestamp_millis(timestamp_ms)?;
    Some(utc.with_timezone(&Berlin).format(HUMAN_LABEL_FORMAT).to_string())
}

/// Parse a Grafana range boundary into milliseconds since epoch.
pub fn parse_range_millis(s: &str) -> Option<i64> {
    NaiveDateTime::parse_from_str(s, RANGE_TIME_FORMAT)
        .ok()
        .map(|t| t.and_utc().timestamp_millis())
}
