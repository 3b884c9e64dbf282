use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "workout-datasource",
    about = "Serve uploaded workouts (heart rate, speed, altitude) as a Grafana JSON datasource"
)]
pub struct Cli {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// HTTP server port.
    #[arg(short = 'p', long, default_value_t = 3000)]
    pub port: u16,

    /// Per-request timeout, in seconds.
    #[arg(long, default_value_t = 15)]
    pub timeout_secs: u64,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}
