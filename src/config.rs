use chrono::Duration;
use clap::Parser;

const MAX_CHANNEL_BUFFER: u64 = 65_536;
const MAX_EXPIRY_WINDOW_DAYS: i64 = 3_650;

/// Runtime settings, from flags or the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "launch-board", about = "In-memory product launch board", version)]
pub struct Settings {
    /// Tracing filter used when RUST_LOG is not set.
    #[arg(long, env = "LAUNCH_BOARD_LOG", default_value = "info")]
    pub log_filter: String,

    /// Capacity of each service's request channel.
    #[arg(
        long,
        env = "LAUNCH_BOARD_CHANNEL_BUFFER",
        default_value_t = 100,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=MAX_CHANNEL_BUFFER)
    )]
    pub channel_buffer: usize,

    /// Location fragment the board opens on.
    #[arg(long, env = "LAUNCH_BOARD_START", default_value = "#/")]
    pub start_location: String,

    /// Subscriptions ending within this many days show as expiring soon.
    #[arg(
        long,
        env = "LAUNCH_BOARD_EXPIRY_WINDOW_DAYS",
        default_value_t = 7,
        value_parser = clap::value_parser!(i64).range(0..=MAX_EXPIRY_WINDOW_DAYS)
    )]
    pub expiry_window_days: i64,
}

impl Settings {
    pub fn expiry_window(&self) -> Duration {
        Duration::days(self.expiry_window_days)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            channel_buffer: 100,
            start_location: "#/".to_string(),
            expiry_window_days: 7,
        }
    }
}
