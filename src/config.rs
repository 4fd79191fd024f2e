use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Timezone all hour-of-day / weekday / session-bucket math is done in.
    /// The journal records UTC epoch timestamps; this decides how they are
    /// read back. Defaults to UTC, never the machine's local time.
    pub timezone: Tz,

    // Session buckets (hour boundaries in `timezone`)
    pub morning_end_hour: u32,
    pub evening_start_hour: u32,

    // Insight thresholds
    pub min_trades_for_insights: usize,
    pub min_time_bucket: usize,
    pub min_tag_bucket: usize,
    pub streak_window: usize,
    pub hot_streak_win_rate: f64,
    pub cold_streak_win_rate: f64,
    pub overtrading_daily_trades: usize,
    pub overtrading_min_days: usize,
    pub revenge_window_minutes: i64,
    pub revenge_min_trades: usize,

    // Discipline enforcement
    pub violation_window_days: i64,
    pub warning_threshold: usize,
    pub lockout_threshold: usize,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        Config {
            timezone: env("JOURNAL_TZ", "UTC").parse().unwrap_or(chrono_tz::UTC),
            morning_end_hour: env("MORNING_END_HOUR", "12").parse().unwrap_or(12),
            evening_start_hour: env("EVENING_START_HOUR", "17").parse().unwrap_or(17),
            min_trades_for_insights: 10,
            min_time_bucket: 3,
            min_tag_bucket: 5,
            streak_window: 20,
            hot_streak_win_rate: 0.7,
            cold_streak_win_rate: 0.3,
            overtrading_daily_trades: 5,
            overtrading_min_days: 3,
            revenge_window_minutes: 60,
            revenge_min_trades: 5,
            violation_window_days: 14,
            warning_threshold: 3,
            lockout_threshold: 5,
            log_level: env("LOG_LEVEL", "INFO"),
        }
    }
}
