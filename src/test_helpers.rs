use chrono::{NaiveDate, TimeZone, Utc};

use crate::config::Config;
use crate::models::{Direction, Mood, Session, Setup, Trade};

/// 2024-03-05T10:00:00Z, a Tuesday.
pub const BASE_TS: i64 = 1_709_632_800_000;

/// A plain long EURUSD trade; the date is derived from `ts` in UTC.
pub fn trade(id: &str, ts: i64, pnl: f64) -> Trade {
    let date = Utc
        .timestamp_millis_opt(ts)
        .single()
        .map(|dt| dt.date_naive())
        .unwrap_or_default();

    Trade {
        id: id.to_string(),
        pair: "EURUSD".to_string(),
        direction: Direction::Long,
        entry: 1.0850,
        exit: 1.0900,
        lots: 0.5,
        pnl,
        date,
        ts,
        setup: Setup::Other,
        mood: Mood::Unknown,
        session: Session::Unknown,
        violation_reason: None,
        setup_quality: None,
    }
}

pub fn trade_on_date(id: &str, date: &str, pnl: f64) -> Trade {
    let date: NaiveDate = date.parse().unwrap();
    let ts = date
        .and_hms_opt(12, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp_millis();
    let mut t = trade(id, ts, pnl);
    t.date = date;
    t
}

pub fn trade_with_setup(id: &str, setup: Setup, pnl: f64) -> Trade {
    let mut t = trade(id, BASE_TS, pnl);
    t.setup = setup;
    t
}

pub fn trade_with_mood(id: &str, mood: Mood, pnl: f64) -> Trade {
    let mut t = trade(id, BASE_TS, pnl);
    t.mood = mood;
    t
}

pub fn trade_with_pair(id: &str, pair: &str, pnl: f64) -> Trade {
    let mut t = trade(id, BASE_TS, pnl);
    t.pair = pair.to_string();
    t
}

pub fn violation_trade(id: &str, ts: i64) -> Trade {
    let mut t = trade(id, ts, -40.0);
    t.violation_reason = Some("broke risk rules".to_string());
    t
}

/// One trade per pnl, spaced a minute apart so entry order matches index
/// order.
pub fn trades_from_pnls(pnls: &[f64]) -> Vec<Trade> {
    pnls.iter()
        .enumerate()
        .map(|(i, &pnl)| trade(&format!("t{}", i), BASE_TS + i as i64 * 60_000, pnl))
        .collect()
}

/// Fixed thresholds so tests never depend on the environment.
pub fn default_test_config() -> Config {
    Config {
        timezone: chrono_tz::UTC,
        morning_end_hour: 12,
        evening_start_hour: 17,
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
        log_level: "ERROR".to_string(),
    }
}
