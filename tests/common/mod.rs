use chrono::{TimeZone, Utc};
use journal_insight::config::Config;
use journal_insight::models::{Direction, Mood, Session, Setup, Trade};

/// 2024-03-04T08:00:00Z, a Monday.
pub const BASE_TS: i64 = 1_709_539_200_000;
pub const HOUR_MS: i64 = 3_600_000;
pub const DAY_MS: i64 = 86_400_000;

pub fn make_trade(id: &str, ts: i64, pair: &str, setup: Setup, mood: Mood, pnl: f64) -> Trade {
    let date = Utc.timestamp_millis_opt(ts).unwrap().date_naive();
    Trade {
        id: id.to_string(),
        pair: pair.to_string(),
        direction: if pnl >= 0.0 {
            Direction::Long
        } else {
            Direction::Short
        },
        entry: 1.0850,
        exit: 1.0900,
        lots: 0.5,
        pnl,
        date,
        ts,
        setup,
        mood,
        session: Session::London,
        violation_reason: None,
        setup_quality: None,
    }
}

pub fn flag_violation(mut trade: Trade, reason: &str) -> Trade {
    trade.violation_reason = Some(reason.to_string());
    trade
}

/// A month-ish of scripted history: breakout mornings that work, scalp
/// afternoons that bleed, a couple of rule violations near the end.
pub fn make_journal() -> Vec<Trade> {
    let mut trades = Vec::new();
    let mut id = 0;
    let mut push = |trades: &mut Vec<Trade>, ts, pair, setup, mood, pnl| {
        id += 1;
        trades.push(make_trade(&format!("t{}", id), ts, pair, setup, mood, pnl));
    };

    for day in 0..6i64 {
        let day_start = BASE_TS + day * DAY_MS;
        // Two morning breakouts, usually green.
        push(&mut trades, day_start, "EURUSD", Setup::Breakout, Mood::Calm, 40.0);
        push(
            &mut trades,
            day_start + HOUR_MS,
            "EURUSD",
            Setup::Breakout,
            Mood::Calm,
            if day == 2 { -15.0 } else { 25.0 },
        );
        // One afternoon scalp, usually red.
        push(
            &mut trades,
            day_start + 7 * HOUR_MS,
            "GBPJPY",
            Setup::Scalp,
            Mood::Anxious,
            if day == 4 { 10.0 } else { -30.0 },
        );
    }

    // Late-session violations on the last two days.
    let last = BASE_TS + 5 * DAY_MS;
    trades.push(flag_violation(
        make_trade("v1", last + 9 * HOUR_MS, "XAUUSD", Setup::News, Mood::Greedy, -80.0),
        "oversized position",
    ));
    trades.push(flag_violation(
        make_trade("v2", last + 10 * HOUR_MS, "XAUUSD", Setup::News, Mood::Greedy, -60.0),
        "no stop loss",
    ));
    trades.push(flag_violation(
        make_trade("v3", last - DAY_MS + 9 * HOUR_MS, "XAUUSD", Setup::News, Mood::Greedy, -50.0),
        "traded the lockout list",
    ));

    trades
}

pub fn test_config() -> Config {
    let mut cfg = Config::from_env();
    cfg.timezone = chrono_tz::UTC;
    cfg.log_level = "ERROR".to_string();
    cfg
}
