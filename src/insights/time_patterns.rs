use chrono::NaiveDate;
use serde_json::json;
use std::collections::HashMap;

use crate::analytics::{compute_aggregates, Bucket};
use crate::config::Config;
use crate::insights::types::{scaled_confidence, Insight, Severity};
use crate::models::Trade;

const WORST_HOUR_AVG: f64 = -10.0;
const OVERTRADING_CONFIDENCE: u8 = 75;
const REVENGE_CONFIDENCE: u8 = 80;

pub fn best_hour(trades: &[Trade], cfg: &Config) -> Vec<Insight> {
    let buckets = compute_aggregates(trades, |t| t.hour_in(cfg.timezone));
    let best = buckets
        .iter()
        .filter(|(_, b)| b.count >= cfg.min_time_bucket)
        .max_by(|a, b| a.1.avg_pnl().partial_cmp(&b.1.avg_pnl()).unwrap());

    match best {
        Some((&hour, bucket)) if bucket.avg_pnl() > 0.0 => vec![Insight {
            id: format!("best-hour-{:02}", hour),
            severity: Severity::Success,
            title: format!("Strong performance around {:02}:00", hour),
            description: format!(
                "Trades opened in the {:02}:00 hour ({}) average {:+.2} over {} trades.",
                hour,
                cfg.timezone,
                bucket.avg_pnl(),
                bucket.count
            ),
            recommendation: Some(format!(
                "Concentrate your screen time around {:02}:00 where your edge shows.",
                hour
            )),
            confidence: scaled_confidence(bucket.count, trades.len()),
            data: Some(json!({
                "hour": hour,
                "trades": bucket.count,
                "avg_pnl": bucket.avg_pnl(),
            })),
        }],
        _ => vec![],
    }
}

pub fn worst_hour(trades: &[Trade], cfg: &Config) -> Vec<Insight> {
    let buckets = compute_aggregates(trades, |t| t.hour_in(cfg.timezone));
    let worst = buckets
        .iter()
        .filter(|(_, b)| b.count >= cfg.min_time_bucket)
        .min_by(|a, b| a.1.avg_pnl().partial_cmp(&b.1.avg_pnl()).unwrap());

    match worst {
        Some((&hour, bucket)) if bucket.avg_pnl() < WORST_HOUR_AVG => vec![Insight {
            id: format!("worst-hour-{:02}", hour),
            severity: Severity::Warning,
            title: format!("Losing money around {:02}:00", hour),
            description: format!(
                "Trades opened in the {:02}:00 hour ({}) average {:+.2} over {} trades.",
                hour,
                cfg.timezone,
                bucket.avg_pnl(),
                bucket.count
            ),
            recommendation: Some(format!(
                "Consider sitting out the {:02}:00 hour or cutting size there.",
                hour
            )),
            confidence: scaled_confidence(bucket.count, trades.len()),
            data: Some(json!({
                "hour": hour,
                "trades": bucket.count,
                "avg_pnl": bucket.avg_pnl(),
            })),
        }],
        _ => vec![],
    }
}

pub fn best_weekday(trades: &[Trade], cfg: &Config) -> Vec<Insight> {
    let buckets = compute_aggregates(trades, |t| t.weekday_in(cfg.timezone));
    let best = buckets
        .iter()
        .filter(|(_, b)| b.count >= cfg.min_time_bucket)
        .max_by(|a, b| a.1.avg_pnl().partial_cmp(&b.1.avg_pnl()).unwrap());

    match best {
        Some((&day, bucket)) if bucket.avg_pnl() > 0.0 => vec![Insight {
            id: format!("best-weekday-{}", day),
            severity: Severity::Success,
            title: format!("{} is your best day", day),
            description: format!(
                "{} trades on {} average {:+.2}.",
                bucket.count,
                day,
                bucket.avg_pnl()
            ),
            recommendation: None,
            confidence: scaled_confidence(bucket.count, trades.len()),
            data: Some(json!({
                "weekday": day.to_string(),
                "trades": bucket.count,
                "avg_pnl": bucket.avg_pnl(),
            })),
        }],
        _ => vec![],
    }
}

/// Days with an unusually high trade count that also lose money on net.
pub fn overtrading(trades: &[Trade], cfg: &Config) -> Vec<Insight> {
    let daily: HashMap<NaiveDate, Bucket> = compute_aggregates(trades, |t| t.date);

    let heavy: Vec<&Bucket> = daily
        .values()
        .filter(|b| b.count >= cfg.overtrading_daily_trades)
        .collect();

    if heavy.len() < cfg.overtrading_min_days {
        return vec![];
    }

    let avg_daily_pnl = heavy.iter().map(|b| b.total_pnl).sum::<f64>() / heavy.len() as f64;
    if avg_daily_pnl >= 0.0 {
        return vec![];
    }

    let avg_count = heavy.iter().map(|b| b.count).sum::<usize>() as f64 / heavy.len() as f64;
    vec![Insight {
        id: "overtrading".to_string(),
        severity: Severity::Warning,
        title: "High-volume days are losing days".to_string(),
        description: format!(
            "{} days with {}+ trades average {:+.2} per day ({:.1} trades/day).",
            heavy.len(),
            cfg.overtrading_daily_trades,
            avg_daily_pnl,
            avg_count
        ),
        recommendation: Some(
            "Set a daily trade cap. Your results degrade when the count climbs.".to_string(),
        ),
        confidence: OVERTRADING_CONFIDENCE,
        data: Some(json!({
            "heavy_days": heavy.len(),
            "daily_trade_threshold": cfg.overtrading_daily_trades,
            "avg_daily_pnl": avg_daily_pnl,
        })),
    }]
}

/// Trades opened shortly after a same-day loss. Flagged only when the
/// follow-ups themselves lose money.
pub fn revenge_trading(trades: &[Trade], cfg: &Config) -> Vec<Insight> {
    let mut ordered: Vec<&Trade> = trades.iter().collect();
    ordered.sort_by_key(|t| t.ts);

    let window_ms = cfg.revenge_window_minutes * 60 * 1000;
    let revenge: Vec<&Trade> = ordered
        .windows(2)
        .filter(|w| {
            let (prev, next) = (w[0], w[1]);
            !prev.is_win() && next.date == prev.date && next.ts - prev.ts <= window_ms
        })
        .map(|w| w[1])
        .collect();

    if revenge.len() < cfg.revenge_min_trades {
        return vec![];
    }

    let avg_pnl = revenge.iter().map(|t| t.pnl).sum::<f64>() / revenge.len() as f64;
    if avg_pnl >= 0.0 {
        return vec![];
    }

    vec![Insight {
        id: "revenge-trading".to_string(),
        severity: Severity::Danger,
        title: "Revenge trading detected".to_string(),
        description: format!(
            "{} trades opened within {} minutes of a same-day loss average {:+.2}.",
            revenge.len(),
            cfg.revenge_window_minutes,
            avg_pnl
        ),
        recommendation: Some(
            "Step away after a loss. A cooldown rule would have saved money here.".to_string(),
        ),
        confidence: REVENGE_CONFIDENCE,
        data: Some(json!({
            "revenge_trades": revenge.len(),
            "window_minutes": cfg.revenge_window_minutes,
            "avg_pnl": avg_pnl,
        })),
    }]
}
