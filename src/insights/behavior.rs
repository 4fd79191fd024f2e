use serde_json::json;

use crate::analytics::compute_aggregates;
use crate::config::Config;
use crate::insights::types::{scaled_confidence, Insight, Severity};
use crate::models::{Mood, Trade};

const WORST_MOOD_AVG: f64 = -10.0;
const STREAK_CONFIDENCE: u8 = 85;

/// Best and worst emotional state. Trades without a mood tag are skipped;
/// there is nothing actionable in an unknown mood.
pub fn mood_patterns(trades: &[Trade], cfg: &Config) -> Vec<Insight> {
    let buckets = compute_aggregates(trades, |t| t.mood);
    let tagged: Vec<_> = buckets
        .iter()
        .filter(|(&mood, b)| mood != Mood::Unknown && b.count >= cfg.min_tag_bucket)
        .collect();

    let mut out = Vec::new();

    if let Some(&(&mood, bucket)) = tagged
        .iter()
        .max_by(|a, b| a.1.avg_pnl().partial_cmp(&b.1.avg_pnl()).unwrap())
    {
        if bucket.avg_pnl() > 0.0 {
            out.push(Insight {
                id: format!("best-mood-{}", mood),
                severity: Severity::Success,
                title: format!("You trade best when {}", mood),
                description: format!(
                    "{} trades tagged '{}' average {:+.2}.",
                    bucket.count,
                    mood,
                    bucket.avg_pnl()
                ),
                recommendation: Some(format!(
                    "Check in before entering. If you are not feeling {}, size down.",
                    mood
                )),
                confidence: scaled_confidence(bucket.count, trades.len()),
                data: Some(json!({
                    "mood": mood.as_str(),
                    "trades": bucket.count,
                    "avg_pnl": bucket.avg_pnl(),
                })),
            });
        }
    }

    if let Some(&(&mood, bucket)) = tagged
        .iter()
        .min_by(|a, b| a.1.avg_pnl().partial_cmp(&b.1.avg_pnl()).unwrap())
    {
        if bucket.avg_pnl() < WORST_MOOD_AVG {
            out.push(Insight {
                id: format!("worst-mood-{}", mood),
                severity: Severity::Warning,
                title: format!("Trading while {} is costing you", mood),
                description: format!(
                    "{} trades tagged '{}' average {:+.2}.",
                    bucket.count,
                    mood,
                    bucket.avg_pnl()
                ),
                recommendation: Some(format!(
                    "When you notice you are {}, close the platform for the day.",
                    mood
                )),
                confidence: scaled_confidence(bucket.count, trades.len()),
                data: Some(json!({
                    "mood": mood.as_str(),
                    "trades": bucket.count,
                    "avg_pnl": bucket.avg_pnl(),
                })),
            });
        }
    }

    out
}

/// Win rate over the trailing window of trades (by entry time).
pub fn recent_streak(trades: &[Trade], cfg: &Config) -> Vec<Insight> {
    if trades.len() < cfg.streak_window {
        return vec![];
    }

    let mut ordered: Vec<&Trade> = trades.iter().collect();
    ordered.sort_by_key(|t| t.ts);
    let recent = &ordered[ordered.len() - cfg.streak_window..];

    let wins = recent.iter().filter(|t| t.is_win()).count();
    let win_rate = wins as f64 / recent.len() as f64;

    if win_rate >= cfg.hot_streak_win_rate {
        vec![Insight {
            id: "hot-streak".to_string(),
            severity: Severity::Success,
            title: "You are on a hot streak".to_string(),
            description: format!(
                "{} of your last {} trades won ({:.0}%).",
                wins,
                recent.len(),
                win_rate * 100.0
            ),
            recommendation: Some(
                "Whatever you changed recently is working. Write it down.".to_string(),
            ),
            confidence: STREAK_CONFIDENCE,
            data: Some(json!({
                "window": recent.len(),
                "wins": wins,
                "win_rate": win_rate,
            })),
        }]
    } else if win_rate <= cfg.cold_streak_win_rate {
        vec![Insight {
            id: "cold-streak".to_string(),
            severity: Severity::Danger,
            title: "You are in a cold streak".to_string(),
            description: format!(
                "Only {} of your last {} trades won ({:.0}%).",
                wins,
                recent.len(),
                win_rate * 100.0
            ),
            recommendation: Some(
                "Cut size in half and trade only A-quality setups until the curve turns.".to_string(),
            ),
            confidence: STREAK_CONFIDENCE,
            data: Some(json!({
                "window": recent.len(),
                "wins": wins,
                "win_rate": win_rate,
            })),
        }]
    } else {
        vec![]
    }
}
