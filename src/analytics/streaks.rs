use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::Trade;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Consecutive green days ending at the most recent trading day.
    /// 0 if the most recent day closed flat or red.
    pub current_streak: usize,
    /// Longest green-day run anywhere in the journal. Always >= current.
    pub longest_streak: usize,
    pub last_profitable_day: Option<NaiveDate>,
}

/// Streaks are counted over trading days (dates that have at least one
/// trade), not calendar days, so a weekend gap does not break a run.
pub fn compute_streaks(trades: &[Trade]) -> StreakSummary {
    let mut daily: HashMap<NaiveDate, f64> = HashMap::new();
    for trade in trades {
        *daily.entry(trade.date).or_insert(0.0) += trade.pnl;
    }

    if daily.is_empty() {
        return StreakSummary::default();
    }

    let mut dates: Vec<NaiveDate> = daily.keys().copied().collect();
    dates.sort();

    let mut current = 0;
    for date in dates.iter().rev() {
        if daily[date] > 0.0 {
            current += 1;
        } else {
            break;
        }
    }

    let mut longest = 0;
    let mut run = 0;
    for date in &dates {
        if daily[date] > 0.0 {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }

    let last_profitable_day = dates.iter().rev().find(|d| daily[d] > 0.0).copied();

    StreakSummary {
        current_streak: current,
        longest_streak: longest,
        last_profitable_day,
    }
}
