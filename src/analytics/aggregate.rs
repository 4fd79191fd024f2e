use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

use crate::config::Config;
use crate::models::Trade;

/// Per-group accumulator. Rebuilt fresh on every analytics pass and
/// discarded afterwards, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub count: usize,
    pub wins: usize,
    pub total_pnl: f64,
}

impl Bucket {
    pub fn add(&mut self, trade: &Trade) {
        self.count += 1;
        if trade.is_win() {
            self.wins += 1;
        }
        self.total_pnl += trade.pnl;
    }

    pub fn losses(&self) -> usize {
        self.count - self.wins
    }

    pub fn win_rate(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.wins as f64 / self.count as f64
        }
    }

    pub fn avg_pnl(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_pnl / self.count as f64
        }
    }
}

/// Fold trades into per-key buckets. The fold is commutative, so input
/// order cannot affect the result. The input slice is never mutated.
pub fn compute_aggregates<K, F>(trades: &[Trade], key_fn: F) -> HashMap<K, Bucket>
where
    K: Eq + Hash,
    F: Fn(&Trade) -> K,
{
    let mut buckets: HashMap<K, Bucket> = HashMap::new();
    for trade in trades {
        buckets.entry(key_fn(trade)).or_default().add(trade);
    }
    buckets
}

/// Grouping dimensions the report tables are built over. Missing tags fold
/// into the tag enums' `unknown`/`other` keys rather than a sentinel of
/// their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Setup,
    Mood,
    Pair,
    Hour,
    Weekday,
    SessionTag,
    TimeOfDay,
}

impl Dimension {
    pub const ALL: &'static [Dimension] = &[
        Dimension::Setup,
        Dimension::Mood,
        Dimension::Pair,
        Dimension::Hour,
        Dimension::Weekday,
        Dimension::SessionTag,
        Dimension::TimeOfDay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Setup => "setup",
            Dimension::Mood => "mood",
            Dimension::Pair => "pair",
            Dimension::Hour => "hour",
            Dimension::Weekday => "weekday",
            Dimension::SessionTag => "session",
            Dimension::TimeOfDay => "time_of_day",
        }
    }

    /// Extract the grouping key for one trade. Hour and weekday are read in
    /// the journal timezone from `cfg`, never local time.
    pub fn key_for(&self, trade: &Trade, cfg: &Config) -> String {
        match self {
            Dimension::Setup => trade.setup.as_str().to_string(),
            Dimension::Mood => trade.mood.as_str().to_string(),
            Dimension::Pair => trade.pair.clone(),
            Dimension::Hour => format!("{:02}", trade.hour_in(cfg.timezone)),
            Dimension::Weekday => format!("{}", trade.weekday_in(cfg.timezone)),
            Dimension::SessionTag => trade.session.as_str().to_string(),
            Dimension::TimeOfDay => {
                time_of_day_bucket(trade.hour_in(cfg.timezone), cfg).to_string()
            }
        }
    }
}

/// Session bucket from an hour of day. Boundaries come from config; they
/// approximate Asia/London/NY activity but are not business truth.
pub fn time_of_day_bucket(hour: u32, cfg: &Config) -> &'static str {
    if hour < cfg.morning_end_hour {
        "morning"
    } else if hour < cfg.evening_start_hour {
        "afternoon"
    } else {
        "evening"
    }
}

pub fn aggregate_by(trades: &[Trade], dim: Dimension, cfg: &Config) -> HashMap<String, Bucket> {
    compute_aggregates(trades, |t| dim.key_for(t, cfg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Setup;
    use crate::test_helpers::{default_test_config, trade_with_setup};

    #[test]
    fn bucket_counts_sum_to_input_len() {
        let cfg = default_test_config();
        let trades = vec![
            trade_with_setup("a", Setup::Breakout, 10.0),
            trade_with_setup("b", Setup::Breakout, -5.0),
            trade_with_setup("c", Setup::Pullback, 3.0),
            trade_with_setup("d", Setup::Pullback, 7.0),
            trade_with_setup("e", Setup::Pullback, -1.0),
            trade_with_setup("f", Setup::Reversal, 2.0),
            trade_with_setup("g", Setup::Reversal, 4.0),
        ];

        let buckets = aggregate_by(&trades, Dimension::Setup, &cfg);
        assert_eq!(buckets.len(), 3);
        let total: usize = buckets.values().map(|b| b.count).sum();
        assert_eq!(total, 7);
    }

    #[test]
    fn bucket_win_rate_and_avg() {
        let cfg = default_test_config();
        let trades = vec![
            trade_with_setup("a", Setup::Scalp, 10.0),
            trade_with_setup("b", Setup::Scalp, -4.0),
        ];
        let buckets = aggregate_by(&trades, Dimension::Setup, &cfg);
        let b = &buckets["scalp"];
        assert_eq!(b.count, 2);
        assert_eq!(b.wins, 1);
        assert_eq!(b.losses(), 1);
        assert!((b.win_rate() - 0.5).abs() < 1e-12);
        assert!((b.avg_pnl() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_bucket_rates_are_zero() {
        let b = Bucket::default();
        assert_eq!(b.win_rate(), 0.0);
        assert_eq!(b.avg_pnl(), 0.0);
    }

    #[test]
    fn time_of_day_boundaries() {
        let cfg = default_test_config();
        assert_eq!(time_of_day_bucket(0, &cfg), "morning");
        assert_eq!(time_of_day_bucket(11, &cfg), "morning");
        assert_eq!(time_of_day_bucket(12, &cfg), "afternoon");
        assert_eq!(time_of_day_bucket(16, &cfg), "afternoon");
        assert_eq!(time_of_day_bucket(17, &cfg), "evening");
        assert_eq!(time_of_day_bucket(23, &cfg), "evening");
    }

    #[test]
    fn generic_fold_with_typed_key() {
        let trades = vec![
            trade_with_setup("a", Setup::Scalp, 10.0),
            trade_with_setup("b", Setup::News, -4.0),
        ];
        let by_win = compute_aggregates(&trades, |t| t.is_win());
        assert_eq!(by_win[&true].count, 1);
        assert_eq!(by_win[&false].count, 1);
    }
}
