use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::Config;
use crate::models::Trade;

/// Sentinel for a journal that has trades but no violation anywhere.
pub const NEVER_VIOLATED: i64 = 999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnforcementLevel {
    Clean,
    Warning,
    ReadOnly,
}

impl fmt::Display for EnforcementLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnforcementLevel::Clean => write!(f, "clean"),
            EnforcementLevel::Warning => write!(f, "warning"),
            EnforcementLevel::ReadOnly => write!(f, "read_only"),
        }
    }
}

/// A pure projection of the trade list and a caller-supplied clock. There
/// is no violation ledger to keep in sync: every call recounts history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnforcementState {
    /// Violation-flagged trades inside the trailing window.
    pub violation_count: usize,
    /// Whole days since the most recent violation anywhere in history.
    /// 999 if the journal has trades but no violation, 0 if it is empty.
    pub days_since_last_violation: i64,
    pub is_read_only: bool,
    pub show_warning: bool,
}

impl EnforcementState {
    pub fn level(&self) -> EnforcementLevel {
        if self.is_read_only {
            EnforcementLevel::ReadOnly
        } else if self.show_warning {
            EnforcementLevel::Warning
        } else {
            EnforcementLevel::Clean
        }
    }
}

/// `now` is an explicit parameter; the caller decides when to refresh it.
pub fn evaluate_enforcement(trades: &[Trade], now: DateTime<Utc>, cfg: &Config) -> EnforcementState {
    let window_start = now - Duration::days(cfg.violation_window_days);

    let violation_count = trades
        .iter()
        .filter(|t| t.is_violation())
        .filter(|t| {
            let dt = t.datetime();
            dt >= window_start && dt <= now
        })
        .count();

    let days_since_last_violation = if trades.is_empty() {
        0
    } else {
        trades
            .iter()
            .filter(|t| t.is_violation())
            .map(|t| t.datetime())
            .max()
            .map(|dt| (now - dt).num_days().max(0))
            .unwrap_or(NEVER_VIOLATED)
    };

    let is_read_only = violation_count >= cfg.lockout_threshold;
    let show_warning = !is_read_only && violation_count >= cfg.warning_threshold;

    EnforcementState {
        violation_count,
        days_since_last_violation,
        is_read_only,
        show_warning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{default_test_config, trade, violation_trade};
    use chrono::TimeZone;

    const DAY_MS: i64 = 86_400_000;
    // 2024-03-20T12:00:00Z
    const NOW_MS: i64 = 1_710_936_000_000;

    fn now() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(NOW_MS).unwrap()
    }

    #[test]
    fn empty_journal_is_clean() {
        let cfg = default_test_config();
        let s = evaluate_enforcement(&[], now(), &cfg);
        assert_eq!(s.violation_count, 0);
        assert_eq!(s.days_since_last_violation, 0);
        assert_eq!(s.level(), EnforcementLevel::Clean);
    }

    #[test]
    fn five_recent_violations_lock_the_journal() {
        let cfg = default_test_config();
        let trades: Vec<_> = (0..5)
            .map(|i| violation_trade(&format!("v{}", i), NOW_MS - (i as i64 + 1) * DAY_MS))
            .collect();
        let s = evaluate_enforcement(&trades, now(), &cfg);
        assert_eq!(s.violation_count, 5);
        assert!(s.is_read_only);
        assert!(!s.show_warning);
        assert_eq!(s.level(), EnforcementLevel::ReadOnly);
    }

    #[test]
    fn three_violations_warn_only() {
        let cfg = default_test_config();
        let trades: Vec<_> = (0..3)
            .map(|i| violation_trade(&format!("v{}", i), NOW_MS - (i as i64 + 1) * DAY_MS))
            .collect();
        let s = evaluate_enforcement(&trades, now(), &cfg);
        assert_eq!(s.violation_count, 3);
        assert!(!s.is_read_only);
        assert!(s.show_warning);
        assert_eq!(s.level(), EnforcementLevel::Warning);
    }

    #[test]
    fn old_violations_fall_out_of_the_window() {
        let cfg = default_test_config();
        // One violation 20 days back plus two recent ones.
        let trades = vec![
            violation_trade("old", NOW_MS - 20 * DAY_MS),
            violation_trade("v1", NOW_MS - DAY_MS),
            violation_trade("v2", NOW_MS - 2 * DAY_MS),
        ];
        let s = evaluate_enforcement(&trades, now(), &cfg);
        assert_eq!(s.violation_count, 2);
        assert_eq!(s.level(), EnforcementLevel::Clean);
        // Recency still reads from the newest violation.
        assert_eq!(s.days_since_last_violation, 1);
    }

    #[test]
    fn never_violated_sentinel() {
        let cfg = default_test_config();
        let trades = vec![trade("clean", NOW_MS - DAY_MS, 10.0)];
        let s = evaluate_enforcement(&trades, now(), &cfg);
        assert_eq!(s.days_since_last_violation, NEVER_VIOLATED);
        assert_eq!(s.level(), EnforcementLevel::Clean);
    }

    #[test]
    fn reevaluation_is_pure() {
        let cfg = default_test_config();
        let trades: Vec<_> = (0..4)
            .map(|i| violation_trade(&format!("v{}", i), NOW_MS - (i as i64 + 1) * DAY_MS))
            .collect();
        let a = evaluate_enforcement(&trades, now(), &cfg);
        let b = evaluate_enforcement(&trades, now(), &cfg);
        assert_eq!(a, b);
        // Same history, later clock: the state can only relax.
        let later = now() + Duration::days(15);
        let c = evaluate_enforcement(&trades, later, &cfg);
        assert_eq!(c.violation_count, 0);
        assert_eq!(c.level(), EnforcementLevel::Clean);
    }
}
