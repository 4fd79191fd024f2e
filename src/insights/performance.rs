use serde_json::json;

use crate::analytics::compute_aggregates;
use crate::config::Config;
use crate::insights::types::{scaled_confidence, Insight, Severity};
use crate::models::Trade;

const BEST_PAIR_AVG: f64 = 10.0;
const WORST_PAIR_AVG: f64 = -10.0;
const BEST_SETUP_AVG: f64 = 10.0;
const WEAK_SETUP_WIN_RATE: f64 = 0.40;
const WEAK_SETUP_CONFIDENCE: u8 = 75;

pub fn pair_performance(trades: &[Trade], cfg: &Config) -> Vec<Insight> {
    let buckets = compute_aggregates(trades, |t| t.pair.clone());
    let qualifying: Vec<_> = buckets
        .iter()
        .filter(|(_, b)| b.count >= cfg.min_tag_bucket)
        .collect();

    let mut out = Vec::new();

    if let Some(&(pair, bucket)) = qualifying
        .iter()
        .max_by(|a, b| a.1.avg_pnl().partial_cmp(&b.1.avg_pnl()).unwrap())
    {
        if bucket.avg_pnl() > BEST_PAIR_AVG {
            out.push(Insight {
                id: format!("best-pair-{}", pair),
                severity: Severity::Success,
                title: format!("{} is your money maker", pair),
                description: format!(
                    "{} trades on {} average {:+.2}.",
                    bucket.count,
                    pair,
                    bucket.avg_pnl()
                ),
                recommendation: Some(format!("Lean into {}. It fits how you trade.", pair)),
                confidence: scaled_confidence(bucket.count, trades.len()),
                data: Some(json!({
                    "pair": pair,
                    "trades": bucket.count,
                    "avg_pnl": bucket.avg_pnl(),
                })),
            });
        }
    }

    if let Some(&(pair, bucket)) = qualifying
        .iter()
        .min_by(|a, b| a.1.avg_pnl().partial_cmp(&b.1.avg_pnl()).unwrap())
    {
        if bucket.avg_pnl() < WORST_PAIR_AVG {
            out.push(Insight {
                id: format!("worst-pair-{}", pair),
                severity: Severity::Warning,
                title: format!("{} keeps taking from you", pair),
                description: format!(
                    "{} trades on {} average {:+.2}.",
                    bucket.count,
                    pair,
                    bucket.avg_pnl()
                ),
                recommendation: Some(format!(
                    "Drop {} for a month and see what it does to the curve.",
                    pair
                )),
                confidence: scaled_confidence(bucket.count, trades.len()),
                data: Some(json!({
                    "pair": pair,
                    "trades": bucket.count,
                    "avg_pnl": bucket.avg_pnl(),
                })),
            });
        }
    }

    out
}

pub fn setup_performance(trades: &[Trade], cfg: &Config) -> Vec<Insight> {
    let buckets = compute_aggregates(trades, |t| t.setup);
    let qualifying: Vec<_> = buckets
        .iter()
        .filter(|(_, b)| b.count >= cfg.min_tag_bucket)
        .collect();

    let mut out = Vec::new();

    if let Some(&(&setup, bucket)) = qualifying
        .iter()
        .max_by(|a, b| a.1.avg_pnl().partial_cmp(&b.1.avg_pnl()).unwrap())
    {
        if bucket.avg_pnl() > BEST_SETUP_AVG {
            out.push(Insight {
                id: format!("best-setup-{}", setup),
                severity: Severity::Success,
                title: format!("Your {} setup carries the account", setup),
                description: format!(
                    "{} {} trades average {:+.2} with a {:.0}% win rate.",
                    bucket.count,
                    setup,
                    bucket.avg_pnl(),
                    bucket.win_rate() * 100.0
                ),
                recommendation: Some(format!(
                    "Take more {} trades and fewer of everything else.",
                    setup
                )),
                confidence: scaled_confidence(bucket.count, trades.len()),
                data: Some(json!({
                    "setup": setup.as_str(),
                    "trades": bucket.count,
                    "avg_pnl": bucket.avg_pnl(),
                    "win_rate": bucket.win_rate(),
                })),
            });
        }
    }

    // Every sufficiently-traded setup under the win-rate floor gets flagged,
    // not just the single worst one.
    for &(&setup, bucket) in &qualifying {
        if bucket.win_rate() < WEAK_SETUP_WIN_RATE {
            out.push(Insight {
                id: format!("weak-setup-{}", setup),
                severity: Severity::Warning,
                title: format!("Your {} setup rarely works", setup),
                description: format!(
                    "{} {} trades win only {:.0}% of the time.",
                    bucket.count,
                    setup,
                    bucket.win_rate() * 100.0
                ),
                recommendation: Some(format!(
                    "Review every {} entry in the journal before taking another.",
                    setup
                )),
                confidence: WEAK_SETUP_CONFIDENCE,
                data: Some(json!({
                    "setup": setup.as_str(),
                    "trades": bucket.count,
                    "win_rate": bucket.win_rate(),
                })),
            });
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Setup;
    use crate::test_helpers::{default_test_config, trade_with_pair, trade_with_setup};

    #[test]
    fn pair_needs_five_trades() {
        let cfg = default_test_config();
        let trades: Vec<_> = (0..4)
            .map(|i| trade_with_pair(&format!("t{}", i), "GBPJPY", 50.0))
            .collect();
        assert!(pair_performance(&trades, &cfg).is_empty());
    }

    #[test]
    fn best_and_worst_pair() {
        let cfg = default_test_config();
        let mut trades = Vec::new();
        for i in 0..5 {
            trades.push(trade_with_pair(&format!("eu{}", i), "EURUSD", 20.0));
        }
        for i in 0..5 {
            trades.push(trade_with_pair(&format!("gj{}", i), "GBPJPY", -25.0));
        }
        let out = pair_performance(&trades, &cfg);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, "best-pair-EURUSD");
        assert_eq!(out[1].id, "worst-pair-GBPJPY");
    }

    #[test]
    fn best_pair_needs_meaningful_average() {
        let cfg = default_test_config();
        // Positive but under the +10 trigger.
        let trades: Vec<_> = (0..6)
            .map(|i| trade_with_pair(&format!("t{}", i), "EURUSD", 5.0))
            .collect();
        assert!(pair_performance(&trades, &cfg).is_empty());
    }

    #[test]
    fn two_trade_setup_never_flagged_best() {
        let cfg = default_test_config();
        // 100% profitable but only 2 trades: below the >=5 sample floor.
        let trades = vec![
            trade_with_setup("a", Setup::News, 500.0),
            trade_with_setup("b", Setup::News, 400.0),
        ];
        assert!(setup_performance(&trades, &cfg).is_empty());
    }

    #[test]
    fn weak_setup_flagged_by_win_rate() {
        let cfg = default_test_config();
        let mut trades = Vec::new();
        // 1 win, 4 losses: 20% win rate but positive average, so only the
        // weak-setup rule may fire.
        trades.push(trade_with_setup("w", Setup::Range, 100.0));
        for i in 0..4 {
            trades.push(trade_with_setup(&format!("l{}", i), Setup::Range, -5.0));
        }
        let out = setup_performance(&trades, &cfg);
        assert_eq!(out.len(), 2); // avg 16 > 10 triggers best as well
        let weak = out.iter().find(|i| i.id == "weak-setup-range").unwrap();
        assert_eq!(weak.severity, Severity::Warning);
        assert_eq!(weak.confidence, WEAK_SETUP_CONFIDENCE);
    }

    #[test]
    fn solid_setups_not_flagged_weak() {
        let cfg = default_test_config();
        let mut trades = Vec::new();
        for i in 0..3 {
            trades.push(trade_with_setup(&format!("w{}", i), Setup::Trend, 20.0));
        }
        for i in 0..2 {
            trades.push(trade_with_setup(&format!("l{}", i), Setup::Trend, -10.0));
        }
        let out = setup_performance(&trades, &cfg);
        assert!(out.iter().all(|i| !i.id.starts_with("weak-setup")));
    }
}
