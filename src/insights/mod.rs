pub mod behavior;
pub mod performance;
pub mod time_patterns;
pub mod types;

pub use types::{Insight, Severity};

use crate::config::Config;
use crate::models::Trade;

/// A detector is an independent pure rule over the trade list. Detectors
/// never see each other's output; the ranker imposes the final order.
pub type Detector = fn(&[Trade], &Config) -> Vec<Insight>;

/// Adding a rule is one function plus one line here.
pub const DETECTORS: &[Detector] = &[
    time_patterns::best_hour,
    time_patterns::worst_hour,
    time_patterns::best_weekday,
    time_patterns::overtrading,
    time_patterns::revenge_trading,
    behavior::mood_patterns,
    behavior::recent_streak,
    performance::pair_performance,
    performance::setup_performance,
];

pub fn generate_insights(trades: &[Trade], cfg: &Config) -> Vec<Insight> {
    if trades.len() < cfg.min_trades_for_insights {
        return vec![insufficient_data(trades.len(), cfg)];
    }

    let mut insights: Vec<Insight> = Vec::new();
    for detector in DETECTORS {
        insights.extend(detector(trades, cfg));
    }
    rank_insights(&mut insights);
    insights
}

/// Severity first (danger, warning, success, info), then confidence
/// descending. Stable, so detector registry order breaks remaining ties.
pub fn rank_insights(insights: &mut [Insight]) {
    insights.sort_by(|a, b| {
        a.severity
            .rank()
            .cmp(&b.severity.rank())
            .then(b.confidence.cmp(&a.confidence))
    });
}

fn insufficient_data(logged: usize, cfg: &Config) -> Insight {
    Insight {
        id: "insufficient-data".to_string(),
        severity: Severity::Info,
        title: "Not enough trades yet".to_string(),
        description: format!(
            "Pattern analysis needs at least {} trades; the journal has {}.",
            cfg.min_trades_for_insights, logged
        ),
        recommendation: Some("Keep logging every trade, winners and losers alike.".to_string()),
        confidence: 100,
        data: None,
    }
}
