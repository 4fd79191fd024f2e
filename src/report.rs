use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::analytics::{aggregate_by, compute_metrics, compute_streaks, Bucket, Dimension, Metrics, StreakSummary};
use crate::config::Config;
use crate::enforcement::{evaluate_enforcement, EnforcementLevel, EnforcementState};
use crate::insights::{generate_insights, Insight};
use crate::models::Trade;

/// Everything the dashboard needs from one analytics pass.
#[derive(Debug, Clone)]
pub struct JournalReport {
    pub generated_at: DateTime<Utc>,
    pub metrics: Metrics,
    pub streaks: StreakSummary,
    pub setup_stats: HashMap<String, Bucket>,
    pub session_stats: HashMap<String, Bucket>,
    pub time_of_day_stats: HashMap<String, Bucket>,
    pub insights: Vec<Insight>,
    pub enforcement: EnforcementState,
}

impl JournalReport {
    pub fn from_trades(trades: &[Trade], now: DateTime<Utc>, cfg: &Config) -> Self {
        JournalReport {
            generated_at: now,
            metrics: compute_metrics(trades),
            streaks: compute_streaks(trades),
            setup_stats: aggregate_by(trades, Dimension::Setup, cfg),
            session_stats: aggregate_by(trades, Dimension::SessionTag, cfg),
            time_of_day_stats: aggregate_by(trades, Dimension::TimeOfDay, cfg),
            insights: generate_insights(trades, cfg),
            enforcement: evaluate_enforcement(trades, now, cfg),
        }
    }

    pub fn print_summary(&self) {
        let m = &self.metrics;

        println!("\n{}", "=".repeat(70));
        println!("  TRADING JOURNAL REPORT");
        println!("{}", "=".repeat(70));
        println!(
            "  Generated:   {}",
            self.generated_at.format("%Y-%m-%d %H:%M UTC")
        );
        println!();
        println!("  PERFORMANCE");
        println!("  ───────────────────────────────────");
        println!("  Trades:      {}", m.total);
        println!("  Win/Loss:    {} / {}", m.wins, m.losses);
        println!("  Win Rate:    {:.1}%", m.win_rate * 100.0);
        println!("  Avg Win:     ${:+.2}", m.avg_win);
        println!("  Avg Loss:    ${:+.2}", -m.avg_loss);
        println!("  Expectancy:  ${:+.2} per trade", m.expectancy);
        println!("  Payoff:      {:.2}R", m.payoff_ratio);
        match m.profit_factor {
            Some(pf) => println!("  Profit Factor: {:.2}", pf),
            None => println!("  Profit Factor: n/a (no losing trades)"),
        }
        println!("  Net PnL:     ${:+.2}", m.total_pnl);
        println!();
        println!("  STREAKS");
        println!("  ───────────────────────────────────");
        println!("  Current:     {} green days", self.streaks.current_streak);
        println!("  Longest:     {} green days", self.streaks.longest_streak);
        match self.streaks.last_profitable_day {
            Some(day) => println!("  Last green:  {}", day),
            None => println!("  Last green:  never"),
        }

        print_bucket_table("BY SETUP", &self.setup_stats);
        print_bucket_table("BY SESSION", &self.session_stats);
        print_bucket_table("BY TIME OF DAY", &self.time_of_day_stats);

        if !self.insights.is_empty() {
            println!();
            println!("  INSIGHTS");
            println!("  ───────────────────────────────────");
            for insight in &self.insights {
                println!(
                    "  [{:>7}] {} ({}%)",
                    insight.severity, insight.title, insight.confidence
                );
                println!("            {}", insight.description);
                if let Some(rec) = &insight.recommendation {
                    println!("            -> {}", rec);
                }
            }
        }

        println!();
        println!("  DISCIPLINE");
        println!("  ───────────────────────────────────");
        println!(
            "  Violations (14d): {}",
            self.enforcement.violation_count
        );
        match self.enforcement.level() {
            EnforcementLevel::Clean => println!("  Status:      clean"),
            EnforcementLevel::Warning => {
                println!("  Status:      WARNING - rule violations are piling up")
            }
            EnforcementLevel::ReadOnly => {
                println!("  Status:      READ-ONLY - journal locked by violations")
            }
        }
        println!("{}", "=".repeat(70));
    }
}

fn print_bucket_table(title: &str, stats: &HashMap<String, Bucket>) {
    if stats.is_empty() {
        return;
    }
    println!();
    println!("  {}", title);
    println!("  ───────────────────────────────────");
    let mut rows: Vec<_> = stats.iter().collect();
    rows.sort_by(|a, b| b.1.total_pnl.partial_cmp(&a.1.total_pnl).unwrap());
    for (key, bucket) in rows {
        println!(
            "  {:>12}: {} trades | WR {:.0}% | PnL ${:+.2} | Avg ${:+.2}",
            key,
            bucket.count,
            bucket.win_rate() * 100.0,
            bucket.total_pnl,
            bucket.avg_pnl()
        );
    }
}
