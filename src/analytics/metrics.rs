use serde::{Deserialize, Serialize};

use crate::models::Trade;

/// Headline performance metrics over a trade list.
///
/// Conventions for degenerate inputs, applied uniformly: rates and
/// averages are 0.0 when their denominator is empty, and `profit_factor`
/// is `None` when there is no gross loss to divide by (an undefined
/// ratio, not infinity).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub total: usize,
    pub wins: usize,
    pub losses: usize,
    /// Fraction in 0..=1.
    pub win_rate: f64,
    pub avg_win: f64,
    /// Positive magnitude of the average losing trade.
    pub avg_loss: f64,
    pub profit_factor: Option<f64>,
    /// Avg win as a multiple of avg loss. 0 when there is no loss side.
    pub payoff_ratio: f64,
    /// Expected P&L per trade: win_rate * avg_win - loss_rate * avg_loss.
    pub expectancy: f64,
    pub total_pnl: f64,
}

pub fn compute_metrics(trades: &[Trade]) -> Metrics {
    let total = trades.len();
    let wins: Vec<f64> = trades.iter().filter(|t| t.pnl > 0.0).map(|t| t.pnl).collect();
    let losses: Vec<f64> = trades.iter().filter(|t| t.pnl <= 0.0).map(|t| t.pnl).collect();

    let win_rate = if total > 0 {
        wins.len() as f64 / total as f64
    } else {
        0.0
    };

    let avg_win = if wins.is_empty() {
        0.0
    } else {
        wins.iter().sum::<f64>() / wins.len() as f64
    };

    let avg_loss = if losses.is_empty() {
        0.0
    } else {
        (losses.iter().sum::<f64>() / losses.len() as f64).abs()
    };

    // Gate on gross loss, not loss count: breakeven trades count as losses
    // but contribute nothing to divide by.
    let gross_loss = losses.iter().sum::<f64>().abs();
    let profit_factor = if gross_loss > 0.0 {
        Some(wins.iter().sum::<f64>() / gross_loss)
    } else {
        None
    };

    let payoff_ratio = if avg_loss > 0.0 { avg_win / avg_loss } else { 0.0 };

    let expectancy = (win_rate * avg_win) - ((1.0 - win_rate) * avg_loss);

    Metrics {
        total,
        wins: wins.len(),
        losses: losses.len(),
        win_rate: round4(win_rate),
        avg_win: round4(avg_win),
        avg_loss: round4(avg_loss),
        profit_factor: profit_factor.map(round4),
        payoff_ratio: round4(payoff_ratio),
        expectancy: if total > 0 { round4(expectancy) } else { 0.0 },
        total_pnl: round4(trades.iter().map(|t| t.pnl).sum()),
    }
}

pub(crate) fn round4(x: f64) -> f64 {
    (x * 10000.0).round() / 10000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::trades_from_pnls;

    #[test]
    fn empty_list_is_all_zeroes() {
        let m = compute_metrics(&[]);
        assert_eq!(m.total, 0);
        assert_eq!(m.win_rate, 0.0);
        assert_eq!(m.avg_win, 0.0);
        assert_eq!(m.avg_loss, 0.0);
        assert_eq!(m.profit_factor, None);
        assert_eq!(m.payoff_ratio, 0.0);
        assert_eq!(m.expectancy, 0.0);
    }

    #[test]
    fn expectancy_known_value() {
        // 60% win rate, avg win 100, avg loss 50:
        // expectancy = 0.6*100 - 0.4*50 = 40
        let m = compute_metrics(&trades_from_pnls(&[100.0, 100.0, 100.0, -50.0, -50.0]));
        assert!((m.win_rate - 0.6).abs() < 1e-9);
        assert!((m.avg_win - 100.0).abs() < 1e-9);
        assert!((m.avg_loss - 50.0).abs() < 1e-9);
        assert!((m.payoff_ratio - 2.0).abs() < 1e-9);
        assert!((m.expectancy - 40.0).abs() < 1e-9);
    }

    #[test]
    fn win_rate_bounds() {
        let m = compute_metrics(&trades_from_pnls(&[1.0, 1.0, -1.0]));
        assert!(m.win_rate >= 0.0 && m.win_rate <= 1.0);
    }

    #[test]
    fn profit_factor_none_without_losses() {
        let m = compute_metrics(&trades_from_pnls(&[5.0, 10.0]));
        assert_eq!(m.profit_factor, None);
    }

    #[test]
    fn profit_factor_gross_ratio() {
        // gross win 30, gross loss 10
        let m = compute_metrics(&trades_from_pnls(&[20.0, 10.0, -4.0, -6.0]));
        assert_eq!(m.profit_factor, Some(3.0));
    }

    #[test]
    fn profit_factor_zero_when_only_losses() {
        let m = compute_metrics(&trades_from_pnls(&[-5.0, -10.0]));
        assert_eq!(m.profit_factor, Some(0.0));
    }

    #[test]
    fn breakeven_counts_as_loss() {
        let m = compute_metrics(&trades_from_pnls(&[0.0, 10.0]));
        assert_eq!(m.wins, 1);
        assert_eq!(m.losses, 1);
        // A breakeven loss has no gross loss, so the ratio stays undefined.
        assert_eq!(m.profit_factor, None);
    }
}
