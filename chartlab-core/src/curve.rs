//! Balance curve shaping for the account performance chart.
//!
//! The backend reports a balance point per ledger event, so long stretches of
//! inactivity show up as runs of identical balances. The chart drops those
//! runs and keeps only the points where the balance actually moved.

use serde::{Deserialize, Serialize};

/// One point on an account balance curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalancePoint {
    /// Epoch seconds.
    pub date: i64,
    pub balance: f64,
}

/// Keep the first point and every point whose balance differs from its
/// predecessor's. Order is preserved; an empty input yields an empty output.
pub fn dedupe_flat_segments(points: &[BalancePoint]) -> Vec<BalancePoint> {
    points
        .iter()
        .enumerate()
        .filter(|(i, p)| *i == 0 || p.balance != points[i - 1].balance)
        .map(|(_, p)| *p)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: i64, balance: f64) -> BalancePoint {
        BalancePoint { date, balance }
    }

    #[test]
    fn drops_repeated_balances() {
        let points = vec![
            point(1, 1000.0),
            point(2, 1000.0),
            point(3, 1000.0),
            point(4, 1050.0),
            point(5, 1050.0),
            point(6, 900.0),
        ];
        let out = dedupe_flat_segments(&points);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].date, 1);
        assert_eq!(out[1].date, 4);
        assert_eq!(out[2].date, 6);
    }

    #[test]
    fn keeps_point_when_balance_returns_to_earlier_value() {
        // Comparison is against the immediate predecessor only
        let points = vec![point(1, 1000.0), point(2, 1100.0), point(3, 1000.0)];
        let out = dedupe_flat_segments(&points);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn empty_and_single_inputs() {
        assert!(dedupe_flat_segments(&[]).is_empty());
        assert_eq!(dedupe_flat_segments(&[point(1, 5.0)]).len(), 1);
    }
}
