use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Maximum number of entries a ranking returns.
pub const RANK_LIMIT: usize = 10;

/// Which leaderboard to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RankKind {
    /// Highest 1-day growth first
    DayGain,
    /// Lowest 1-day growth first
    DayLoss,
    /// Highest 7-day net value growth first
    InflowGrowth,
}

impl RankKind {
    /// Sort column understood by the ranking endpoint.
    pub fn sort_column(&self) -> &'static str {
        match self {
            Self::DayGain | Self::DayLoss => "1nzf",
            Self::InflowGrowth => "7yjjz",
        }
    }

    /// Sort direction understood by the ranking endpoint: "-1" descending, "1" ascending.
    pub fn sort_direction(&self) -> &'static str {
        match self {
            Self::DayGain | Self::InflowGrowth => "-1",
            Self::DayLoss => "1",
        }
    }

    /// Orders two entries the way this leaderboard ranks them.
    pub fn compare(&self, a: &RankEntry, b: &RankEntry) -> Ordering {
        match self {
            Self::DayGain => b.day_growth_pct.cmp(&a.day_growth_pct),
            Self::DayLoss => a.day_growth_pct.cmp(&b.day_growth_pct),
            Self::InflowGrowth => b.week_growth_pct.cmp(&a.week_growth_pct),
        }
    }

    /// Sorts entries for this leaderboard and keeps the top [`RANK_LIMIT`].
    pub fn rank(&self, mut entries: Vec<RankEntry>) -> Vec<RankEntry> {
        entries.sort_by(|a, b| self.compare(a, b));
        entries.truncate(RANK_LIMIT);
        entries
    }
}

/// One row of a fund leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankEntry {
    pub code: String,
    pub name: String,
    pub unit_value: Decimal,
    pub day_growth_pct: Decimal,
    pub week_growth_pct: Decimal,
    pub month_growth_pct: Decimal,
    pub year_growth_pct: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn entry(code: &str, day: Decimal, week: Decimal) -> RankEntry {
        RankEntry {
            code: code.to_string(),
            name: format!("基金{}", code),
            unit_value: dec!(1),
            day_growth_pct: day,
            week_growth_pct: week,
            month_growth_pct: Decimal::ZERO,
            year_growth_pct: Decimal::ZERO,
        }
    }

    #[test]
    fn test_upstream_sort_params() {
        assert_eq!(RankKind::DayGain.sort_column(), "1nzf");
        assert_eq!(RankKind::DayGain.sort_direction(), "-1");
        assert_eq!(RankKind::DayLoss.sort_column(), "1nzf");
        assert_eq!(RankKind::DayLoss.sort_direction(), "1");
        assert_eq!(RankKind::InflowGrowth.sort_column(), "7yjjz");
        assert_eq!(RankKind::InflowGrowth.sort_direction(), "-1");
    }

    #[test]
    fn test_day_gain_sorts_descending() {
        let ranked = RankKind::DayGain.rank(vec![
            entry("a", dec!(0.5), dec!(0)),
            entry("b", dec!(3.1), dec!(0)),
            entry("c", dec!(-1.2), dec!(0)),
        ]);
        let codes: Vec<_> = ranked.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, ["b", "a", "c"]);
    }

    #[test]
    fn test_day_loss_sorts_ascending() {
        let ranked = RankKind::DayLoss.rank(vec![
            entry("a", dec!(0.5), dec!(0)),
            entry("b", dec!(3.1), dec!(0)),
            entry("c", dec!(-1.2), dec!(0)),
        ]);
        let codes: Vec<_> = ranked.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, ["c", "a", "b"]);
    }

    #[test]
    fn test_inflow_growth_sorts_by_week() {
        let ranked = RankKind::InflowGrowth.rank(vec![
            entry("a", dec!(9), dec!(1)),
            entry("b", dec!(0), dec!(4)),
        ]);
        assert_eq!(ranked[0].code, "b");
    }

    #[test]
    fn test_rank_caps_at_limit() {
        let entries = (0..25)
            .map(|i| entry(&i.to_string(), Decimal::from(i), Decimal::ZERO))
            .collect();
        let ranked = RankKind::DayGain.rank(entries);
        assert_eq!(ranked.len(), RANK_LIMIT);
        assert_eq!(ranked[0].day_growth_pct, dec!(24));
    }
}
