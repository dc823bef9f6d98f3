//! Static reference data served when no live source answers.
//!
//! The synthetic board covers every known index with plausible values. It is
//! substituted whole after the index chain came back empty. Indices that no
//! live source quotes are always served from it.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{HotFund, IndexBoard, IndexSnapshot, SentimentSnapshot, KNOWN_INDICES};

/// (price, change, change_pct, open, high, low, volume), in `KNOWN_INDICES` order.
type SyntheticRow = (Decimal, Decimal, Decimal, Decimal, Decimal, Decimal, u64);

#[rustfmt::skip]
fn synthetic_rows() -> [SyntheticRow; 18] {
    [
        (dec!(3300.00), dec!(10.00), dec!(0.30), dec!(3290.00), dec!(3310.00), dec!(3285.00), 20_000_000_000),
        (dec!(13000.00), dec!(50.00), dec!(0.38), dec!(12950.00), dec!(13050.00), dec!(12900.00), 30_000_000_000),
        (dec!(2800.00), dec!(20.00), dec!(0.72), dec!(2780.00), dec!(2810.00), dec!(2770.00), 15_000_000_000),
        (dec!(1100.00), dec!(15.00), dec!(1.38), dec!(1085.00), dec!(1110.00), dec!(1080.00), 8_000_000_000),
        (dec!(1200.00), dec!(8.00), dec!(0.67), dec!(1192.00), dec!(1205.00), dec!(1188.00), 3_000_000_000),
        (dec!(3500.00), dec!(12.00), dec!(0.34), dec!(3488.00), dec!(3510.00), dec!(3480.00), 10_000_000_000),
        (dec!(6800.00), dec!(30.00), dec!(0.44), dec!(6770.00), dec!(6810.00), dec!(6760.00), 12_000_000_000),
        (dec!(8200.00), dec!(40.00), dec!(0.49), dec!(8160.00), dec!(8220.00), dec!(8150.00), 9_000_000_000),
        (dec!(4100.00), dec!(15.00), dec!(0.37), dec!(4085.00), dec!(4110.00), dec!(4080.00), 18_000_000_000),
        (dec!(25000.00), dec!(150.00), dec!(0.60), dec!(24850.00), dec!(25100.00), dec!(24800.00), 8_000_000_000),
        (dec!(5800.00), dec!(80.00), dec!(1.40), dec!(5720.00), dec!(5820.00), dec!(5700.00), 4_000_000_000),
        (dec!(8600.00), dec!(60.00), dec!(0.70), dec!(8540.00), dec!(8620.00), dec!(8530.00), 3_500_000_000),
        (dec!(15000.00), dec!(100.00), dec!(0.67), dec!(14900.00), dec!(15100.00), dec!(14850.00), 4_000_000_000),
        (dec!(4700.00), dec!(30.00), dec!(0.64), dec!(4670.00), dec!(4710.00), dec!(4660.00), 3_500_000_000),
        (dec!(36000.00), dec!(200.00), dec!(0.56), dec!(35800.00), dec!(36100.00), dec!(35750.00), 3_000_000_000),
        (dec!(33500.00), dec!(350.00), dec!(1.05), dec!(33150.00), dec!(33600.00), dec!(33100.00), 5_000_000_000),
        (dec!(73500.00), dec!(800.00), dec!(1.10), dec!(72700.00), dec!(73600.00), dec!(72600.00), 2_500_000_000),
        (dec!(1500.00), dec!(20.00), dec!(1.35), dec!(1480.00), dec!(1510.00), dec!(1475.00), 1_000_000_000),
    ]
}

/// Board with every known index populated from static values.
pub fn synthetic_board() -> IndexBoard {
    KNOWN_INDICES
        .iter()
        .zip(synthetic_rows())
        .map(|(descriptor, (price, change, change_pct, open, high, low, volume))| {
            let snapshot = IndexSnapshot {
                name: descriptor.name.to_string(),
                code: descriptor.code.to_string(),
                price,
                change,
                change_pct,
                open,
                high,
                low,
                volume,
            };
            (snapshot.name.clone(), snapshot)
        })
        .collect()
}

/// Static rows for the indices no live source quotes (`quote_symbol` is `None`).
pub fn uncovered_board() -> IndexBoard {
    let mut board = synthetic_board();
    board.retain(|name, _| {
        KNOWN_INDICES
            .iter()
            .any(|d| d.name == name.as_str() && d.quote_symbol.is_none())
    });
    board
}

/// Market sentiment snapshot. No upstream publishes one, so a fixed reading is served.
pub fn reference_sentiment() -> SentimentSnapshot {
    let hot = |code: &str, name: &str, reason: &str| HotFund {
        code: code.to_string(),
        name: name.to_string(),
        reason: reason.to_string(),
    };

    SentimentSnapshot {
        sentiment_index: 55,
        description: "市场情绪中性偏乐观".to_string(),
        advancing_count: 2156,
        declining_count: 1844,
        flat_count: 120,
        net_inflow: dec!(25.6),
        hot_list: vec![
            hot("000001", "华夏成长混合", "科技板块领涨"),
            hot("110022", "易方达消费行业股票", "消费升级概念"),
            hot("001475", "易方达国防军工混合", "军工板块异动"),
            hot("000689", "前海开源新经济混合", "新能源题材"),
            hot("001593", "天弘中证计算机ETF联接", "计算机板块走强"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_board_covers_known_indices() {
        let board = synthetic_board();

        assert_eq!(board.len(), KNOWN_INDICES.len());
        for descriptor in KNOWN_INDICES.iter() {
            let snapshot = &board[descriptor.name];
            assert_eq!(snapshot.code, descriptor.code);
            assert!(snapshot.price > Decimal::ZERO);
            assert!(!snapshot.change.is_zero());
            assert!(!snapshot.change_pct.is_zero());
            assert!(snapshot.low <= snapshot.high);
        }
    }

    #[test]
    fn test_synthetic_shanghai_values() {
        let board = synthetic_board();
        let snapshot = &board["上证指数"];
        assert_eq!(snapshot.price, dec!(3300));
        assert_eq!(snapshot.change_pct, dec!(0.30));
        assert_eq!(snapshot.volume, 20_000_000_000);
    }

    #[test]
    fn test_uncovered_board_holds_only_unquoted_indices() {
        let board = uncovered_board();

        assert_eq!(board.len(), 10);
        assert!(board.contains_key("北证50"));
        assert!(board.contains_key("恒生指数"));
        assert!(board.contains_key("越南胡志明"));
        assert!(!board.contains_key("上证指数"));
    }

    #[test]
    fn test_reference_sentiment() {
        let sentiment = reference_sentiment();
        assert!(sentiment.sentiment_index <= 100);
        assert_eq!(sentiment.hot_list.len(), 5);
        assert_eq!(sentiment.net_inflow, dec!(25.6));
    }
}
