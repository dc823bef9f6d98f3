//! Market domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fundpulse_market_data::{
    IndexBoard, InstrumentIdentity, QuoteSnapshot, RankEntry, RankKind, SentimentSnapshot,
};

/// Identity and latest quote of one fund, as shown in a fund list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundOverview {
    pub identity: InstrumentIdentity,
    pub quote: QuoteSnapshot,
}

/// Results delivered by the background acquisition worker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AcquisitionEvent {
    Indices(IndexBoard),
    Rank { kind: RankKind, entries: Vec<RankEntry> },
    Sentiment(SentimentSnapshot),
    FundOverviews(Vec<FundOverview>),
    Estimate { code: String, value: Decimal },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_serialize_with_type_tag() {
        let event = AcquisitionEvent::Rank {
            kind: RankKind::DayGain,
            entries: Vec::new(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "RANK");
        assert_eq!(json["payload"]["kind"], "DAY_GAIN");
        assert!(json["payload"]["entries"].as_array().unwrap().is_empty());

        let event = AcquisitionEvent::Estimate {
            code: "110022".to_string(),
            value: Decimal::ZERO,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "ESTIMATE");
        assert_eq!(json["payload"]["code"], "110022");
    }
}
