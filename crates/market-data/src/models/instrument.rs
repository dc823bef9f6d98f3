use serde::{Deserialize, Serialize};

/// Fund classification derived from the upstream type label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FundCategory {
    Equity,
    Mixed,
    Bond,
    Money,
    Index,
    /// QDII funds investing abroad
    Offshore,
    FundOfFunds,
    #[default]
    Unknown,
}

/// Label fragments in match order. The first fragment contained in a label wins,
/// so the order here decides labels such as "指数型-股票".
pub const CATEGORY_LABELS: [(&str, FundCategory); 7] = [
    ("股票型", FundCategory::Equity),
    ("混合型", FundCategory::Mixed),
    ("债券型", FundCategory::Bond),
    ("货币型", FundCategory::Money),
    ("指数型", FundCategory::Index),
    ("QDII", FundCategory::Offshore),
    ("FOF", FundCategory::FundOfFunds),
];

impl FundCategory {
    /// Classifies an upstream type label by substring match.
    pub fn from_label(label: &str) -> Self {
        CATEGORY_LABELS
            .iter()
            .find(|(fragment, _)| label.contains(fragment))
            .map(|(_, category)| *category)
            .unwrap_or(FundCategory::Unknown)
    }
}

/// Identity of a fund as published on its detail page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentIdentity {
    /// Exchange-scoped fund code, e.g. "000001"
    pub code: String,

    /// Display name
    pub name: String,

    pub category: FundCategory,

    /// Raw type label (e.g. "混合型-偏股"), kept for the sector factor lookup
    pub category_label: String,
}

impl InstrumentIdentity {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        category_label: impl Into<String>,
    ) -> Self {
        let category_label = category_label.into();
        Self {
            code: code.into(),
            name: name.into(),
            category: FundCategory::from_label(&category_label),
            category_label,
        }
    }
}
