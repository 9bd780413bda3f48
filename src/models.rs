use serde::{Deserialize, Serialize};

/// Fixed drink-type labels. Declared order drives chart series order and
/// palette assignment.
pub const DRINK_TYPES: [&str; 6] = ["ビール", "ハイボール", "焼酎", "日本酒", "ワイン", "その他"];

/// One (date, type, count) tally. At most one per (date, type) pair lives in
/// the store at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkRecord {
    pub date: String,
    #[serde(rename = "type")]
    pub drink_type: String,
    pub count: u64,
}

#[derive(Debug, Deserialize)]
pub struct IncrementRequest {
    pub date: String,
    pub types: Vec<String>,
}
