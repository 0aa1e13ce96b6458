use serde::{Deserialize, Serialize};

/// A ranked asset as listed by the market data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub rank: Option<u32>,
    pub symbol: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_usd: Option<f64>,
}

impl Asset {
    /// Asset with only an identifier, used where metadata is irrelevant
    pub fn with_id(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            symbol: id.to_uppercase(),
            name: id.clone(),
            id,
            rank: None,
            price_usd: None,
        }
    }
}
