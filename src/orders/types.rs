//! Order service wire types.

use serde::{Deserialize, Serialize};

/// Order details as returned by `GET /orders/{orderId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInfo {
    pub customer_id: Option<String>,
    pub item_id: Option<String>,
    pub quantity: Option<i32>,
}
