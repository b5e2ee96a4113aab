use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

pub const ORDER_ACK_MESSAGE: &str = "Order received! (Not yet integrated with accounting)";

/// Acknowledgement for a confirmed order. Orders are not validated or
/// persisted; the id only gives operators something to correlate logs with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderAck {
    pub order_id: Uuid,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

impl OrderAck {
    pub fn new() -> Self {
        let (received_at, timestamp) = generate_timestamp();

        Self {
            order_id: Uuid::new_v7(timestamp),
            message: ORDER_ACK_MESSAGE.to_string(),
            received_at,
        }
    }
}

impl Default for OrderAck {
    fn default() -> Self {
        Self::new()
    }
}
