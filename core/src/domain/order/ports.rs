use crate::domain::order::entities::OrderAck;

/// Service trait for order confirmation. Currently a logged no-op
/// acknowledgement; fulfillment is out of scope.
pub trait OrderService: Send + Sync {
    fn confirm_order(&self, payload: serde_json::Value) -> OrderAck;
}
