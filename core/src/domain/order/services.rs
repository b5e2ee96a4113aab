use crate::domain::{
    chat::ports::LlmClient,
    common::services::Service,
    menu::ports::MenuCatalog,
    order::{entities::OrderAck, ports::OrderService},
};

impl<M, L> OrderService for Service<M, L>
where
    M: MenuCatalog,
    L: LlmClient,
{
    fn confirm_order(&self, payload: serde_json::Value) -> OrderAck {
        let ack = OrderAck::new();
        tracing::info!(order_id = %ack.order_id, order = %payload, "order received");
        ack
    }
}
