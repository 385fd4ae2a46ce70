use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate, OrderOperation, Outcome};

impl Entity for Order {
    type Id = String;
    type CreatePayload = OrderCreate;
    type Action = OrderOperation;
    type ActionResult = Outcome;

    fn requested_id(payload: &OrderCreate) -> Option<String> {
        payload.id.clone()
    }

    /// Creates a new Order in the `Created` state.
    ///
    /// # Errors
    /// Blank identifiers are refused.
    fn from_create(id: String, _payload: OrderCreate) -> Result<Self, String> {
        if id.trim().is_empty() {
            return Err("order id must not be blank".to_string());
        }
        Ok(Order::new(id))
    }

    /// Runs a lifecycle operation. Rejections come back as `Ok(Outcome::Rejected)`.
    fn handle_action(&mut self, action: OrderOperation) -> Result<Outcome, String> {
        Ok(self.perform(action))
    }
}
