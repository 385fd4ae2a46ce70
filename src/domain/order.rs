use tracing::{info, warn};

use super::state::{OrderOperation, OrderState, Outcome};

/// Represents a customer order moving through its lifecycle.
///
/// The state is private: it only changes through [`Order::pay`],
/// [`Order::ship`], [`Order::deliver`] and [`Order::cancel`].
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: String,
    state: OrderState,
}

/// Payload for creating a new order.
///
/// When `id` is `None` the owning actor assigns one.
#[derive(Debug, Clone, Default)]
pub struct OrderCreate {
    pub id: Option<String>,
}

impl Order {
    /// Creates an order in the `Created` state.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: OrderState::Created,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> OrderState {
        self.state
    }

    /// Display tag of the current state, e.g. `"PAID"`.
    pub fn status(&self) -> &'static str {
        self.state.as_str()
    }

    pub fn pay(&mut self) -> Outcome {
        self.perform(OrderOperation::Pay)
    }

    pub fn ship(&mut self) -> Outcome {
        self.perform(OrderOperation::Ship)
    }

    pub fn deliver(&mut self) -> Outcome {
        self.perform(OrderOperation::Deliver)
    }

    pub fn cancel(&mut self) -> Outcome {
        self.perform(OrderOperation::Cancel)
    }

    /// Forwards `operation` to the current state and commits the result.
    pub fn perform(&mut self, operation: OrderOperation) -> Outcome {
        let outcome = self.state.apply(operation);
        match outcome {
            Outcome::Transitioned { from, to, .. } => {
                self.state = to;
                info!(order_id = %self.id, %operation, %from, %to, "{}", outcome);
            }
            Outcome::Rejected { state, operation, .. } => {
                warn!(order_id = %self.id, %operation, %state, "{}", outcome);
            }
        }
        outcome
    }
}
