use tracing::{debug, info, instrument};
use crate::actor_framework::ResourceClient;
use crate::domain::{Order, OrderCreate, OrderOperation, OrderState};
use crate::order_actor::OrderError;

/// Client for driving orders hosted by the order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl_client_new!(OrderClient, Order);
impl_client_methods!(OrderClient, Order, OrderError, get = get_order, delete = delete_order);
impl_operation_methods!(
    OrderClient,
    OrderError,
    pay => OrderOperation::Pay,
    ship => OrderOperation::Ship,
    deliver => OrderOperation::Deliver,
    cancel => OrderOperation::Cancel,
);

impl OrderClient {
    /// Creates an order, letting the actor assign its id when `id` is `None`.
    #[instrument(skip(self))]
    pub async fn create_order(&self, id: Option<String>) -> Result<String, OrderError> {
        debug!("Sending request");
        let order_id = self.inner.create(OrderCreate { id }).await?;
        info!(order_id = %order_id, "Order created");
        Ok(order_id)
    }

    #[instrument(skip(self))]
    pub async fn status(&self, id: String) -> Result<OrderState, OrderError> {
        debug!("Sending request");
        match self.inner.get(id.clone()).await? {
            Some(order) => Ok(order.state()),
            None => Err(OrderError::NotFound(id)),
        }
    }
}
