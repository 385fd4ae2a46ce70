mod domain;
mod clients;

mod app_system;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;

mod actor_framework;
mod order_actor;

use tracing::{debug, error, info, Instrument};
use crate::domain::Order;
use crate::order_actor::OrderError;
use crate::app_system::{OrderSystem, SystemConfig, setup_tracing};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting order lifecycle demo");

    // Standalone orders, driven directly
    let span = tracing::info_span!("standalone_orders");
    span.in_scope(|| {
        let mut order = Order::new("A100");
        info!(order_id = order.id(), status = order.status(), "Initial status");
        if !order.pay().is_transition() {
            error!(order_id = order.id(), "New order refused payment");
        }
        order.ship();
        order.deliver();
        order.cancel();
        info!(order_id = order.id(), status = order.status(), terminal = order.state().is_terminal(), "Final status");

        let mut order = Order::new("B1");
        order.cancel();
        order.pay();
        info!(order_id = order.id(), status = order.status(), "Final status");
    });

    // Hosted orders, driven through the actor
    let config = SystemConfig::default().with_buffer_size(16).with_id_prefix("order");
    let system = OrderSystem::with_config(config);
    let client = system.order_client.clone();

    let span = tracing::info_span!("hosted_orders");
    let result = async {
        let id = client.create_order(None).await?;
        client.pay(id.clone()).await?;
        if client.pay(id.clone()).await?.is_rejected() {
            info!(order_id = %id, "Duplicate payment ignored");
        }
        client.ship(id.clone()).await?;
        client.cancel(id.clone()).await?;
        let delivered = client.deliver(id.clone()).await?;

        let state = delivered.state();
        let permitted: Vec<String> = state.permitted_operations().iter().map(|op| op.to_string()).collect();
        info!(order_id = %id, %state, ?permitted, "Hosted order processed");

        if let Some(order) = client.get_order(id.clone()).await? {
            debug!(order_id = order.id(), status = order.status(), "Hosted order snapshot");
        }
        client.delete_order(id.clone()).await?;
        Ok::<_, OrderError>(client.status(id).await.is_err())
    }
    .instrument(span)
    .await;

    match result {
        Ok(discarded) => info!(discarded, "Hosted order discarded"),
        Err(e) => error!(error = %e, "Hosted order failed"),
    }

    // Shutdown system gracefully
    drop(client);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
