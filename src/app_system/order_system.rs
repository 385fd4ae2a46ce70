use tracing::{error, info};
use crate::actor_framework::ResourceActor;
use crate::app_system::SystemConfig;
use crate::clients::OrderClient;
use crate::domain::Order;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Hosts the order actor.
///
/// Responsible for starting the actor, handing out its client, and shutting down.
pub struct OrderSystem {
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    pub fn new() -> Self {
        Self::with_config(SystemConfig::default())
    }

    pub fn with_config(config: SystemConfig) -> Self {
        info!(buffer_size = config.buffer_size, id_prefix = %config.id_prefix, "Starting order system");

        let order_id_counter = Arc::new(AtomicU64::new(1));
        let prefix = config.id_prefix;
        let next_order_id = move || {
            let id = order_id_counter.fetch_add(1, Ordering::SeqCst);
            format!("{}_{}", prefix, id)
        };

        let (order_actor, order_resource_client) =
            ResourceActor::<Order>::new(config.buffer_size, next_order_id);
        let order_client = OrderClient::new(order_resource_client);
        let order_handle = tokio::spawn(order_actor.run());

        Self {
            order_client,
            handles: vec![order_handle],
        }
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        // The actor stops once every client clone is dropped.
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}
