#[cfg(test)]
mod tests {
    use crate::actor_framework::FrameworkError;
    use crate::app_system::{OrderSystem, SystemConfig};
    use crate::clients::OrderClient;
    use crate::domain::{Order, OrderOperation, OrderState, Outcome};
    use crate::mock_framework::{create_mock_client, expect_action, expect_create, expect_delete, expect_get};
    use crate::order_actor::OrderError;

    #[tokio::test]
    async fn test_client_sends_lifecycle_requests() {
        let (inner, mut order_rx) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(inner);

        let task = tokio::spawn(async move {
            let id = order_client.create_order(None).await?;
            let paid = order_client.pay(id.clone()).await?;
            let state = order_client.status(id.clone()).await?;
            order_client.delete_order(id).await?;
            Ok::<_, OrderError>((paid, state))
        });

        let (payload, responder) = expect_create(&mut order_rx).await.expect("Expected Order Create");
        assert_eq!(payload.id, None);
        responder.send(Ok("order_1".to_string())).unwrap();

        let (id, action, responder) = expect_action(&mut order_rx).await.expect("Expected Order Action");
        assert_eq!(id, "order_1");
        assert_eq!(action, OrderOperation::Pay);
        let mut order = Order::new("order_1");
        responder.send(Ok(order.pay())).unwrap();

        let (id, responder) = expect_get(&mut order_rx).await.expect("Expected Order Get");
        assert_eq!(id, "order_1");
        responder.send(Ok(Some(order))).unwrap();

        let (id, responder) = expect_delete(&mut order_rx).await.expect("Expected Order Delete");
        assert_eq!(id, "order_1");
        responder.send(Ok(())).unwrap();

        let (paid, state) = task.await.unwrap().unwrap();
        assert!(paid.is_transition());
        assert_eq!(state, OrderState::Paid);
    }

    #[tokio::test]
    async fn test_client_maps_framework_errors() {
        let (inner, mut order_rx) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(inner);

        let task = tokio::spawn(async move { order_client.ship("missing".to_string()).await });

        let (_, _, responder) = expect_action(&mut order_rx).await.expect("Expected Order Action");
        responder.send(Err(FrameworkError::NotFound("missing".to_string()))).unwrap();

        assert_eq!(task.await.unwrap(), Err(OrderError::NotFound("missing".to_string())));
    }

    #[tokio::test]
    async fn test_full_lifecycle_through_system() {
        let system = OrderSystem::new();
        let client = &system.order_client;

        let id = client.create_order(Some("A100".to_string())).await.unwrap();
        assert_eq!(id, "A100");

        assert!(client.pay(id.clone()).await.unwrap().is_transition());
        assert!(client.ship(id.clone()).await.unwrap().is_transition());
        assert!(client.deliver(id.clone()).await.unwrap().is_transition());

        let late = client.cancel(id.clone()).await.unwrap();
        assert!(late.is_rejected());
        assert_eq!(client.status(id.clone()).await.unwrap(), OrderState::Delivered);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_generated_ids_duplicates_and_blank_ids() {
        let system = OrderSystem::with_config(SystemConfig::default().with_id_prefix("po"));
        let client = &system.order_client;

        assert_eq!(client.create_order(None).await.unwrap(), "po_1");
        assert_eq!(client.create_order(None).await.unwrap(), "po_2");

        client.create_order(Some("B1".to_string())).await.unwrap();
        assert_eq!(
            client.create_order(Some("B1".to_string())).await,
            Err(OrderError::AlreadyExists("B1".to_string()))
        );
        assert!(matches!(
            client.create_order(Some(" ".to_string())).await,
            Err(OrderError::InvalidId(_))
        ));

        assert!(client.cancel("B1".to_string()).await.unwrap().is_transition());
        let refused = client.pay("B1".to_string()).await.unwrap();
        assert_eq!(refused.state(), OrderState::Cancelled);
        assert_eq!(refused.to_string(), "cannot pay: order cancelled");

        client.delete_order("B1".to_string()).await.unwrap();
        assert_eq!(client.get_order("B1".to_string()).await.unwrap(), None);
        assert_eq!(
            client.status("B1".to_string()).await,
            Err(OrderError::NotFound("B1".to_string()))
        );

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_concurrent_payments_transition_once() {
        let system = OrderSystem::new();
        let id = system.order_client.create_order(None).await.unwrap();

        let mut tasks = Vec::new();
        for _ in 0..16 {
            let client = system.order_client.clone();
            let id = id.clone();
            tasks.push(tokio::spawn(async move { client.pay(id).await }));
        }

        let mut outcomes = Vec::new();
        for task in tasks {
            outcomes.push(task.await.unwrap().unwrap());
        }

        assert_eq!(outcomes.iter().filter(|o| o.is_transition()).count(), 1);
        assert!(outcomes
            .iter()
            .filter(|o| o.is_rejected())
            .all(|o| matches!(o, Outcome::Rejected { reason: "already paid", .. })));
        assert_eq!(system.order_client.status(id).await.unwrap(), OrderState::Paid);

        system.shutdown().await.unwrap();
    }
}
