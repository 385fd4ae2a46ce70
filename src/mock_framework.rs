//! Test doubles for the actor layer.
//!
//! A mock client sends into a channel the test owns, so the test answers each
//! request itself. Each `expect_*` helper pops the next request and hands back
//! its contents plus the reply sender, or `None` on a different request kind.

use crate::actor_framework::{Entity, ResourceClient, ResourceRequest, Response};
use tokio::sync::mpsc;

type Requests<T> = mpsc::Receiver<ResourceRequest<T>>;

/// Client wired to `receiver` instead of a running actor.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, Requests<T>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

pub async fn expect_create<T: Entity>(receiver: &mut Requests<T>) -> Option<(T::CreatePayload, Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

pub async fn expect_get<T: Entity>(receiver: &mut Requests<T>) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

pub async fn expect_delete<T: Entity>(receiver: &mut Requests<T>) -> Option<(T::Id, Response<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

pub async fn expect_action<T: Entity>(receiver: &mut Requests<T>) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Order;

    #[tokio::test]
    async fn test_mock_answers_create_with_requested_id() {
        let (client, mut receiver) = create_mock_client::<Order>(10);

        let create_task = tokio::spawn(async move {
            client.create(crate::domain::OrderCreate { id: Some("A100".to_string()) }).await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.id.as_deref(), Some("A100"));
        responder.send(Ok("A100".to_string())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok("A100".to_string()));
    }
}
