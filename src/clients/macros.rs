#[macro_export]
macro_rules! impl_client_methods {
    ($client_name:ident, $entity:ty, $error:ty, get = $get:ident, delete = $delete:ident) => {
        impl $client_name {
            #[tracing::instrument(skip(self))]
            pub async fn $get(&self, id: String) -> Result<Option<$entity>, $error> {
                tracing::debug!("Sending request");
                self.inner.get(id).await.map_err(<$error>::from)
            }

            #[tracing::instrument(skip(self))]
            pub async fn $delete(&self, id: String) -> Result<(), $error> {
                tracing::debug!("Sending request");
                self.inner.delete(id).await.map_err(<$error>::from)
            }
        }
    };
}

/// Generates one client method per lifecycle operation, each forwarding the
/// operation to the actor as an action.
#[macro_export]
macro_rules! impl_operation_methods {
    ($client_name:ident, $error:ty, $($method:ident => $operation:expr),+ $(,)?) => {
        impl $client_name {
            $(
                #[tracing::instrument(skip(self))]
                pub async fn $method(&self, id: String) -> Result<$crate::domain::Outcome, $error> {
                    tracing::debug!("Sending request");
                    self.inner.perform_action(id, $operation).await.map_err(<$error>::from)
                }
            )+
        }
    };
}

#[macro_export]
macro_rules! impl_client_new {
    ($client_name:ident, $entity:ty) => {
        impl $client_name {
            pub fn new(inner: $crate::actor_framework::ResourceClient<$entity>) -> Self {
                Self { inner }
            }
        }
    };
}
