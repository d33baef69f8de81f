/// Generates an async client method that sends `$request::$variant` with the
/// given parameters plus a oneshot `respond_to`, and awaits the reply.
#[macro_export]
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| <$error_type>::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| <$error_type>::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}

/// Generates `new(sender)` and a `shutdown()` that sends `$request::Shutdown`.
#[macro_export]
macro_rules! impl_client_lifecycle {
    ($client:ident, $request:ident, $error_type:ty) => {
        impl $client {
            pub fn new(sender: tokio::sync::mpsc::Sender<$request>) -> Self {
                Self { sender }
            }

            #[tracing::instrument(skip(self))]
            pub async fn shutdown(&self) -> Result<(), $error_type> {
                tracing::debug!("Sending shutdown request");
                self.sender
                    .send($request::Shutdown)
                    .await
                    .map_err(|_| <$error_type>::ActorCommunicationError("Actor closed".to_string()))
            }
        }
    };
}
