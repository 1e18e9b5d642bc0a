//! Low-level tonic stub for `chat.Chat`.
//!
//! Mirrors the client `tonic-build` would generate for `proto/chat.proto`.
//! Higher layers go through [`crate::transport::ChatTransport`] instead.

use super::{After, ChatMessage, CommitResult, JoinResult, Member, NewChatMessage, SERVICE_NAME};
use tonic::codegen::{http, Body, Bytes, GrpcMethod, StdError};

#[derive(Debug, Clone)]
pub struct ChatServiceClient<T> {
    inner: tonic::client::Grpc<T>,
}

impl<T> ChatServiceClient<T>
where
    T: tonic::client::GrpcService<tonic::body::BoxBody>,
    T::Error: Into<StdError>,
    T::ResponseBody: Body<Data = Bytes> + Send + 'static,
    <T::ResponseBody as Body>::Error: Into<StdError> + Send,
{
    pub fn new(inner: T) -> Self {
        Self {
            inner: tonic::client::Grpc::new(inner),
        }
    }

    async fn ready(&mut self) -> Result<(), tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            let e: StdError = e.into();
            tonic::Status::unknown(format!("Service was not ready: {}", e))
        })
    }

    fn method<M>(request: impl tonic::IntoRequest<M>, method: &'static str) -> tonic::Request<M> {
        let mut req = request.into_request();
        req.extensions_mut()
            .insert(GrpcMethod::new(SERVICE_NAME, method));
        req
    }

    pub async fn join(
        &mut self,
        request: impl tonic::IntoRequest<Member>,
    ) -> Result<tonic::Response<JoinResult>, tonic::Status> {
        self.ready().await?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/chat.Chat/Join");
        self.inner
            .unary(Self::method(request, "Join"), path, codec)
            .await
    }

    pub async fn commit(
        &mut self,
        request: impl tonic::IntoRequest<NewChatMessage>,
    ) -> Result<tonic::Response<CommitResult>, tonic::Status> {
        self.ready().await?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/chat.Chat/Commit");
        self.inner
            .unary(Self::method(request, "Commit"), path, codec)
            .await
    }

    pub async fn chat_log(
        &mut self,
        request: impl tonic::IntoRequest<After>,
    ) -> Result<tonic::Response<tonic::codec::Streaming<ChatMessage>>, tonic::Status> {
        self.ready().await?;
        let codec = tonic::codec::ProstCodec::default();
        let path = http::uri::PathAndQuery::from_static("/chat.Chat/ChatLog");
        self.inner
            .server_streaming(Self::method(request, "ChatLog"), path, codec)
            .await
    }
}
