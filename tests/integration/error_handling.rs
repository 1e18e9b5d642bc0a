//! Failure normalization for `join` and `send`

use super::mock_server::{status, MockChatServer, Recorded};
use chat_rpc::protocol::{CommitResult, JoinResult};
use chat_rpc::{Error, JoinOutcome, JoinRequest, SendRequest, Token};

#[tokio::test]
async fn denied_join_is_access_denied() {
    let server = MockChatServer::builder().denying().build();

    let err = server
        .client()
        .join(JoinRequest::new("h:1", "alice", "wrong"))
        .await
        .unwrap_err();

    assert!(err.is_access_denied());
    assert!(err.status().is_none());
    assert_eq!(err.to_string(), "Access denied");
}

#[tokio::test]
async fn denied_join_outcome_is_a_value() {
    let server = MockChatServer::builder().denying().build();

    let outcome = server
        .client()
        .join_outcome(JoinRequest::new("h:1", "alice", "wrong"))
        .await
        .unwrap();
    assert_eq!(outcome, JoinOutcome::Denied);
}

#[tokio::test]
async fn join_transport_failure_passes_through() {
    let server = MockChatServer::builder()
        .on_join(|_| Err(status(tonic::Code::Internal, "boom")))
        .build();

    let err = server
        .client()
        .join(JoinRequest::new("h:1", "alice", "secret"))
        .await
        .unwrap_err();

    assert!(!err.is_access_denied());
    let status = err.status().expect("status");
    assert_eq!(status.code(), tonic::Code::Internal);
    assert_eq!(status.message(), "boom");
}

#[tokio::test]
async fn unknown_join_response_is_protocol_error() {
    let server = MockChatServer::builder()
        .on_join(|_| {
            Ok(JoinResult {
                response: 5,
                token: 77,
            })
        })
        .build();

    let err = server
        .client()
        .join(JoinRequest::new("h:1", "alice", "secret"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Protocol(_)));
}

#[tokio::test]
async fn connect_failure_skips_the_call() {
    let server = MockChatServer::builder()
        .accepting(1)
        .on_connect(|_| Some(status(tonic::Code::Unavailable, "connection refused")))
        .build();

    let err = server
        .client()
        .join(JoinRequest::new("h:1", "alice", "secret"))
        .await
        .unwrap_err();

    assert_eq!(err.status().map(|s| s.code()), Some(tonic::Code::Unavailable));
    assert_eq!(server.calls(), vec![Recorded::Connect("h:1".to_string())]);
}

#[tokio::test]
async fn send_failure_passes_through() {
    let server = MockChatServer::builder()
        .on_commit(|_| Err(status(tonic::Code::Cancelled, "Message too long")))
        .build();

    let err = server
        .client()
        .send(SendRequest::new("h:1", "x".repeat(80), Token::new(1)))
        .await
        .unwrap_err();

    let status = err.status().expect("status");
    assert_eq!(status.code(), tonic::Code::Cancelled);
    assert_eq!(status.message(), "Message too long");
}

#[tokio::test]
async fn send_acknowledgement_is_returned_unmodified() {
    let server = MockChatServer::builder()
        .on_commit(|msg| Ok(CommitResult { time: msg.token * 10 }))
        .build();

    let ack = server
        .client()
        .send(SendRequest::new("h:1", "hello", Token::new(4)))
        .await
        .unwrap();
    assert_eq!(ack, CommitResult { time: 40 });
}
