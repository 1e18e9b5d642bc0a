//! History retrieval through `ChatClient::fetch_messages`

use super::mock_server::{record, status, MockChatServer, Recorded};
use chat_rpc::protocol::After;
use chat_rpc::types::ChatLogEvent;
use chat_rpc::{Error, FetchRequest, Token};

#[tokio::test]
async fn history_is_returned_in_delivery_order() {
    let server = MockChatServer::builder()
        .on_chat_log(|_| {
            Ok(vec![
                ChatLogEvent::Data(record(2, "bob", "second")),
                ChatLogEvent::Data(record(1, "alice", "first")),
                ChatLogEvent::Data(record(2, "bob", "second")),
                ChatLogEvent::End,
            ])
        })
        .build();

    let records = server
        .client()
        .fetch_messages(FetchRequest::new("h:1", Token::new(3)))
        .await
        .unwrap();

    // No sorting, no dedup.
    let values: Vec<_> = records.iter().map(|r| r.value.as_str()).collect();
    assert_eq!(values, vec!["second", "first", "second"]);
}

#[tokio::test]
async fn empty_history_resolves_empty() {
    let server = MockChatServer::builder()
        .on_chat_log(|_| Ok(vec![ChatLogEvent::End]))
        .build();

    let records = server
        .client()
        .fetch_messages(FetchRequest::new("h:1", Token::new(3)))
        .await
        .unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn query_carries_cursor_and_token_verbatim() {
    let server = MockChatServer::builder()
        .on_chat_log(|_| Ok(vec![ChatLogEvent::End]))
        .build();

    server
        .client()
        .fetch_messages(FetchRequest::new("h:1", Token::new(u64::MAX)).after(41))
        .await
        .unwrap();

    assert_eq!(
        server.calls(),
        vec![
            Recorded::Connect("h:1".to_string()),
            Recorded::ChatLog(After {
                token: u64::MAX,
                value: 41,
            }),
        ]
    );
}

#[tokio::test]
async fn close_before_end_is_stream_closed() {
    let server = MockChatServer::builder()
        .on_chat_log(|_| {
            Ok(vec![
                ChatLogEvent::Data(record(1, "alice", "hi")),
                ChatLogEvent::Close,
            ])
        })
        .build();

    let err = server
        .client()
        .fetch_messages(FetchRequest::new("h:1", Token::new(1)))
        .await
        .unwrap_err();
    assert!(err.is_stream_closed());
    assert!(!err.is_transport());
}

#[tokio::test]
async fn exhausted_source_without_end_is_stream_closed() {
    let server = MockChatServer::builder()
        .on_chat_log(|_| Ok(vec![ChatLogEvent::Data(record(1, "alice", "hi"))]))
        .build();

    let err = server
        .client()
        .fetch_messages(FetchRequest::new("h:1", Token::new(1)))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::StreamClosed));
}

#[tokio::test]
async fn stream_error_after_data_rejects_with_that_error() {
    let server = MockChatServer::builder()
        .on_chat_log(|_| {
            Ok(vec![
                ChatLogEvent::Data(record(1, "alice", "hi")),
                ChatLogEvent::Data(record(2, "bob", "yo")),
                ChatLogEvent::Error(status(tonic::Code::Unauthenticated, "User does not exist")),
                ChatLogEvent::End,
            ])
        })
        .build();

    let err = server
        .client()
        .fetch_messages(FetchRequest::new("h:1", Token::new(1)))
        .await
        .unwrap_err();

    let status = err.status().expect("transport status");
    assert_eq!(status.code(), tonic::Code::Unauthenticated);
    assert_eq!(status.message(), "User does not exist");
}

#[tokio::test]
async fn spurious_events_after_end_do_not_change_result() {
    let server = MockChatServer::builder()
        .on_chat_log(|_| {
            Ok(vec![
                ChatLogEvent::Data(record(1, "alice", "hello")),
                ChatLogEvent::End,
                ChatLogEvent::Data(record(2, "mallory", "late")),
                ChatLogEvent::Close,
                ChatLogEvent::Error(status(tonic::Code::Internal, "late")),
            ])
        })
        .build();

    let records = server
        .client()
        .fetch_messages(FetchRequest::new("h:1", Token::new(1)))
        .await
        .unwrap();
    assert_eq!(records, vec![record(1, "alice", "hello")]);
}

#[tokio::test]
async fn failure_to_open_stream_is_transport_error() {
    let server = MockChatServer::builder()
        .on_chat_log(|_| Err(status(tonic::Code::Unavailable, "down")))
        .build();

    let err = server
        .client()
        .fetch_messages(FetchRequest::new("h:1", Token::new(1)))
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.code()), Some(tonic::Code::Unavailable));
}
