use std::time::Duration;

use serde_json::Value;
use tokio::net::UdpSocket;
use tokio::time::sleep;

use arena_agent::adapters::outbound::UdpArenaClient;
use arena_agent::domains::arena::ArenaClient;
use arena_agent::Config;

async fn bind_client(server_port: u16, reply_timeout_ms: u64) -> UdpArenaClient {
    let mut config = Config::default();
    config.agent.ip = "127.0.0.1".to_string();
    config.agent.port = 0;
    config.server.ip = "127.0.0.1".to_string();
    config.server.port = server_port;
    config.transport.reply_timeout_ms = reply_timeout_ms;
    UdpArenaClient::bind(&config).await.unwrap()
}

#[tokio::test]
async fn location_round_trips_through_the_socket() {
    let server = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let port = server.local_addr().unwrap().port();
    let client = bind_client(port, 1000).await;

    let server_task = tokio::spawn(async move {
        let mut buf = [0u8; 4096];
        let (len, peer) = server.recv_from(&mut buf).await.unwrap();
        let request: Value = serde_json::from_slice(&buf[..len]).unwrap();
        assert_eq!(request["type"], "getLocationRequest");
        server
            .send_to(br#"{"type": "getLocationReply", "x": 10.0, "y": 500.0}"#, peer)
            .await
            .unwrap();
    });

    let pose = client.location().await.unwrap();
    assert_eq!(pose.x, 10.0);
    assert_eq!(pose.y, 500.0);
    server_task.await.unwrap();
}

#[tokio::test]
async fn late_reply_from_a_timed_out_request_is_not_matched_to_the_next_one() {
    let server = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let port = server.local_addr().unwrap().port();
    let client = bind_client(port, 100).await;

    let server_task = tokio::spawn(async move {
        let mut buf = [0u8; 4096];

        // Answer the first request only after the client has given up on it.
        let (len, peer) = server.recv_from(&mut buf).await.unwrap();
        let request: Value = serde_json::from_slice(&buf[..len]).unwrap();
        assert_eq!(request["type"], "getLocationRequest");
        sleep(Duration::from_millis(300)).await;
        server
            .send_to(br#"{"type": "getLocationReply", "x": 1.0, "y": 2.0}"#, peer)
            .await
            .unwrap();

        // The second request must still be answered with its own reply.
        let (len, peer) = server.recv_from(&mut buf).await.unwrap();
        let request: Value = serde_json::from_slice(&buf[..len]).unwrap();
        assert_eq!(request["type"], "getCanonRequest");
        server
            .send_to(br#"{"type": "getCanonReply", "shellInProgress": false}"#, peer)
            .await
            .unwrap();
    });

    // First exchange times out; its reply arrives later and sits on the
    // socket until the next exchange discards it.
    assert!(client.location().await.is_err());
    sleep(Duration::from_millis(400)).await;

    let canon = client.canon().await.unwrap();
    assert!(!canon.shell_in_progress);

    let stats = client.stats();
    assert_eq!(stats.sent, 2);
    assert_eq!(stats.errors, 1);
    server_task.await.unwrap();
}
