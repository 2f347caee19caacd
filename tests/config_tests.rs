use arena_agent::Config;

#[test]
fn defaults_match_the_standard_deployment() {
    let config = Config::default();

    assert_eq!(config.agent.name, "PerimeterSniper");
    assert_eq!(config.agent.ip, "127.0.0.1");
    assert_eq!(config.agent.port, 20010);
    assert_eq!(config.server.port, 20000);
    assert_eq!(config.join.retries, 300);
    assert_eq!(config.join.delay_ms, 1000);
    assert_eq!(config.join.delay_multiplier, 1.0);
    assert_eq!(config.transport.reply_timeout_ms, 2000);
}

#[tokio::test]
async fn from_file_reads_all_sections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    tokio::fs::write(
        &path,
        r#"
[agent]
name = "TestBot"
ip = "0.0.0.0"
port = 21000

[server]
ip = "192.168.1.10"
port = 20001

[join]
retries = 5
delay_ms = 100
delay_multiplier = 2.0

[transport]
reply_timeout_ms = 500
"#,
    )
    .await
    .unwrap();

    let config = Config::from_file(&path).await.unwrap();

    assert_eq!(config.agent.name, "TestBot");
    assert_eq!(config.agent.port, 21000);
    assert_eq!(config.server.ip, "192.168.1.10");
    assert_eq!(config.server.port, 20001);
    assert_eq!(config.join.retries, 5);
    assert_eq!(config.join.delay_multiplier, 2.0);
    assert_eq!(config.transport.reply_timeout_ms, 500);
}

#[tokio::test]
async fn from_file_rejects_incomplete_configuration() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    tokio::fs::write(&path, "[agent]\nname = \"TestBot\"\n")
        .await
        .unwrap();

    assert!(Config::from_file(&path).await.is_err());
}
