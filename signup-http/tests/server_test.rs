use signup_core::RegistryConfig;
use signup_http::server::{ServerConfig, start_server};
use std::net::TcpListener;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::timeout;

#[test]
fn test_server_config_default() {
    let config = ServerConfig::default();

    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 3000);
    assert_eq!(config.static_dir, PathBuf::from("static"));
    assert!(config.registry_config.is_none());
}

#[test]
fn test_server_address_parsing() {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 8081,
        ..Default::default()
    };

    let addr = config.socket_addr().unwrap();
    assert_eq!(addr.ip().to_string(), "127.0.0.1");
    assert_eq!(addr.port(), 8081);
}

#[test]
fn test_server_address_invalid() {
    let config = ServerConfig {
        host: "not a host".to_string(),
        ..Default::default()
    };
    assert!(config.socket_addr().is_err());
}

#[tokio::test]
async fn test_server_rejects_invalid_seed() {
    let seed = r#"{"activities": [
        {"name": "Chess Club", "description": "d", "schedule": "s"}
    ]}"#;
    let mut registry_config = RegistryConfig::from_str(seed).unwrap();
    registry_config
        .activities
        .push(registry_config.activities[0].clone());

    let config = ServerConfig {
        port: find_available_port().expect("Failed to find an available port"),
        registry_config: Some(registry_config),
        ..Default::default()
    };

    let result = timeout(Duration::from_secs(1), start_server(config)).await;
    assert!(matches!(result, Ok(Err(_))), "startup should fail on duplicate seed");
}

#[tokio::test]
async fn test_server_startup() {
    let port = find_available_port().expect("Failed to find an available port");
    let config = ServerConfig {
        port,
        ..Default::default()
    };

    let server = tokio::spawn(start_server(config.clone()));
    tokio::time::sleep(Duration::from_millis(200)).await;

    let client = reqwest::Client::new();
    let base = format!("http://{}:{}", config.host, config.port);

    let response = client
        .get(format!("{}/activities", base))
        .timeout(Duration::from_secs(1))
        .send()
        .await
        .expect("Failed to connect to the server");
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body.get("Chess Club").is_some());

    let response = client
        .post(format!("{}/activities/Chess%20Club/signup", base))
        .query(&[("email", "testuser@example.com")])
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/activities/Chess%20Club/unregister", base))
        .json(&serde_json::json!({ "email": "testuser@example.com" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    server.abort();
}

// Helper function to find an available port
fn find_available_port() -> Option<u16> {
    // Try to bind to port 0, which will assign a random available port
    if let Ok(listener) = TcpListener::bind("127.0.0.1:0") {
        return Some(listener.local_addr().unwrap().port());
    }
    None
}
