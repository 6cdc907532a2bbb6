//! Integration tests for the Client API surface.

use crocgodyl::{Client, CrocError, PowerSignal};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn server_attributes(identifier: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "server_owner": true,
        "identifier": identifier,
        "uuid": "1a7ce997-259b-452e-8b4e-cecc464142ca",
        "internal_id": 5,
        "name": name,
        "node": "node-1",
        "sftp_details": {"ip": "203.0.113.1", "port": 2022},
        "description": "",
        "limits": {
            "memory": 2048, "swap": 0, "disk": 10240,
            "io": 500, "cpu": 200, "threads": null, "oom_disabled": true
        },
        "invocation": "java -jar server.jar",
        "docker_image": "ghcr.io/pterodactyl/yolks:java_17",
        "egg_features": [],
        "feature_limits": {"allocations": 2, "backups": 3, "databases": 1},
        "status": null,
        "is_suspended": false,
        "is_installing": false,
        "is_transferring": false,
        "is_node_under_maintenance": false
    })
}

#[test]
fn test_construction_validation() {
    let err = Client::new("https://p", "").unwrap_err();
    assert_eq!(err.to_string(), "a valid client api key is required");
}

#[tokio::test]
async fn test_list_servers_at_scope_root() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/client"))
        .and(header("Authorization", "Bearer client_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "list",
            "data": [
                {"object": "server", "attributes": server_attributes("abc123", "survival")},
                {"object": "server", "attributes": server_attributes("def456", "creative")}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "client_key").unwrap();
    let servers = client.servers().list().await.unwrap();

    assert_eq!(servers.len(), 2);
    assert_eq!(servers[0].identifier, "abc123");
    assert_eq!(servers[1].name, "creative");
}

#[tokio::test]
async fn test_get_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/client/servers/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "server",
            "attributes": server_attributes("abc123", "survival")
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "k").unwrap();
    let server = client.servers().get("abc123").await.unwrap();

    assert_eq!(server.name, "survival");
    assert_eq!(server.sftp.port, 2022);
    assert!(server.server_owner);
}

#[tokio::test]
async fn test_websocket_ticket() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/client/servers/abc123/websocket"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "socket": "wss://node/ws",
                "token": "t0ken"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "k").unwrap();
    let auth = client.servers().websocket("abc123").await.unwrap();

    assert_eq!(auth.socket, "wss://node/ws");
    assert_eq!(auth.token, "t0ken");
}

#[tokio::test]
async fn test_resources() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/client/servers/abc123/resources"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "stats",
            "attributes": {
                "current_state": "running",
                "is_suspended": false,
                "resources": {
                    "memory_bytes": 588701696,
                    "disk_bytes": 130156361,
                    "cpu_absolute": 12.5,
                    "network_rx_bytes": 694220,
                    "network_tx_bytes": 337090,
                    "uptime": 275033
                }
            }
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "k").unwrap();
    let res = client.servers().resources("abc123").await.unwrap();

    assert_eq!(res.state, "running");
    assert_eq!(res.usage.memory_bytes, 588701696);
    assert!((res.usage.cpu_absolute - 12.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_send_command() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/client/servers/abc123/command"))
        .and(body_json(serde_json::json!({"command": "say hello"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "k").unwrap();
    client.servers().send_command("abc123", "say hello").await.unwrap();
}

#[tokio::test]
async fn test_power_signal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/client/servers/abc123/power"))
        .and(body_json(serde_json::json!({"signal": "restart"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "k").unwrap();
    client
        .servers()
        .set_power_state("abc123", PowerSignal::Restart)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_list_databases() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/client/servers/abc123/databases"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "list",
            "data": [
                {"object": "server_database", "attributes": {
                    "id": "bEY4yAOd",
                    "name": "s5_minecraft",
                    "username": "u5_hCmka",
                    "host": {"address": "127.0.0.1", "port": 3306},
                    "connections_from": "%",
                    "max_connections": 0
                }}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "k").unwrap();
    let databases = client.databases().list("abc123").await.unwrap();

    assert_eq!(databases.len(), 1);
    assert_eq!(databases[0].id, "bEY4yAOd");
    assert_eq!(databases[0].host.port, 3306);
}

#[tokio::test]
async fn test_create_and_rotate_database() {
    let mock_server = MockServer::start().await;

    let db = serde_json::json!({
        "id": "bEY4yAOd",
        "name": "s5_stats",
        "username": "u5_hCmka",
        "host": {"address": "127.0.0.1", "port": 3306},
        "connections_from": "%",
        "max_connections": 0
    });

    Mock::given(method("POST"))
        .and(path("/api/client/servers/abc123/databases"))
        .and(body_json(serde_json::json!({"remote": "%", "database": "stats"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "server_database",
            "attributes": db
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/client/servers/abc123/databases/bEY4yAOd/rotate-password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "server_database",
            "attributes": db
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "k").unwrap();

    let created = client.databases().create("abc123", "%", "stats").await.unwrap();
    assert_eq!(created.name, "s5_stats");

    let rotated = client
        .databases()
        .rotate_password("abc123", "bEY4yAOd")
        .await
        .unwrap();
    assert_eq!(rotated.id, "bEY4yAOd");
}

#[tokio::test]
async fn test_allocations_via_relationships() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/client/servers/abc123"))
        .and(wiremock::matchers::query_param("include", "allocations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "server",
            "attributes": {
                "identifier": "abc123",
                "relationships": {
                    "allocations": {
                        "object": "list",
                        "data": [
                            {"object": "allocation", "attributes": {
                                "id": 1,
                                "ip": "203.0.113.1",
                                "ip_alias": null,
                                "port": 25565,
                                "notes": null,
                                "is_default": true
                            }},
                            {"object": "allocation", "attributes": {
                                "id": 2,
                                "ip": "203.0.113.1",
                                "ip_alias": "game.example",
                                "port": 25566,
                                "notes": "proxy",
                                "is_default": false
                            }}
                        ]
                    }
                }
            }
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "k").unwrap();
    let allocations = client.network().allocations("abc123").await.unwrap();

    assert_eq!(allocations.len(), 2);
    assert!(allocations[0].is_default);
    assert_eq!(allocations[1].ip_alias.as_deref(), Some("game.example"));
}

#[tokio::test]
async fn test_startup_meta_and_variables() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/client/servers/abc123/startup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "list",
            "data": [
                {"object": "egg_variable", "attributes": {
                    "name": "Server Jar File",
                    "description": "The jar to boot.",
                    "env_variable": "SERVER_JARFILE",
                    "default_value": "server.jar",
                    "server_value": "paper.jar",
                    "is_editable": true,
                    "rules": "required|string|max:20"
                }}
            ],
            "meta": {
                "startup_command": "java -jar paper.jar",
                "docker_images": {"Java 17": "ghcr.io/pterodactyl/yolks:java_17"},
                "raw_startup_command": "java -jar {{SERVER_JARFILE}}"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "k").unwrap();

    let meta = client.startup().info("abc123").await.unwrap();
    assert_eq!(meta.startup_command, "java -jar paper.jar");
    assert_eq!(meta.raw_startup_command, "java -jar {{SERVER_JARFILE}}");

    let variables = client.startup().variables("abc123").await.unwrap();
    assert_eq!(variables.len(), 1);
    assert_eq!(variables[0].server_value.as_deref(), Some("paper.jar"));
}

#[tokio::test]
async fn test_set_variable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/client/servers/abc123/startup/variable"))
        .and(body_json(serde_json::json!({"key": "SERVER_JARFILE", "value": "paper.jar"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "egg_variable",
            "attributes": {
                "name": "Server Jar File",
                "description": "The jar to boot.",
                "env_variable": "SERVER_JARFILE",
                "default_value": "server.jar",
                "server_value": "paper.jar",
                "is_editable": true,
                "rules": "required|string|max:20"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "k").unwrap();
    let variable = client
        .startup()
        .set_variable("abc123", "SERVER_JARFILE", "paper.jar")
        .await
        .unwrap();

    assert_eq!(variable.server_value.as_deref(), Some("paper.jar"));
}

#[tokio::test]
async fn test_settings() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/client/servers/abc123/settings/docker-image"))
        .and(body_json(serde_json::json!({
            "docker_image": "ghcr.io/pterodactyl/yolks:java_21"
        })))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/client/servers/abc123/settings/reinstall"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "k").unwrap();
    client
        .settings()
        .set_docker_image("abc123", "ghcr.io/pterodactyl/yolks:java_21")
        .await
        .unwrap();
    client.settings().reinstall("abc123").await.unwrap();
}

#[tokio::test]
async fn test_malformed_success_body_surfaces_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/client/servers/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "k").unwrap();
    let err = client.servers().get("abc123").await.unwrap_err();
    assert!(matches!(err, CrocError::Json(_)));
    assert!(err.as_api().is_none());
}
