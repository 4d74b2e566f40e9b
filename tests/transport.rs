//
//  harbor-cli
//  tests/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use mockito::{Matcher, Server};
use serde_json::json;

use harbor_cli::api::common::ListParams;
use harbor_cli::api::{ApiError, ClientConfig, HarborClient, RequestSpec};

const ADMIN_AUTH: &str = "Basic YWRtaW46SGFyYm9yMTIzNDU=";

fn client_for(server: &Server) -> HarborClient {
    HarborClient::new(
        ClientConfig::new("admin", "Harbor12345")
            .with_base_address(format!("{}/api/v2.0", server.url())),
    )
    .unwrap()
}

#[tokio::test]
async fn test_get_sends_query_and_default_headers() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2.0/projects")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "name=~demo".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("page_size".into(), "10".into()),
        ]))
        .match_header("authorization", ADMIN_AUTH)
        .match_header("content-type", "application/json")
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"project_id":1,"name":"demo"}]"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let params = ListParams::default().query("name=~demo");
    let spec = RequestSpec::get("/projects").query(params.to_query());
    let value = client.execute(spec).await.unwrap();

    assert_eq!(value, json!([{"project_id": 1, "name": "demo"}]));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_caller_cannot_replace_authorization() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2.0/users/current")
        .match_header("authorization", ADMIN_AUTH)
        .match_header("accept", "application/vnd.custom+json")
        .with_status(200)
        .with_body(r#"{"username":"admin"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let spec = RequestSpec::get("/users/current")
        .header("Authorization", "Bearer stolen")
        .header("Accept", "application/vnd.custom+json");
    let value = client.execute(spec).await.unwrap();

    assert_eq!(value["username"], "admin");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v2.0/projects")
        .match_body(Matcher::Json(json!({"project_name": "demo"})))
        .with_status(201)
        .create_async()
        .await;

    let client = client_for(&server);
    let spec = RequestSpec::post("/projects")
        .json(&json!({"project_name": "demo"}))
        .unwrap();
    let value = client.execute(spec).await.unwrap();

    assert!(value.is_null());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_message_from_body() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v2.0/projects/missing")
        .with_status(404)
        .with_body(r#"{"message":"project missing not found"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .execute(RequestSpec::get("/projects/missing"))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "project missing not found");
    match err {
        ApiError::Api { status, body, .. } => {
            assert_eq!(status, 404);
            assert!(body.contains("not found"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_without_message_uses_fallback() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v2.0/empty")
        .with_status(500)
        .create_async()
        .await;
    server
        .mock("GET", "/api/v2.0/html")
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;
    server
        .mock("GET", "/api/v2.0/errors")
        .with_status(403)
        .with_body(r#"{"errors":[{"code":"FORBIDDEN","message":"forbidden"}]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    for (path, status) in [("/empty", 500), ("/html", 502), ("/errors", 403)] {
        let err = client.execute(RequestSpec::get(path)).await.unwrap_err();
        assert_eq!(err.status(), Some(status));
        assert_eq!(err.to_string(), "Request failed");
    }
}

#[tokio::test]
async fn test_empty_success_body_is_null() {
    let mut server = Server::new_async().await;
    server
        .mock("DELETE", "/api/v2.0/projects/demo")
        .with_status(200)
        .with_body("  \n")
        .create_async()
        .await;

    let client = client_for(&server);
    let value = client
        .execute(RequestSpec::delete("/projects/demo"))
        .await
        .unwrap();
    assert!(value.is_null());
}

#[tokio::test]
async fn test_invalid_success_body_is_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v2.0/systeminfo")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .execute(RequestSpec::get("/systeminfo"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_execute_text_returns_plain_body() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v2.0/system/gc/7/log")
        .match_header("accept", "text/plain")
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body("gc started\ngc done\n")
        .create_async()
        .await;

    let client = client_for(&server);
    let log = client.garbage_collection().log(7).await.unwrap();
    assert_eq!(log, "gc started\ngc done\n");
}

#[tokio::test]
async fn test_request_id_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2.0/statistics")
        .match_header("x-request-id", Matcher::Regex("^[A-Za-z0-9]{26}$".to_string()))
        .with_status(200)
        .with_body(r#"{"total_project_count":3}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let stats = client.system().statistics().await.unwrap();
    assert_eq!(stats["total_project_count"], 3);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_concurrent_requests_keep_their_own_query_and_headers() {
    let mut server = Server::new_async().await;
    let projects = server
        .mock("GET", "/api/v2.0/projects")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("page_size".into(), "10".into()),
        ]))
        .match_header("x-caller", "projects")
        .match_header("authorization", ADMIN_AUTH)
        .with_status(200)
        .with_body(r#"[{"name":"library"}]"#)
        .create_async()
        .await;
    let repositories = server
        .mock("GET", "/api/v2.0/repositories")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "x".into()),
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("page_size".into(), "10".into()),
        ]))
        .match_header("x-caller", "repositories")
        .match_header("authorization", ADMIN_AUTH)
        .with_status(200)
        .with_body(r#"[{"name":"library/nginx"}]"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let first = RequestSpec::get("/projects")
        .query(ListParams::default().to_query())
        .header("X-Caller", "projects");
    let second = RequestSpec::get("/repositories")
        .query(ListParams::default().query("x").page(2).to_query())
        .header("X-Caller", "repositories");

    let (a, b) = tokio::join!(client.execute(first), client.execute(second));

    assert_eq!(a.unwrap(), json!([{"name": "library"}]));
    assert_eq!(b.unwrap(), json!([{"name": "library/nginx"}]));
    projects.assert_async().await;
    repositories.assert_async().await;
}

#[tokio::test]
async fn test_delete_not_found_carries_message() {
    let mut server = Server::new_async().await;
    server
        .mock("DELETE", "/api/v2.0/projects/demo")
        .with_status(404)
        .with_body(r#"{"message":"project not found"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.projects().delete("demo").await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "project not found");
}

#[tokio::test]
async fn test_delete_server_error_without_body() {
    let mut server = Server::new_async().await;
    server
        .mock("DELETE", "/api/v2.0/projects/demo")
        .with_status(500)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.projects().delete("demo").await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "Request failed");
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    let client = HarborClient::new(
        ClientConfig::new("admin", "Harbor12345").with_base_address("http://127.0.0.1:1/api/v2.0"),
    )
    .unwrap();

    let err = client
        .execute(RequestSpec::get("/ping"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.status(), None);
}
