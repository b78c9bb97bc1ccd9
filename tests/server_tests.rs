use std::sync::Arc;

use serde_json::{Value, json};
use tokio::net::TcpListener;

use userql::config::GraphqlSettings;
use userql::graphql::{build_schema, router};
use userql::storage::UserStore;

/// Serves the reference store on an ephemeral port and returns its base URL.
async fn spawn_server(graphiql: bool) -> String {
    let schema = build_schema(Arc::new(UserStore::reference()), &GraphqlSettings::default());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router(schema, graphiql)).await.unwrap();
    });

    format!("http://{}", address)
}

async fn post(base: &str, body: Value) -> Value {
    reqwest::Client::new()
        .post(format!("{}/", base))
        .json(&body)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_post_get_user() {
    let base = spawn_server(true).await;
    let response = post(
        &base,
        json!({
            "query": "query GetUser($userId: ID!) { getUser(id: $userId) { id name email age } }",
            "variables": { "userId": "user-1" },
        }),
    )
    .await;

    assert!(response.get("errors").is_none());
    assert_eq!(
        response["data"]["getUser"],
        json!({
            "id": "user-1",
            "name": "Michael1",
            "email": "michaeldouglasdev1@gmail.com",
            "age": 28,
        })
    );
}

#[tokio::test]
async fn test_post_list_users_with_limit() {
    let base = spawn_server(true).await;
    let response = post(
        &base,
        json!({
            "query": "query ListUsers($limit: Int) { listUsers(limit: $limit) { id } }",
            "variables": { "limit": 100 },
        }),
    )
    .await;

    assert_eq!(response["data"]["listUsers"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_post_errors_use_standard_envelope() {
    let base = spawn_server(true).await;

    let response = post(&base, json!({ "query": "{ getUser { id } }" })).await;
    let message = response["errors"][0]["message"].as_str().unwrap();
    assert!(message.contains("required"));

    let response = post(&base, json!({ "query": "{ listUsers { id } } }" })).await;
    let message = response["errors"][0]["message"].as_str().unwrap();
    assert!(message.contains("Syntax Error"));
}

#[tokio::test]
async fn test_persisted_query_round_trip() {
    let base = spawn_server(true).await;
    let extensions = json!({
        "persistedQuery": {
            "version": 1,
            "sha256Hash": "ecf4edb46db40b5132295c0291d62fb65d6759a9eedfa4d5d612dd5ec54a6b38",
        }
    });

    let response = post(&base, json!({ "extensions": extensions })).await;
    assert_eq!(response["errors"][0]["message"], "PersistedQueryNotFound");

    let response = post(
        &base,
        json!({ "query": "{__typename}", "extensions": extensions }),
    )
    .await;
    assert_eq!(response["data"]["__typename"], "Query");

    let response = post(&base, json!({ "extensions": extensions })).await;
    assert_eq!(response["data"]["__typename"], "Query");
}

#[tokio::test]
async fn test_graphiql_served_on_get() {
    let base = spawn_server(true).await;
    let body = reqwest::get(format!("{}/", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.to_lowercase().contains("graphiql"));
}

#[tokio::test]
async fn test_get_query_without_graphiql() {
    let base = spawn_server(false).await;
    // {listUsers(limit:2){id}}
    let url = format!("{}/?query=%7BlistUsers(limit%3A2)%7Bid%7D%7D", base);
    let response: Value = reqwest::get(url)
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(
        response["data"]["listUsers"],
        json!([{ "id": "user-1" }, { "id": "user-2" }])
    );
}

#[tokio::test]
async fn test_health() {
    let base = spawn_server(false).await;
    let response = reqwest::get(format!("{}/health", base)).await.unwrap();

    assert!(response.status().is_success());
    assert_eq!(response.text().await.unwrap(), "ok");
}
