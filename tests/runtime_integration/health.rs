use super::support::spawn_server;

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let server = spawn_server().await;

    let response = reqwest::get(server.url("/health"))
        .await
        .expect("health endpoint should respond");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.text().await.expect("body expected"), "OK");

    server.stop().await;
}
