use super::support::{spawn_server, spawn_server_with};

#[tokio::test]
async fn verification_echoes_challenge() {
    let server = spawn_server().await;

    let response = reqwest::get(server.url(
        "/webhook?hub.mode=subscribe&hub.verify_token=redco123&hub.challenge=xyz123",
    ))
    .await
    .expect("verification should respond");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.text().await.expect("body expected"), "xyz123");

    server.stop().await;
}

#[tokio::test]
async fn verification_rejects_wrong_token() {
    let server = spawn_server().await;

    let response = reqwest::get(server.url(
        "/webhook?hub.mode=subscribe&hub.verify_token=wrong&hub.challenge=xyz123",
    ))
    .await
    .expect("verification should respond");

    assert_eq!(response.status(), reqwest::StatusCode::FORBIDDEN);
    assert!(response.text().await.expect("body expected").is_empty());

    server.stop().await;
}

#[tokio::test]
async fn verification_rejects_other_modes_and_missing_params() {
    let server = spawn_server().await;

    for query in [
        "/webhook?hub.mode=unsubscribe&hub.verify_token=redco123&hub.challenge=xyz123",
        "/webhook?hub.verify_token=redco123&hub.challenge=xyz123",
        "/webhook",
    ] {
        let response = reqwest::get(server.url(query))
            .await
            .expect("verification should respond");
        assert_eq!(response.status(), reqwest::StatusCode::FORBIDDEN, "{query}");
    }

    server.stop().await;
}

#[tokio::test]
async fn verification_uses_configured_token() {
    let server = spawn_server_with(|config| {
        config.verify_token = "custom-token".to_owned();
    })
    .await;

    let accepted = reqwest::get(server.url(
        "/webhook?hub.mode=subscribe&hub.verify_token=custom-token&hub.challenge=1158201444",
    ))
    .await
    .expect("verification should respond");
    assert_eq!(accepted.status(), reqwest::StatusCode::OK);
    assert_eq!(accepted.text().await.expect("body expected"), "1158201444");

    let rejected = reqwest::get(server.url(
        "/webhook?hub.mode=subscribe&hub.verify_token=redco123&hub.challenge=1158201444",
    ))
    .await
    .expect("verification should respond");
    assert_eq!(rejected.status(), reqwest::StatusCode::FORBIDDEN);

    server.stop().await;
}
