//! Integration Test: ユーザーアクション
//!
//! HTTP 200のときだけ結果が返り、ステータス異常・トランスポートエラー・
//! パース失敗はすべて `None` に握りつぶされることを確認する。

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use traffic_bot::actions::UserActions;

/// シナリオ1: 作成成功（200 + idを含むボディ）
#[tokio::test]
async fn test_create_user_success() {
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "abc123",
            "username": "jdoe",
            "email": "jdoe@example.com",
            "role": "user"
        })))
        .expect(1)
        .mount(&mock)
        .await;

    let actions = UserActions::new(mock.uri()).unwrap();
    let record = actions.create_user().await.expect("expected a record");

    assert_eq!(record.id, "abc123");
    assert_eq!(record.extra["role"], "user");

    // 送信ペイロードはFake Data Provider生成のusername/email
    let requests = mock.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body["username"].as_str().is_some_and(|s| !s.is_empty()));
    assert!(body["email"].as_str().is_some_and(|s| s.contains('@')));
    assert_eq!(body.as_object().unwrap().len(), 2);
}

/// シナリオ2: 作成失敗（503）は結果なし
#[tokio::test]
async fn test_create_user_non_200_yields_none() {
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock)
        .await;

    let actions = UserActions::new(mock.uri()).unwrap();
    assert!(actions.create_user().await.is_none());
}

/// シナリオ3: 200でもボディが壊れていれば結果なし
#[tokio::test]
async fn test_create_user_malformed_body_yields_none() {
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock)
        .await;

    let actions = UserActions::new(mock.uri()).unwrap();
    assert!(actions.create_user().await.is_none());
}

/// シナリオ4: 200でもidが欠けていれば結果なし
#[tokio::test]
async fn test_create_user_missing_id_yields_none() {
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"username": "jdoe"})))
        .mount(&mock)
        .await;

    let actions = UserActions::new(mock.uri()).unwrap();
    assert!(actions.create_user().await.is_none());
}

/// シナリオ5: 接続先が存在しなくても結果なし（パニックしない）
#[tokio::test]
async fn test_create_user_transport_error_yields_none() {
    let actions = UserActions::new("http://127.0.0.1:59999").unwrap();
    assert!(actions.create_user().await.is_none());
}

/// シナリオ6: 取得成功（200）
#[tokio::test]
async fn test_get_user_success() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "abc123",
            "username": "jdoe"
        })))
        .expect(1)
        .mount(&mock)
        .await;

    let actions = UserActions::new(mock.uri()).unwrap();
    let record = actions.get_user("abc123").await.expect("expected a record");
    assert_eq!(record.id, "abc123");
}

/// シナリオ7: 存在しないユーザー（404）は結果なし
#[tokio::test]
async fn test_get_user_not_found_yields_none() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users/deadbeef"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "User not found"
        })))
        .expect(1)
        .mount(&mock)
        .await;

    let actions = UserActions::new(mock.uri()).unwrap();
    assert!(actions.get_user("deadbeef").await.is_none());
}

/// シナリオ8: 取得時のトランスポートエラーも結果なし
#[tokio::test]
async fn test_get_user_transport_error_yields_none() {
    let actions = UserActions::new("http://127.0.0.1:59999").unwrap();
    assert!(actions.get_user("abc123").await.is_none());
}
