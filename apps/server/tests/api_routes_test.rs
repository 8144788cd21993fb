//! # API ルートの統合テスト
//!
//! `build_app()` で組み立てた Router に対してリクエストを送り、
//! 各ルートの振る舞いと、ハンドラ到達前の入力検証を検証する。
//!
//! ## テストケース
//!
//! - POST /users: 201 と UUID、呼び出しごとに異なる ID
//! - POST /users: 名前の長さ・メール形式・必須フィールドの違反は 400
//! - POST /users: ボディサイズ上限を超えると 413
//! - GET /users: ページ指定に関係なく 200 と空の data
//! - POST /login: 固定の認証情報で 201、それ以外は 401

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use sample_api_server::app_builder::build_app;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

fn test_app() -> Router {
    build_app().expect("ルートが重複なく登録できること")
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body)
        .unwrap_or_else(|_| panic!("JSON ボディであること: {}", String::from_utf8_lossy(&body)));
    (status, json)
}

async fn create_user(app: Router, body: Value) -> (StatusCode, Value) {
    send(app, json_request(Method::POST, "/users", body)).await
}

// --- POST /users ---

#[tokio::test]
async fn test_ユーザー作成で201とuuidを返す() {
    let (status, body) = create_user(
        test_app(),
        json!({ "name": "John Doe", "email": "john.doe@example.com" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_str().expect("id が文字列であること");
    Uuid::parse_str(id).unwrap_or_else(|_| panic!("有効な UUID であること: {id}"));
    assert_eq!(body.as_object().unwrap().len(), 1, "id 以外のフィールドを含まないこと");
}

#[tokio::test]
async fn test_ユーザー作成のidは呼び出しごとに異なる() {
    let app = test_app();
    let mut ids = std::collections::HashSet::new();

    for _ in 0..20 {
        let (status, body) = create_user(
            app.clone(),
            json!({ "name": "Jessica Jones", "email": "jessica.jones@example.com" }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        ids.insert(body["id"].as_str().unwrap().to_string());
    }

    assert_eq!(ids.len(), 20);
}

#[rstest]
#[case::名前が1文字(json!({ "name": "J", "email": "j@example.com" }))]
#[case::名前が空(json!({ "name": "", "email": "j@example.com" }))]
#[case::名前が101文字(json!({ "name": "a".repeat(101), "email": "a@example.com" }))]
#[case::メール形式でない(json!({ "name": "John Doe", "email": "john.doe" }))]
#[case::名前が欠落(json!({ "email": "john.doe@example.com" }))]
#[case::メールが欠落(json!({ "name": "John Doe" }))]
#[case::名前が文字列でない(json!({ "name": 42, "email": "john.doe@example.com" }))]
#[tokio::test]
async fn test_ユーザー作成の入力違反は400(#[case] body: Value) {
    let (status, body) = create_user(test_app(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["type"],
        "https://sample-api.example.com/errors/validation-error"
    );
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_ユーザー作成の違反フィールドがdetailに含まれる() {
    let (_, body) = create_user(
        test_app(),
        json!({ "name": "J", "email": "john.doe@example.com" }),
    )
    .await;

    let detail = body["detail"].as_str().unwrap();
    assert!(detail.starts_with("name:"), "detail: {detail}");
}

#[tokio::test]
async fn test_ユーザー作成で不正なjsonは400() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/users")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, _) = send(test_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_ユーザー作成でボディサイズ上限を超えると413() {
    let name = "a".repeat(3 * 1024 * 1024);
    let (status, body) = create_user(
        test_app(),
        json!({ "name": name, "email": "john.doe@example.com" }),
    )
    .await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(
        body["type"],
        "https://sample-api.example.com/errors/payload-too-large"
    );
    assert_eq!(body["title"], "Payload Too Large");
    assert_eq!(body["status"], 413);
}

// --- GET /users ---

#[rstest]
#[case("/users")]
#[case("/users?page=1")]
#[case("/users?limit=50")]
#[case("/users?page=3&limit=5")]
#[tokio::test]
async fn test_ユーザー一覧はページ指定に関係なく空を返す(#[case] uri: &str) {
    let (status, body) = send(test_app(), get_request(uri)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": [] }));
}

#[tokio::test]
async fn test_ユーザー一覧で整数でないページ指定は400() {
    let (status, body) = send(test_app(), get_request("/users?page=abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["title"], "Validation Error");
}

// --- POST /login ---

#[tokio::test]
async fn test_固定の認証情報でログインすると201() {
    let (status, body) = send(
        test_app(),
        json_request(
            Method::POST,
            "/login",
            json!({ "email": "teste@gmail.com", "password": "123456" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({ "message": "Login successful", "token": "jwt-token-placeholder" })
    );
}

#[rstest]
#[case("teste@gmail.com", "1234567")]
#[case("someone@example.com", "123456")]
#[case("someone@example.com", "secret")]
#[tokio::test]
async fn test_認証情報が一致しないと401(#[case] email: &str, #[case] password: &str) {
    let (status, body) = send(
        test_app(),
        json_request(
            Method::POST,
            "/login",
            json!({ "email": email, "password": password }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Invalid credentials" }));
}

#[tokio::test]
async fn test_ログインでパスワード欠落は400() {
    let (status, _) = send(
        test_app(),
        json_request(Method::POST, "/login", json!({ "email": "teste@gmail.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_未登録のメソッドは405_未登録のパスは404() {
    let response = test_app().oneshot(get_request("/login")).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = test_app().oneshot(get_request("/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
