//! Endpoint behaviour against a mock backend

use libremore_api_client::{ApiError, AuthToken, ClientConfig, LibremoreClient, Operation};
use libremore_core::models::{GoalBookStatus, GoalProgress, NewGoal};
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> LibremoreClient {
    LibremoreClient::with_config(ClientConfig::default().with_base_url(server.uri())).unwrap()
}

fn token() -> AuthToken {
    AuthToken::new("test-token")
}

fn goal_summary(id: &str, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "description": null,
        "due_date": null,
        "created_at": "2026-03-01T12:00:00",
        "updated_at": "2026-03-02T12:00:00",
        "archived": false,
        "progress": 0.25,
        "total_books": 4,
        "done_books": 1
    })
}

fn assert_failed(err: &ApiError, operation: Operation, status: u16) {
    match err {
        ApiError::RequestFailed {
            operation: op,
            status: got,
            ..
        } => {
            assert_eq!(*op, operation);
            assert_eq!(*got, Some(status));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn recommendations_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .and(header("content-type", "application/json"))
        .and(header_exists("x-request-id"))
        .and(body_json(json!({"purpose": "統計学を学びたい"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"isbn13": "9784003101018", "title": "坊っちゃん", "author": "夏目漱石", "reason": "classic", "ndc": "913.6"},
            {"isbn13": "9784101010014", "title": "こころ"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let books = client_for(&server)
        .recommendations()
        .fetch("統計学を学びたい")
        .await
        .unwrap();

    assert_eq!(books.len(), 2);
    assert_eq!(books[0].author.as_deref(), Some("夏目漱石"));
    assert!(books[1].reason.is_none());
}

#[tokio::test]
async fn recommendations_accepts_empty_purpose() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .and(body_json(json!({"purpose": ""})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let books = client_for(&server).recommendations().fetch("").await.unwrap();
    assert!(books.is_empty());
}

#[tokio::test]
async fn recommendations_failure_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .recommendations()
        .fetch("anything")
        .await
        .unwrap_err();

    assert_failed(&err, Operation::Recommend, 503);
    assert_eq!(err.to_string(), "Failed to fetch recommendations");
}

#[tokio::test]
async fn availability_success_dedupes_isbns() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/availability"))
        .and(body_json(json!({"isbns": ["9784003101018", "9784101010014"], "city": "宮崎市"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"isbn13": "9784003101018", "systemid": "Miyazaki_Pref", "status": "貸出中", "opacUrl": "https://opac.example/1"},
            {"isbn13": "9784003101018", "systemid": "Miyazaki_City", "status": "在架"},
            {"isbn13": "9784101010014", "systemid": "Miyazaki_Pref", "status": "照会中"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let rows = client_for(&server)
        .availability()
        .fetch(["9784003101018", "9784101010014", "9784003101018"], "宮崎市")
        .await
        .unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].opac_url.as_deref(), Some("https://opac.example/1"));
    assert!(rows[1].opac_url.is_none());
}

#[tokio::test]
async fn availability_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/availability"))
        .respond_with(ResponseTemplate::new(422))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .availability()
        .fetch(Vec::<String>::new(), "宮崎市")
        .await
        .unwrap_err();

    assert_failed(&err, Operation::Availability, 422);
    assert_eq!(err.to_string(), "Failed to fetch availability");
}

#[tokio::test]
async fn goals_list_unwraps_items() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mypage/goals"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [goal_summary("g1", "Statistics"), goal_summary("g2", "Novels")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let goals = client_for(&server).goals().list(&token()).await.unwrap();
    assert_eq!(goals.len(), 2);
    assert_eq!(goals[1].title, "Novels");
    assert_eq!(goals[0].progress_percent(), 25);
}

#[tokio::test]
async fn goals_list_without_items_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mypage/goals"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let goals = client_for(&server).goals().list(&token()).await.unwrap();
    assert!(goals.is_empty());
}

#[tokio::test]
async fn goals_list_has_no_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mypage/goals"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&server)
        .await;

    client_for(&server).goals().list(&token()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("content-type").is_none());
}

#[tokio::test]
async fn goals_list_all_sends_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mypage/goals"))
        .and(query_param("include_archived", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [goal_summary("g1", "Old")]})))
        .expect(1)
        .mount(&server)
        .await;

    let goals = client_for(&server).goals().list_all(&token()).await.unwrap();
    assert_eq!(goals.len(), 1);
}

#[tokio::test]
async fn goals_list_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mypage/goals"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Not authenticated"})))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).goals().list(&token()).await.unwrap_err();
    assert_failed(&err, Operation::ListGoals, 401);
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Failed to fetch goals");
}

#[tokio::test]
async fn goal_detail_success() {
    let server = MockServer::start().await;
    let mut body = goal_summary("g1", "Statistics");
    body["books"] = json!([
        {"book": {"isbn13": "9784101010014", "title": "B"}, "status": "reading", "position": 1, "completed_at": null},
        {"book": {"isbn13": "9784003101018", "title": "A"}, "status": "done", "position": 0, "completed_at": "2026-03-03T08:00:00Z"}
    ]);
    Mock::given(method("GET"))
        .and(path("/goals/g1"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let detail = client_for(&server).goals().detail("g1", &token()).await.unwrap();
    assert_eq!(detail.summary.id, "g1");
    let ordered = detail.books_in_order();
    assert_eq!(ordered[0].book.title, "A");
    assert_eq!(ordered[0].status, GoalBookStatus::Done);
}

#[tokio::test]
async fn goal_detail_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/goals/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .goals()
        .detail("missing", &token())
        .await
        .unwrap_err();
    assert_failed(&err, Operation::GoalDetail, 404);
    assert_eq!(err.to_string(), "Failed to fetch goal detail");
}

#[tokio::test]
async fn goal_detail_malformed_body_is_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/goals/g1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "g1"})))
        .mount(&server)
        .await;

    let err = client_for(&server).goals().detail("g1", &token()).await.unwrap_err();
    assert_eq!(err.operation(), Some(Operation::GoalDetail));
}

#[tokio::test]
async fn update_book_status_success() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/goals/g1/books/9784003101018"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"status": "done"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true, "progress": 0.5, "total_books": 2, "done_books": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let body = client_for(&server)
        .goals()
        .update_book_status("g1", "9784003101018", GoalBookStatus::Done, &token())
        .await
        .unwrap();

    let progress: GoalProgress = serde_json::from_value(body).unwrap();
    assert_eq!(progress.done_books, 1);
}

#[tokio::test]
async fn update_book_status_failure_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/goals/g1/books/9784003101018"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .goals()
        .update_book_status("g1", "9784003101018", GoalBookStatus::Reading, &token())
        .await
        .unwrap_err();

    assert_failed(&err, Operation::UpdateBookStatus, 500);
    assert_eq!(err.to_string(), "Failed to update status");
}

#[tokio::test]
async fn create_goal_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/goals"))
        .and(body_json(json!({"title": "Statistics", "recommended_isbns": ["9784003101018"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(goal_summary("g9", "Statistics")))
        .expect(1)
        .mount(&server)
        .await;

    let goal = NewGoal::new("Statistics").with_isbns(["9784003101018"]);
    let created = client_for(&server).goals().create(&goal, &token()).await.unwrap();
    assert_eq!(created.id, "g9");
}

#[tokio::test]
async fn archive_goal_success() {
    let server = MockServer::start().await;
    let mut body = goal_summary("g1", "Statistics");
    body["archived"] = json!(true);
    Mock::given(method("PATCH"))
        .and(path("/goals/g1/archive"))
        .and(body_json(json!({"archived": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let goal = client_for(&server)
        .goals()
        .set_archived("g1", true, &token())
        .await
        .unwrap();
    assert!(goal.archived);
}

#[tokio::test]
async fn login_returns_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("username=reader%40example.com"))
        .and(body_string_contains("password=hunter22"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "issued-token", "token_type": "bearer"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = client_for(&server)
        .account()
        .login("reader@example.com", "hunter22")
        .await
        .unwrap();
    assert_eq!(token.expose(), "issued-token");
}

#[tokio::test]
async fn login_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .account()
        .login("reader@example.com", "wrong")
        .await
        .unwrap_err();
    assert_failed(&err, Operation::Login, 401);
}

#[tokio::test]
async fn current_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u1", "email": "reader@example.com", "created_at": "2026-01-01T00:00:00+00:00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = client_for(&server).account().me(&token()).await.unwrap();
    assert_eq!(user.email, "reader@example.com");
}

#[tokio::test]
async fn health_ok() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let (health, _elapsed) = client_for(&server).health().check_timed().await.unwrap();
    assert!(health.is_ok());
}

#[tokio::test]
async fn unreachable_backend_is_request_failure() {
    let client = LibremoreClient::with_config(
        ClientConfig::default().with_base_url("http://127.0.0.1:1"),
    )
    .unwrap();

    let err = client.recommendations().fetch("anything").await.unwrap_err();
    assert_eq!(err.operation(), Some(Operation::Recommend));
    assert_eq!(err.to_string(), "Failed to fetch recommendations");
}
