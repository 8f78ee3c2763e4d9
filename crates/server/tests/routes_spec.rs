use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use catalog::Catalog;
use http_body_util::BodyExt;
use server::{FilterMoviesService, LINE_BREAK, build_router};
use tower::ServiceExt;

fn app() -> Router {
    build_router(FilterMoviesService::default())
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .expect("request builder should not fail"),
        )
        .await
        .expect("handler should respond");

    let status = response.status();
    let body_bytes = response
        .into_body()
        .collect()
        .await
        .expect("response body must be readable")
        .to_bytes();
    let body = String::from_utf8(body_bytes.to_vec()).expect("body must be utf-8");
    (status, body)
}

#[tokio::test]
async fn index_returns_empty_body() {
    let (status, body) = get(app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn random_defaults_to_three_titles() {
    let (status, body) = get(app(), "/random").await;

    assert_eq!(status, StatusCode::OK);
    let catalog = Catalog::builtin();
    let titles: Vec<&str> = body.split(LINE_BREAK).collect();
    assert_eq!(titles.len(), 3);
    for title in titles {
        assert!(
            catalog.titles().iter().any(|known| known == title),
            "unexpected title: {title}"
        );
    }
}

#[tokio::test]
async fn random_accepts_count() {
    let (status, body) = get(app(), "/random?count=5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.split(LINE_BREAK).count(), 5);
}

#[tokio::test]
async fn random_zero_count_returns_400() {
    let (status, body) = get(app(), "/random?count=0").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "minimum count is 1");
}

#[tokio::test]
async fn random_too_large_count_returns_400() {
    let (status, body) = get(app(), "/random?count=18").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "count exceeds number of available movies");
}

#[tokio::test]
async fn random_beyond_eligible_pool_returns_422() {
    let (status, _) = get(app(), "/random?count=16").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn random_non_numeric_count_returns_400() {
    let (status, _) = get(app(), "/random?count=abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn first_char_defaults_to_w() {
    let (status, body) = get(app(), "/firstChar").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        "Wanda i 123 smerfy</br>worek ziemniaków</br> wartość ze  spacjami "
    );
}

#[tokio::test]
async fn first_char_accepts_char() {
    let (status, body) = get(app(), "/firstChar?char=%26").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "&& w programowaniu");
}

#[tokio::test]
async fn first_char_space_returns_empty_body() {
    let (status, body) = get(app(), "/firstChar?char=%20").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn first_char_long_string_returns_400() {
    let (status, body) = get(app(), "/firstChar?char=Long%20string").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "exactly one character required");
}

#[tokio::test]
async fn minimum_word_defaults_to_one() {
    let (status, body) = get(app(), "/minimumWord").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.split(LINE_BREAK).count(), 15);
    assert!(body.starts_with("Pulp Fiction</br>Incepcja</br>"));
}

#[tokio::test]
async fn minimum_word_accepts_minimum_count() {
    let (status, body) = get(app(), "/minimumWord?minimumCount=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.split(LINE_BREAK).count(), 14);
    assert!(!body.contains("Incepcja"));
}

#[tokio::test]
async fn minimum_word_negative_returns_400() {
    let (status, body) = get(app(), "/minimumWord?minimumCount=-5").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "minimum count must be 0 or greater");
}

#[tokio::test]
async fn post_is_not_allowed() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/random")
                .body(Body::empty())
                .expect("request builder should not fail"),
        )
        .await
        .expect("handler should respond");

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
