use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use mindbridge::config::Config;
use tower::ServiceExt;

pub fn create_test_app() -> Router {
    mindbridge::create_app(Config::default())
}

pub async fn get(uri: &str) -> Response<Body> {
    create_test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
