use axum::http::{StatusCode, header};
use time::OffsetDateTime;

mod common;
use common::{body_string, get};

#[tokio::test]
async fn test_index_renders_every_section_anchor() {
    let response = get("/").await;

    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    for id in ["services", "approach", "training", "resources", "contact"] {
        assert!(html.contains(&format!(r#"id="{id}""#)), "missing anchor {id}");
        assert!(
            html.contains(&format!(r#"data-jump="{id}""#)),
            "no jump control for {id}"
        );
    }
}

#[tokio::test]
async fn test_index_footer_shows_current_year() {
    let year = OffsetDateTime::now_utc().year();
    let html = body_string(get("/").await).await;

    assert!(html.contains(&format!("© {year} MindBridge Education. All rights reserved.")));
}

#[tokio::test]
async fn test_index_shows_brand_and_placeholders() {
    let html = body_string(get("/").await).await;

    assert!(html.contains("<title>MindBridge Education | Educate~Elevate~Thrive</title>"));
    assert!(html.contains(r#"src="/static/mindbridge-logo.png""#));
    assert!(html.contains("(000) 000-0000"));
    assert!(html.contains("Your City, State"));
    assert!(html.contains("Book a Consult"));
    assert!(html.contains(r#"placeholder="What are you looking to build or improve?""#));
}

#[tokio::test]
async fn test_index_prefills_draft_from_query() {
    let html = body_string(get("/?name=Ada&org=Analytical%20Engines").await).await;

    assert!(html.contains(r#"value="Ada""#));
    assert!(html.contains(r#"value="Analytical Engines""#));
}

#[tokio::test]
async fn test_index_repeated_query_field_keeps_last_value() {
    let response = get("/?org=First&organization=Second").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains(r#"value="Second""#));
}

#[tokio::test]
async fn test_pages_are_not_cached() {
    let response = get("/").await;

    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "no-store, no-cache, must-revalidate, proxy-revalidate"
    );
}

#[tokio::test]
async fn test_jump_to_known_section_redirects_to_fragment() {
    for id in ["services", "approach", "training", "resources", "contact"] {
        let response = get(&format!("/jump/{id}")).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], format!("/#{id}").as_str());
    }
}

#[tokio::test]
async fn test_jump_to_unknown_section_does_nothing() {
    let response = get("/jump/pricing").await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response.headers().get(header::LOCATION).is_none());
    assert!(body_string(response).await.is_empty());
}

#[tokio::test]
async fn test_unknown_route_renders_not_found_page() {
    let response = get("/pricing").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("Page not found"));
}

#[tokio::test]
async fn test_health_and_ready() {
    let response = get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["status"], "ok");

    let response = get("/ready").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["status"], "ready");
}
