use super::*;
use crate::{config::Settings, pages::load_templates};
use axum::body;

fn state() -> Arc<AppState> {
    Arc::new(AppState::new(
        Settings::default(),
        load_templates().expect("templates"),
    ))
}

#[tokio::test]
async fn health_reports_environment_and_uptime() {
    let Json(health) = health(State(state())).await;
    assert_eq!(health.status, "OK");
    assert_eq!(health.environment, "development");
    assert!(health.uptime >= 0.0);
    chrono::DateTime::parse_from_rfc3339(&health.timestamp).expect("rfc3339 timestamp");
    assert!(health.timestamp.ends_with('Z'));
}

#[tokio::test]
async fn contact_accepts_structured_and_unstructured_bodies() {
    let structured = Bytes::from(
        serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "We need a red team"
        })
        .to_string(),
    );
    let Json(reply) = contact(structured).await;
    assert!(reply.success);
    assert_eq!(reply.message, CONTACT_REPLY);

    for raw in ["[1,2,3]", "\"text\"", "not json at all", ""] {
        let Json(reply) = contact(Bytes::from(raw)).await;
        assert!(reply.success, "body {raw:?}");
    }
}

#[tokio::test]
async fn newsletter_always_succeeds() {
    let Json(reply) = newsletter(Bytes::from(r#"{"email":"a@b.c","role":"cto"}"#)).await;
    assert!(reply.success);
    assert_eq!(reply.message, NEWSLETTER_REPLY);
}

#[tokio::test]
async fn assessment_rejects_out_of_range_question() {
    let body = Bytes::from(r#"{"answers":[{"question":6,"value":"x","risk":"high"}]}"#);
    let (status, Json(err)) = assessment(body).await.expect_err("should fail");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err.code, ErrorCode::Validation);
}

#[tokio::test]
async fn assessment_scores_answers() {
    let body = Bytes::from(
        r#"{"answers":[
            {"question":1,"value":"a","risk":"high"},
            {"question":2,"value":"b","risk":"high"},
            {"question":3,"value":"c","risk":"high"},
            {"question":4,"value":"d","risk":"medium"},
            {"question":5,"value":"e","risk":"medium"}
        ]}"#,
    );
    let Json(result) = assessment(body).await.expect("scored");
    assert_eq!(result.score, 87);
    assert_eq!(result.label, "High Risk");
}

#[tokio::test]
async fn roi_rejects_negative_revenue() {
    let (status, _) = roi(Query(RoiQuery {
        revenue: Some("-10".into()),
    }))
    .await
    .expect_err("should fail");
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let Json(quote) = roi(Query(RoiQuery::default())).await.expect("default quote");
    assert_eq!(quote.potential_fine, 30_000_000.0);
}

#[tokio::test]
async fn unknown_article_demo_is_404() {
    let (status, Json(err)) = article_demo(Path("7".to_string()))
        .await
        .expect_err("should fail");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err.code, ErrorCode::NotFound);
}

#[tokio::test]
async fn article_card_is_a_text_attachment() {
    let response = article5_card().await.into_response();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"EU-AI-Act-Article-5-Card.txt\""
    );
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let text = String::from_utf8(bytes.to_vec()).expect("utf8");
    assert!(text.contains("PROHIBITED AI PRACTICES"));
}
