//! Integration specifications for the questionnaire scoring workflow.
//!
//! Scenarios go through the public engine facade and the HTTP router so the
//! scoring, aggregation, and error mapping are validated without reaching into
//! private modules.

mod common {
    use cmmi_diagnostic::assessment::{Answer, AnswerSheet, ScoringEngine};

    pub(super) fn engine() -> ScoringEngine {
        ScoringEngine::standard()
    }

    pub(super) fn sheet_with(overrides: &[(&str, [Answer; 5])]) -> AnswerSheet {
        let engine = engine();
        let mut sheet = AnswerSheet::new();
        for category in engine.rubric().categories() {
            let answers = overrides
                .iter()
                .find(|(name, _)| *name == category.name)
                .map(|(_, answers)| answers.to_vec())
                .unwrap_or_else(|| vec![Answer::Yes; category.len()]);
            sheet.push(category.name.clone(), answers);
        }
        sheet
    }
}

mod engine {
    use super::common::*;
    use cmmi_diagnostic::assessment::rubric::{
        CONFIGURATION_MANAGEMENT, PROJECT_MONITORING_AND_CONTROL, REQUIREMENTS_MANAGEMENT,
    };
    use cmmi_diagnostic::assessment::{Answer, Tier, ALL_PRACTICES_SATISFIED};

    #[test]
    fn full_rubric_run_reports_every_category_in_order() {
        let engine = engine();
        let sheet = sheet_with(&[(
            CONFIGURATION_MANAGEMENT,
            [
                Answer::Yes,
                Answer::Yes,
                Answer::No,
                Answer::Partial,
                Answer::Yes,
            ],
        )]);

        let assessment = engine.assess(&sheet).expect("assessment succeeds");

        let names: Vec<&str> = assessment
            .results
            .iter()
            .map(|result| result.category.as_str())
            .collect();
        let rubric_names: Vec<&str> = engine
            .rubric()
            .categories()
            .iter()
            .map(|category| category.name.as_str())
            .collect();
        assert_eq!(names, rubric_names);

        let configuration = assessment
            .results
            .iter()
            .find(|result| result.category == CONFIGURATION_MANAGEMENT)
            .expect("configuration result");
        assert_eq!(configuration.percentage, 70.0);
        assert_eq!(configuration.tier, Tier::PartiallyImplemented);

        let requirements = &assessment.results[0];
        assert_eq!(requirements.category, REQUIREMENTS_MANAGEMENT);
        assert_eq!(requirements.recommendations, vec![ALL_PRACTICES_SATISFIED]);

        assert_eq!(assessment.summary.implemented, 4);
        assert!(!assessment.meets_target_level());
    }

    #[test]
    fn deficient_categories_are_counted_and_advised() {
        let engine = engine();
        let sheet = sheet_with(&[(PROJECT_MONITORING_AND_CONTROL, [Answer::No; 5])]);

        let assessment = engine.assess(&sheet).expect("assessment succeeds");

        assert_eq!(assessment.summary.deficient, 1);
        let advice = assessment.target_advice();
        assert_eq!(advice.len(), 1);
        assert_eq!(advice[0].category, PROJECT_MONITORING_AND_CONTROL);
        assert_eq!(advice[0].tier_label, "Deficient");
        assert_eq!(advice[0].recommendations.len(), 3 + 5);
    }
}

mod http {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use cmmi_diagnostic::assessment::assessment_router;
    use cmmi_diagnostic::assessment::rubric::CONFIGURATION_MANAGEMENT;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn build_router() -> axum::Router {
        assessment_router(Arc::new(engine()))
    }

    async fn post_json(router: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).expect("serialize body")))
            .expect("request");

        let response = router.oneshot(request).await.expect("router dispatch");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, payload)
    }

    #[tokio::test]
    async fn get_rubric_lists_numbered_questions() {
        let response = build_router()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/rubric")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        let categories = payload["categories"].as_array().expect("categories");
        assert_eq!(categories.len(), 5);
        assert_eq!(categories[3]["index"], json!(4));
        assert_eq!(categories[3]["name"], json!(CONFIGURATION_MANAGEMENT));
        assert_eq!(categories[3]["questions"][0]["position"], json!(1));
    }

    #[tokio::test]
    async fn score_endpoint_returns_category_result() {
        let (status, payload) = post_json(
            build_router(),
            "/api/v1/assessments/score",
            json!({
                "category": CONFIGURATION_MANAGEMENT,
                "answers": ["Yes", "yes", "No", "Parcial", "1"],
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["percentage"], json!(70.0));
        assert_eq!(payload["tier"], json!("partially_implemented"));
        assert_eq!(payload["answers"][3]["answer"], json!("partial"));
        assert_eq!(payload["recommendations"].as_array().map(Vec::len), Some(5));
    }

    #[tokio::test]
    async fn score_endpoint_maps_engine_errors_to_unprocessable() {
        let (status, payload) = post_json(
            build_router(),
            "/api/v1/assessments/score",
            json!({ "category": CONFIGURATION_MANAGEMENT, "answers": ["yes"] }),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(payload["error"]
            .as_str()
            .expect("error message")
            .contains("expects 5 answers, found 1"));

        let (status, payload) = post_json(
            build_router(),
            "/api/v1/assessments/score",
            json!({ "category": "Risk Management", "answers": ["yes"] }),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(payload["error"]
            .as_str()
            .expect("error message")
            .contains("not part of the rubric"));
    }

    #[tokio::test]
    async fn invalid_answer_tokens_are_rejected() {
        let (status, payload) = post_json(
            build_router(),
            "/api/v1/assessments/score",
            json!({
                "category": CONFIGURATION_MANAGEMENT,
                "answers": ["yes", "yes", "yes", "yes", "sometimes"],
            }),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            payload["error"],
            json!("assessment error: invalid answer 'sometimes': expected yes, partial or no")
        );

        let (status, payload) = post_json(
            build_router(),
            "/api/v1/assessments",
            json!({
                "categories": [
                    { "category": CONFIGURATION_MANAGEMENT, "answers": ["yes", "often", "no", "no", "no"] }
                ],
            }),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(payload["error"]
            .as_str()
            .expect("error message")
            .contains("invalid answer 'often'"));
    }

    #[tokio::test]
    async fn malformed_bodies_are_reported_as_json() {
        let (status, payload) = post_json(
            build_router(),
            "/api/v1/assessments/score",
            json!({ "answers": ["yes"] }),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(payload["error"]
            .as_str()
            .expect("error message")
            .starts_with("invalid request:"));
    }

    #[tokio::test]
    async fn assessment_endpoint_returns_report_document() {
        let sheet = sheet_with(&[]);
        let (status, payload) = post_json(
            build_router(),
            "/api/v1/assessments",
            json!({
                "project": "Billing Platform",
                "categories": sheet,
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["project"], json!("Billing Platform"));
        assert_eq!(payload["meets_target_level"], json!(true));
        assert_eq!(payload["summary"]["implemented"], json!(5));
        assert_eq!(payload["results"].as_array().map(Vec::len), Some(5));
        assert!(payload["generated_at"].is_string());
        assert!(payload["conclusion"]
            .as_str()
            .expect("conclusion")
            .contains("The project meets CMMI Level 2."));
    }

    #[tokio::test]
    async fn assessment_endpoint_defaults_project_name() {
        let (status, payload) = post_json(
            build_router(),
            "/api/v1/assessments",
            json!({
                "categories": [
                    { "category": CONFIGURATION_MANAGEMENT, "answers": ["no", "no", "no", "no", "no"] }
                ],
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["project"], json!("Unnamed_Project"));
        assert_eq!(payload["meets_target_level"], json!(false));
        assert_eq!(payload["summary"]["deficient"], json!(1));
        assert_eq!(payload["target_advice"][0]["tier"], json!("deficient"));
    }
}
