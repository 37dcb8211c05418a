//! Integration tests for the planner HTTP surface.
//!
//! These tests drive the full application router (static files, timeout and
//! trace layers included) with `MockAIProvider` standing in for Gemini:
//! 1. Pages echo their inputs and embed the generated markdown as HTML
//! 2. Every upstream failure becomes a 500 with a JSON detail
//! 3. Bad input is rejected before any upstream call
//! 4. Upstream and whole-request deadlines are enforced

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use proptest::prelude::*;
use tower::ServiceExt;

use trip_planner::adapters::ai::{MockAIProvider, MockError};
use trip_planner::adapters::http::{app_router, PlannerAppState};
use trip_planner::adapters::markdown::PulldownMarkdownRenderer;
use trip_planner::adapters::templates::HandlebarsPageRenderer;
use trip_planner::config::ServerConfig;
use trip_planner::ports::{Page, PageRenderer, TemplateError};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Page renderer that always fails.
struct FailingPages;

impl PageRenderer for FailingPages {
    fn render(&self, page: &Page) -> Result<String, TemplateError> {
        Err(TemplateError::Render {
            template: page.template_name().to_string(),
            message: "disk on fire".to_string(),
        })
    }
}

fn state_with(provider: &MockAIProvider, pages: Arc<dyn PageRenderer>, ai_timeout: Duration) -> PlannerAppState {
    PlannerAppState::new(
        Arc::new(provider.clone()),
        Arc::new(PulldownMarkdownRenderer::new()),
        pages,
        ai_timeout,
    )
}

fn app(provider: &MockAIProvider) -> Router {
    let pages = Arc::new(HandlebarsPageRenderer::new().unwrap());
    app_router(
        state_with(provider, pages, Duration::from_secs(5)),
        &ServerConfig::default(),
    )
}

fn form_body(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn post_form(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form_body(fields)))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn trip_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("destination", "Lisbon"),
        ("start_date", "2026-05-01"),
        ("end_date", "2026-05-05"),
        ("interests", "food, history"),
        ("budget", "1500 EUR"),
    ]
}

/// One request per endpoint that calls the model.
fn generating_requests() -> Vec<Request<Body>> {
    vec![
        post_form("/create-plan", &trip_fields()),
        post_form(
            "/update-plan",
            &[("current_plan", "## DAY 1"), ("update_request", "add a museum")],
        ),
        get("/explore-destination/Lisbon"),
        get("/quick-ideas/Lisbon/food"),
    ]
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

// =============================================================================
// Happy Paths
// =============================================================================

#[tokio::test]
async fn create_plan_renders_plan_with_inputs() {
    let provider = MockAIProvider::new().with_response(
        "## STEP-BY-STEP ITINERARY\n\n### DAY 1\n\n1. Morning: Belém Tower\n\n\
         | Item | INR |\n|---|---|\n| Hotel | 9000 |\n",
    );

    let response = app(&provider)
        .oneshot(post_form("/create-plan", &trip_fields()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("text/html")));

    let html = body_text(response).await;
    for (_, value) in trip_fields() {
        assert!(html.contains(value), "page does not echo {value}");
    }
    assert!(html.contains("<h3>DAY 1</h3>"));
    assert!(html.contains("<ol>"));
    assert!(html.contains("<table>"));
    assert!(html.contains(r#"href="/explore-destination/Lisbon""#));
}

#[tokio::test]
async fn update_plan_sends_plan_and_instruction_verbatim() {
    let provider = MockAIProvider::new().with_response("## DAY 1\n\n* Oceanário");
    let plan = "## DAY 1\n\n1. Morning: Tram 28\n2. Lunch: Time Out Market";
    let instruction = "Swap lunch for a pastel de nata tasting & add Sintra";

    let response = app(&provider)
        .oneshot(post_form(
            "/update-plan",
            &[("current_plan", plan), ("update_request", instruction)],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let prompt = &provider.prompts()[0];
    assert!(prompt.contains(plan));
    assert!(prompt.contains(instruction));

    let html = body_text(response).await;
    assert!(html.contains("<li>Oceanário</li>"));
}

#[tokio::test]
async fn quick_ideas_for_different_interests_send_distinct_prompts() {
    let provider = MockAIProvider::new();
    let app = app(&provider);

    let food = app.clone().oneshot(get("/quick-ideas/Paris/food")).await.unwrap();
    let art = app.oneshot(get("/quick-ideas/Paris/art")).await.unwrap();

    assert_eq!(food.status(), StatusCode::OK);
    assert_eq!(art.status(), StatusCode::OK);

    let prompts = provider.prompts();
    assert_eq!(prompts.len(), 2);
    assert_ne!(prompts[0], prompts[1]);
    assert!(prompts[0].contains("interested in food in Paris"));
    assert!(prompts[1].contains("interested in art in Paris"));
}

#[tokio::test]
async fn explore_destination_echoes_destination() {
    let provider = MockAIProvider::new().with_response("## BEST TIME TO VISIT\n\n* May");

    let response = app(&provider)
        .oneshot(get("/explore-destination/Kyoto"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Discover Kyoto"));
    assert!(html.contains("<h2>BEST TIME TO VISIT</h2>"));
    assert!(html.contains(r#"href="/quick-ideas/Kyoto/food""#));
}

#[tokio::test]
async fn model_html_is_escaped_in_pages() {
    let provider =
        MockAIProvider::new().with_response("## Tips\n\n<script>alert('x')</script>\n\n[go](javascript:alert(1))");

    let response = app(&provider)
        .oneshot(get("/quick-ideas/Rome/food"))
        .await
        .unwrap();

    let html = body_text(response).await;
    assert!(!html.contains("<script>"));
    assert!(!html.contains("javascript:"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn create_plan_echoes_any_valid_input(
        destination in "[A-Za-z][A-Za-z0-9 .-]{0,20}",
        start_date in "[0-9]{4}-[0-9]{2}-[0-9]{2}",
        end_date in "[0-9]{4}-[0-9]{2}-[0-9]{2}",
        interests in "[a-z]{1,10}(, [a-z]{1,10}){0,3}",
        budget in "[1-9][0-9]{0,5} (USD|GBP|EUR|INR)",
    ) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let html = runtime.block_on(async {
            let provider = MockAIProvider::new().with_response("## Plan");
            let response = app(&provider)
                .oneshot(post_form(
                    "/create-plan",
                    &[
                        ("destination", destination.as_str()),
                        ("start_date", start_date.as_str()),
                        ("end_date", end_date.as_str()),
                        ("interests", interests.as_str()),
                        ("budget", budget.as_str()),
                    ],
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            body_text(response).await
        });

        prop_assert!(html.contains(&destination));
        prop_assert!(html.contains(&start_date));
        prop_assert!(html.contains(&end_date));
        prop_assert!(html.contains(&interests));
        prop_assert!(html.contains(&budget));
    }
}

// =============================================================================
// Failure Paths
// =============================================================================

#[tokio::test]
async fn every_endpoint_returns_500_when_upstream_fails() {
    for request in generating_requests() {
        let uri = request.uri().to_string();
        let provider = MockAIProvider::new().with_error(MockError::Unavailable {
            message: "backend overloaded".to_string(),
        });

        let response = app(&provider).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        let body = body_json(response).await;
        assert_eq!(body["code"], "UPSTREAM_ERROR");
        assert_eq!(body["detail"], "provider unavailable: backend overloaded");
        assert_eq!(provider.call_count(), 1);
    }
}

#[tokio::test]
async fn authentication_failure_is_a_server_error() {
    let provider = MockAIProvider::new().with_error(MockError::AuthenticationFailed);

    let response = app(&provider)
        .oneshot(get("/explore-destination/Goa"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["detail"], "authentication failed");
}

#[tokio::test]
async fn missing_form_field_never_reaches_upstream() {
    let provider = MockAIProvider::new();
    let mut fields = trip_fields();
    fields.retain(|(name, _)| *name != "budget");

    let response = app(&provider)
        .oneshot(post_form("/create-plan", &fields))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn missing_update_instruction_never_reaches_upstream() {
    let provider = MockAIProvider::new();

    let response = app(&provider)
        .oneshot(post_form("/update-plan", &[("current_plan", "## DAY 1")]))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn blank_form_field_is_422_with_detail() {
    let provider = MockAIProvider::new();
    let mut fields = trip_fields();
    fields[0] = ("destination", "   ");

    let response = app(&provider)
        .oneshot(post_form("/create-plan", &fields))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["detail"], "destination must not be blank");
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn template_failure_is_500() {
    let provider = MockAIProvider::new();
    let router = app_router(
        state_with(&provider, Arc::new(FailingPages), Duration::from_secs(5)),
        &ServerConfig::default(),
    );

    let home = router.clone().oneshot(get("/")).await.unwrap();
    assert_eq!(home.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(home).await["code"], "TEMPLATE_ERROR");
    assert_eq!(provider.call_count(), 0);

    let plan = router
        .oneshot(post_form("/create-plan", &trip_fields()))
        .await
        .unwrap();
    assert_eq!(plan.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(plan).await;
    assert_eq!(body["code"], "TEMPLATE_ERROR");
    assert_eq!(
        body["detail"],
        "failed to render template travel_plan: disk on fire"
    );
}

#[tokio::test(start_paused = true)]
async fn slow_upstream_times_out_with_500() {
    let provider = MockAIProvider::new().with_delay(Duration::from_secs(30));
    let pages = Arc::new(HandlebarsPageRenderer::new().unwrap());
    let router = app_router(
        state_with(&provider, pages, Duration::from_secs(2)),
        &ServerConfig::default(),
    );

    let response = router
        .oneshot(get("/explore-destination/Oslo"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await["detail"],
        "request timed out after 2s"
    );
}

#[tokio::test(start_paused = true)]
async fn whole_request_deadline_applies() {
    let provider = MockAIProvider::new().with_delay(Duration::from_secs(30));
    let pages = Arc::new(HandlebarsPageRenderer::new().unwrap());
    let server = ServerConfig {
        request_timeout_secs: 3,
        ..Default::default()
    };
    let router = app_router(state_with(&provider, pages, Duration::from_secs(20)), &server);

    let response = router.oneshot(get("/quick-ideas/Oslo/hiking")).await.unwrap();

    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
}

// =============================================================================
// Static Assets
// =============================================================================

#[tokio::test]
async fn static_files_are_served_from_configured_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("style.css"), "body { color: teal; }").unwrap();

    let provider = MockAIProvider::new();
    let pages = Arc::new(HandlebarsPageRenderer::new().unwrap());
    let server = ServerConfig {
        static_dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    let router = app_router(state_with(&provider, pages, Duration::from_secs(5)), &server);

    let found = router.clone().oneshot(get("/static/style.css")).await.unwrap();
    assert_eq!(found.status(), StatusCode::OK);
    assert_eq!(body_text(found).await, "body { color: teal; }");

    let missing = router.oneshot(get("/static/missing.js")).await.unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(provider.call_count(), 0);
}
