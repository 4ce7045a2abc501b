use crate::infra::AppState;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use swiftwork::analysis::{analyze_with, AnalyzeOptions, Listing};
use swiftwork::error::AppError;
use swiftwork::fixtures;
use swiftwork::suggestions::suggest;
use swiftwork::views::{topic_entries, AnalysisResponse, TopicEntry};

#[derive(Debug, Deserialize)]
pub(crate) struct SuggestionRequest {
    pub(crate) topic: String,
    pub(crate) current_value: String,
    #[serde(default)]
    pub(crate) context: Option<Map<String, Value>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SuggestionResponse {
    pub(crate) suggestion: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct TopicsResponse {
    pub(crate) topics: Vec<TopicEntry>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProductsResponse {
    pub(crate) products: Vec<Listing>,
}

pub(crate) fn api_router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/analyze", post(analyze_endpoint))
        .route("/api/regenerate", post(regenerate_endpoint))
        .route("/api/suggest", post(suggest_endpoint))
        .route("/api/topics", get(topics_endpoint))
        .route("/api/mock/products", get(mock_products))
        .route("/api/mock/products/:index", get(mock_product))
        .route(
            "/api/mock/products/:index/analysis",
            get(mock_product_analysis),
        )
        .route("/api/mock/analyses/:index", get(mock_analysis))
        .route("/api/mock/random/product", get(mock_random_product))
        .route("/api/mock/random/analysis", get(mock_random_analysis))
}

pub(crate) async fn root() -> Json<Value> {
    Json(json!({
        "message": "SwiftWork AI Optimizer API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
    }))
}

pub(crate) async fn healthcheck() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Acquire);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn analyze_endpoint(Json(listing): Json<Listing>) -> Json<AnalysisResponse> {
    Json(analyze_with(&listing, AnalyzeOptions::default()).into())
}

pub(crate) async fn regenerate_endpoint(Json(listing): Json<Listing>) -> Json<AnalysisResponse> {
    let options = AnalyzeOptions {
        force_refresh: true,
    };
    Json(analyze_with(&listing, options).into())
}

pub(crate) async fn suggest_endpoint(
    Json(request): Json<SuggestionRequest>,
) -> Json<SuggestionResponse> {
    let SuggestionRequest {
        topic,
        current_value,
        context,
    } = request;

    Json(SuggestionResponse {
        suggestion: suggest(&topic, &current_value, context.as_ref()),
    })
}

pub(crate) async fn topics_endpoint() -> Json<TopicsResponse> {
    Json(TopicsResponse {
        topics: topic_entries(),
    })
}

pub(crate) async fn mock_products() -> Json<ProductsResponse> {
    Json(ProductsResponse {
        products: fixtures::products(),
    })
}

pub(crate) async fn mock_product(Path(index): Path<usize>) -> Result<Json<Listing>, AppError> {
    Ok(Json(fixtures::product(index)?))
}

pub(crate) async fn mock_product_analysis(
    Path(index): Path<usize>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let listing = fixtures::product(index)?;
    Ok(Json(analyze_with(&listing, AnalyzeOptions::default()).into()))
}

pub(crate) async fn mock_analysis(
    Path(index): Path<usize>,
) -> Result<Json<AnalysisResponse>, AppError> {
    Ok(Json(fixtures::analysis(index)?.into()))
}

pub(crate) async fn mock_random_product() -> Result<Json<Listing>, AppError> {
    Ok(Json(fixtures::random_product()?))
}

pub(crate) async fn mock_random_analysis() -> Result<Json<AnalysisResponse>, AppError> {
    Ok(Json(fixtures::random_analysis()?.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::with_service_layers;
    use axum::body::Body;
    use axum::http::{Method, Request};
    use swiftwork::config::CorsConfig;
    use tower::ServiceExt;

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.expect("router responds");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body collects");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds")
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request builds")
    }

    #[tokio::test]
    async fn analyze_returns_seven_topics() {
        let (status, body) = send(
            api_router(),
            post_json(
                "/api/analyze",
                json!({ "title": "ร", "price": 499, "tags": [] }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let topics = body["topics"].as_array().expect("topics array");
        assert_eq!(topics.len(), 7);
        assert_eq!(topics[1]["name"], "ชื่องาน");
        assert_eq!(topics[1]["score"], 65);
        assert_eq!(topics[3]["status"], "suggest");
        assert_eq!(
            body["recommendations"].as_array().and_then(|lines| lines.last()),
            Some(&json!("ควรได้อย่างน้อย 80 คะแนนในแต่ละหมวด"))
        );
    }

    #[tokio::test]
    async fn regenerate_matches_analyze() {
        let listing = json!({
            "title": "ออกแบบโลโก้ระดับมืออาชีพ โดยนักออกแบบมี 5 ปี ประสบการณ์",
            "category": "ออกแบบกราฟิก",
            "subcategory": "Logo",
            "price": 3500
        });
        let (_, analyzed) = send(api_router(), post_json("/api/analyze", listing.clone())).await;
        let (status, regenerated) = send(api_router(), post_json("/api/regenerate", listing)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(analyzed, regenerated);
    }

    #[tokio::test]
    async fn malformed_listing_is_rejected_before_scoring() {
        let (status, _) = send(
            api_router(),
            post_json("/api/analyze", json!({ "price": "cheap" })),
        )
        .await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn odd_delivery_times_still_get_scored() {
        let (status, body) = send(
            api_router(),
            post_json(
                "/api/analyze",
                json!({
                    "packages": [
                        { "name": "Basic", "price": 500, "delivery_time": 1.5 },
                        { "name": "Pro", "price": 900, "delivery_time": true }
                    ]
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["topics"][5]["score"], 90);
    }

    #[tokio::test]
    async fn suggest_handles_known_and_unknown_topics() {
        let (status, body) = send(
            api_router(),
            post_json(
                "/api/suggest",
                json!({ "topic": "ชื่องาน", "current_value": "ก".repeat(80) }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["suggestion"]
            .as_str()
            .is_some_and(|text| text.contains("80")));

        let (_, body) = send(
            api_router(),
            post_json(
                "/api/suggest",
                json!({ "topic": "unknown_topic", "current_value": "", "context": { "a": 1 } }),
            ),
        )
        .await;
        assert_eq!(body["suggestion"], "ไม่มีคำแนะนำสำหรับหัวข้อนี้");
    }

    #[tokio::test]
    async fn topics_lists_canonical_order() {
        let (status, body) = send(api_router(), get_request("/api/topics")).await;
        assert_eq!(status, StatusCode::OK);
        let topics = body["topics"].as_array().expect("topics array");
        assert_eq!(topics.len(), 7);
        assert_eq!(topics[4], json!({ "name": "เพิ่มการมองเห็นของการ์ดงาน", "emoji": "👁️" }));
    }

    #[tokio::test]
    async fn mock_fixtures_are_served_and_bounds_checked() {
        let (status, body) = send(api_router(), get_request("/api/mock/products")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["products"].as_array().map(Vec::len), Some(8));

        let (status, body) = send(api_router(), get_request("/api/mock/products/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["subcategory"], "Banner โฆษณา");

        let (status, body) = send(api_router(), get_request("/api/mock/products/99")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["detail"].as_str().is_some_and(|text| text.contains("99")));

        let (status, body) =
            send(api_router(), get_request("/api/mock/products/7/analysis")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["topics"][1]["score"], 65);

        let (status, body) = send(api_router(), get_request("/api/mock/analyses/0")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["overall_score"], 80);

        let (status, _) = send(api_router(), get_request("/api/mock/analyses/2")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn random_mocks_return_fixture_shapes() {
        let (status, body) = send(api_router(), get_request("/api/mock/random/product")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.get("title").is_some());

        let (status, body) = send(api_router(), get_request("/api/mock/random/analysis")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["topics"].as_array().map(Vec::len), Some(7));
    }

    #[tokio::test]
    async fn root_and_health_report_running() {
        let (_, body) = send(api_router(), get_request("/")).await;
        assert_eq!(body["status"], "running");

        let (status, body) = send(api_router(), get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn panics_surface_as_internal_errors_with_detail() {
        async fn boom() -> Json<Value> {
            panic!("scoring invariant broken")
        }

        let router = with_service_layers(
            Router::new().route("/boom", get(boom)),
            &CorsConfig::AnyOrigin,
        );
        let (status, body) = send(router, get_request("/boom")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "scoring invariant broken");
    }

    #[tokio::test]
    async fn cors_allows_any_origin_by_default() {
        let router = with_service_layers(api_router(), &CorsConfig::AnyOrigin);
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/analyze")
            .header(header::ORIGIN, "chrome-extension://swiftwork")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .expect("request builds");

        let response = router.oneshot(request).await.expect("router responds");
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|value| value.to_str().ok()),
            Some("*")
        );
    }
}
