//! TrizHub API Gateway
//!
//! The main entry point for all external API requests.
//! Handles:
//! - Patent and analysis CRUD
//! - TRIZ reference data lookups
//! - The analyze-patent action
//! - Observability (logging, metrics) and rate limiting

mod handlers;
mod middleware;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{info, Level};
use trizhub_analysis::Analyzer;
use trizhub_common::{config::AppConfig, llm, metrics, store::Repository, Store};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repo: Repository,
    pub analyzer: Arc<Analyzer>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(true)
        .json()
        .init();

    info!("Starting TrizHub API Gateway v{}", trizhub_common::VERSION);

    // Load configuration
    let config = AppConfig::load().map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        e
    })?;

    let config = Arc::new(config);

    // Initialize metrics
    metrics::register_metrics();

    if config.observability.metrics_port > 0 {
        let metrics_addr = SocketAddr::from(([0, 0, 0, 0], config.observability.metrics_port));
        PrometheusBuilder::new()
            .with_http_listener(metrics_addr)
            .set_buckets_for_metric(
                Matcher::Full(format!("{}_request_duration_seconds", metrics::METRICS_PREFIX)),
                metrics::LATENCY_BUCKETS,
            )?
            .set_buckets_for_metric(
                Matcher::Full(format!("{}_llm_duration_seconds", metrics::METRICS_PREFIX)),
                metrics::LLM_BUCKETS,
            )?
            .install()?;
        info!("Prometheus metrics listening on {}", metrics_addr);
    }

    // Seed the in-memory store
    let store = Store::seeded();
    let repo = Repository::new(store);

    // Build the analyzer over the configured chat model
    let chat = llm::create_chat_model(&config.llm);
    info!(model = chat.model_name(), "Chat model ready");
    let analyzer = Arc::new(Analyzer::new(chat));

    // Create app state
    let state = AppState {
        config: config.clone(),
        repo,
        analyzer,
    };

    // Build the router
    let app = create_router(state);

    // Start the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Create the main application router
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Request ID propagation
    let request_id = SetRequestIdLayer::x_request_id(MakeRequestUuid);
    let propagate_id = PropagateRequestIdLayer::x_request_id();

    // API routes
    let api_routes = Router::new()
        // Health endpoints
        .route("/health", get(handlers::health::health))
        .route("/ready", get(handlers::health::ready))
        // Patent endpoints
        .route("/patents", get(handlers::patents::list_patents))
        .route("/patents", post(handlers::patents::create_patent))
        .route("/patents/{id}", get(handlers::patents::get_patent))
        .route("/patents/{id}", put(handlers::patents::update_patent))
        .route("/patents/{id}", delete(handlers::patents::delete_patent))
        .route("/patents/{id}/file", get(handlers::patents::get_patent_file))
        .route(
            "/patents/{id}/analyses",
            get(handlers::analyses::analyses_for_patent),
        )
        .route(
            "/patents/{id}/citations",
            get(handlers::citations::citations_for_patent),
        )
        // Analysis endpoints
        .route("/analyze-patent", post(handlers::analyses::analyze_patent))
        .route("/analyses", get(handlers::analyses::list_analyses))
        .route("/analyses/{id}", get(handlers::analyses::get_analysis))
        .route("/analyses/{id}", put(handlers::analyses::update_analysis))
        .route("/analyses/{id}", delete(handlers::analyses::delete_analysis))
        .route(
            "/analyses/{id}/approve",
            post(handlers::analyses::approve_analysis),
        )
        // TRIZ reference data endpoints
        .route("/triz/principles", get(handlers::triz::principles))
        .route("/triz/parameters", get(handlers::triz::parameters))
        .route("/triz/matrix", get(handlers::triz::matrix))
        .route("/triz/matrix/lookup", get(handlers::triz::matrix_lookup));

    // Compose the app
    let mut app = Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(request_id)
        .layer(propagate_id);

    // Rate limiting, when enabled
    if state.config.rate_limit.enabled {
        let limiter = middleware::rate_limit::create_rate_limiter(&state.config.rate_limit);
        app = app.layer(axum::middleware::from_fn(move |request, next| {
            let limiter = limiter.clone();
            async move { middleware::rate_limit::rate_limit_middleware(request, next, limiter).await }
        }));
    }

    app.with_state(state)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, starting shutdown..."),
        _ = terminate => info!("Received SIGTERM, starting shutdown..."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;
    use trizhub_common::llm::MockChat;
    use trizhub_common::store::fixtures;

    fn test_state() -> AppState {
        let repo = Repository::new(Store::seeded());
        let analyzer = Arc::new(Analyzer::new(Arc::new(MockChat::new())));
        AppState {
            config: Arc::new(AppConfig::default()),
            repo,
            analyzer,
        }
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("valid request")
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("valid request")
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let app = create_router(test_state());

        let response = app.clone().oneshot(get_request("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get_request("/api/ready")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_reference_endpoints() {
        let app = create_router(test_state());

        for uri in [
            "/api/triz/principles",
            "/api/triz/parameters",
            "/api/triz/matrix",
        ] {
            let response = app.clone().oneshot(get_request(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "GET {}", uri);
        }
    }

    #[tokio::test]
    async fn test_matrix_lookup_contract() {
        let app = create_router(test_state());

        let response = app
            .clone()
            .oneshot(get_request("/api/triz/matrix/lookup?improving=1&worsening=2"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Missing parameter
        let response = app
            .clone()
            .oneshot(get_request("/api/triz/matrix/lookup?improving=1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Absent cell
        let response = app
            .oneshot(get_request("/api/triz/matrix/lookup?improving=1&worsening=1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_patent_listing_and_detail() {
        let app = create_router(test_state());

        let response = app
            .clone()
            .oneshot(get_request("/api/patents?search=surgical&status=reviewed"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let uri = format!("/api/patents/{}", fixtures::PATENT_MEDICAL);
        let response = app.clone().oneshot(get_request(&uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(get_request(&format!("/api/patents/{}", uuid::Uuid::new_v4())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_patent_contract() {
        let app = create_router(test_state());

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/patents",
                serde_json::json!({
                    "patent_number": "US12345678B2",
                    "title": "Adaptive Cooling Assembly",
                    "inventors": "Alex Doe, Sam Roe",
                    "pdf_file": "https://cdn.example.com/patents/cooling.pdf"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        // Neither a file URL nor text
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/patents",
                serde_json::json!({
                    "patent_number": "US87654321B2",
                    "title": "No Document"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Duplicate patent number
        let response = app
            .oneshot(post_json(
                "/api/patents",
                serde_json::json!({
                    "patent_number": "US10123456B2",
                    "title": "Duplicate",
                    "raw_text": "text"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_analyze_patent_flow() {
        let app = create_router(test_state());

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/analyze-patent",
                serde_json::json!({ "patent_id": fixtures::PATENT_IMAGING }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        // Legacy filename addressing
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/analyze-patent",
                serde_json::json!({ "patentFile": "medical_device_patent.pdf" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        // Nothing addressed
        let response = app
            .clone()
            .oneshot(post_json("/api/analyze-patent", serde_json::json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Unknown patent
        let response = app
            .oneshot(post_json(
                "/api/analyze-patent",
                serde_json::json!({ "patent_id": uuid::Uuid::new_v4() }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_analysis_lifecycle() {
        let app = create_router(test_state());

        let response = app.clone().oneshot(get_request("/api/analyses")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let approve_uri = format!("/api/analyses/{}/approve", fixtures::ANALYSIS_IMAGING);
        let response = app
            .clone()
            .oneshot(post_json(&approve_uri, serde_json::json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let delete_uri = format!("/api/analyses/{}", fixtures::ANALYSIS_SURGICAL);
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(&delete_uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app.oneshot(get_request(&delete_uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_patent_file_redirects() {
        let app = create_router(test_state());

        let uri = format!("/api/patents/{}/file", fixtures::PATENT_MEDICAL);
        let response = app.oneshot(get_request(&uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    }

    #[tokio::test]
    async fn test_citations_listing() {
        let app = create_router(test_state());

        let uri = format!("/api/patents/{}/citations", fixtures::PATENT_MEDICAL);
        let response = app.clone().oneshot(get_request(&uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let uri = format!("/api/patents/{}/citations", uuid::Uuid::new_v4());
        let response = app.oneshot(get_request(&uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
