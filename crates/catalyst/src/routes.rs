//! HTTP route surface.
//!
//! Each handler makes one gateway call. Successful answers are the gateway's
//! projections (or the upstream JSON for writes and the profiling/count
//! reads); failures become `{"detail": "..."}` with a status derived from
//! the error class.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use catalyst_core::{
    CoreError, Device, DeviceCredential, EndpointFilter, Gateway, ProfilingRule, Site,
    SiteCreateRequest,
};

use crate::error::CliError;

type AppState = Arc<Gateway>;

// ── Error translation ────────────────────────────────────────────────

/// A gateway failure on its way out as an HTTP response.
#[derive(Debug)]
pub struct ApiError(CoreError);

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(CoreError::Validation {
            message: rejection.body_text(),
        })
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self(CoreError::Validation {
            message: rejection.body_text(),
        })
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(CoreError::Validation {
            message: rejection.body_text(),
        })
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            CoreError::AuthFailure => StatusCode::UNAUTHORIZED,
            CoreError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            CoreError::Api { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            CoreError::Network { .. } => StatusCode::BAD_GATEWAY,
            CoreError::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            CoreError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(%status, error = %self.0, "request failed");
        }
        (status, Json(json!({ "detail": self.0.to_string() }))).into_response()
    }
}

type ApiResult<T> = Result<Json<T>, ApiError>;

// ── Router ───────────────────────────────────────────────────────────

/// Build the application router.
pub fn router(gateway: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/sites", get(list_sites).post(create_site))
        .route("/devices", get(list_devices))
        .route(
            "/device-credentials",
            post(create_device_credentials),
        )
        .route(
            "/endpoint-analytics/profiling-rules",
            post(create_profiling_rule),
        )
        .route(
            "/endpoint-analytics/profiling-rules/:rule_id",
            get(get_profiling_rule),
        )
        .route("/endpoint-analytics/endpoints/count", get(count_endpoints))
        .layer(TraceLayer::new_for_http())
        .with_state(gateway)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(gateway: AppState, addr: SocketAddr) -> Result<(), CliError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| CliError::Bind {
            addr: addr.to_string(),
            source,
        })?;
    info!(%addr, "HTTP route surface listening");

    axum::serve(listener, router(gateway))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP route surface stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "could not install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
}

// ── Handlers ─────────────────────────────────────────────────────────

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn list_sites(State(gateway): State<AppState>) -> ApiResult<Vec<Site>> {
    Ok(Json(gateway.sites().await?))
}

async fn create_site(
    State(gateway): State<AppState>,
    body: Result<Json<SiteCreateRequest>, JsonRejection>,
) -> ApiResult<Value> {
    let Json(req) = body?;
    Ok(Json(gateway.create_site(&req).await?))
}

#[derive(Debug, Deserialize)]
struct DevicesQuery {
    site_id: Option<String>,
}

async fn list_devices(
    State(gateway): State<AppState>,
    query: Result<Query<DevicesQuery>, QueryRejection>,
) -> ApiResult<Vec<Device>> {
    let Query(query) = query?;
    Ok(Json(gateway.devices(query.site_id.as_deref()).await?))
}

async fn create_device_credentials(
    State(gateway): State<AppState>,
    body: Result<Json<DeviceCredential>, JsonRejection>,
) -> ApiResult<Value> {
    let Json(credential) = body?;
    Ok(Json(gateway.create_device_credentials(&credential).await?))
}

async fn get_profiling_rule(
    State(gateway): State<AppState>,
    rule_id: Result<Path<String>, PathRejection>,
) -> ApiResult<Value> {
    let Path(rule_id) = rule_id?;
    Ok(Json(gateway.profiling_rule(&rule_id).await?))
}

async fn create_profiling_rule(
    State(gateway): State<AppState>,
    body: Result<Json<ProfilingRule>, JsonRejection>,
) -> ApiResult<Value> {
    let Json(rule) = body?;
    Ok(Json(gateway.create_profiling_rule(&rule).await?))
}

async fn count_endpoints(
    State(gateway): State<AppState>,
    filter: Result<Query<EndpointFilter>, QueryRejection>,
) -> ApiResult<Value> {
    let Query(filter) = filter?;
    Ok(Json(gateway.endpoint_count(&filter).await?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use catalyst_core::GatewayConfig;
    use pretty_assertions::assert_eq;
    use secrecy::SecretString;
    use tower::ServiceExt;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn setup() -> (MockServer, Router) {
        let server = MockServer::start().await;
        let mut config = GatewayConfig::new(
            url::Url::parse(&server.uri()).unwrap(),
            SecretString::from("route-token".to_owned()),
        );
        config.rate_limit_delay = Duration::ZERO;
        let gateway = Gateway::new(&config).unwrap();
        (server, router(Arc::new(gateway)))
    }

    async fn call(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    // ── Success paths ────────────────────────────────────────────────

    #[tokio::test]
    async fn health_needs_no_upstream() {
        let (server, app) = setup().await;
        let (status, body) = call(app, get_req("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn sites_are_projected() {
        let (server, app) = setup().await;
        Mock::given(method("GET"))
            .and(path("/site"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": [{"id": "s1", "name": "Global", "siteHierarchy": "x"}]
            })))
            .mount(&server)
            .await;

        let (status, body) = call(app, get_req("/sites")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{"id": "s1", "name": "Global", "description": null}])
        );
    }

    #[tokio::test]
    async fn create_site_passes_upstream_json_through() {
        let (server, app) = setup().await;
        Mock::given(method("POST"))
            .and(path("/site"))
            .and(body_json(json!([
                {"siteNameHierarchy": "Global/Area1", "siteType": "FABRIC_SITE"}
            ])))
            .respond_with(
                ResponseTemplate::new(202)
                    .set_body_json(json!({"executionId": "e-1", "message": "accepted"})),
            )
            .mount(&server)
            .await;

        let (status, body) = call(
            app,
            post_json("/sites", &json!({"siteNameHierarchy": "Global/Area1"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"executionId": "e-1", "message": "accepted"}));
    }

    #[tokio::test]
    async fn devices_forward_site_filter() {
        let (server, app) = setup().await;
        Mock::given(method("GET"))
            .and(path("/network-device"))
            .and(query_param("siteId", "s1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": [{
                    "id": "d1", "hostname": "edge-1", "family": "Routers",
                    "role": "BORDER ROUTER", "managementIpAddress": "10.0.0.1"
                }]
            })))
            .mount(&server)
            .await;

        let (status, body) = call(app, get_req("/devices?site_id=s1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{
                "id": "d1", "hostname": "edge-1", "family": "Routers",
                "role": "BORDER ROUTER", "ip_address": "10.0.0.1"
            }])
        );
    }

    #[tokio::test]
    async fn endpoint_count_forwards_only_set_filters() {
        let (server, app) = setup().await;
        Mock::given(method("GET"))
            .and(path("/endpoint-analytics/endpoints/count"))
            .and(query_param("deviceType", "Printer"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": 7})))
            .mount(&server)
            .await;

        let (status, body) = call(
            app,
            get_req("/endpoint-analytics/endpoints/count?deviceType=Printer"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"response": 7}));

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), Some("deviceType=Printer"));
    }

    #[tokio::test]
    async fn profiling_rule_round_trip() {
        let (server, app) = setup().await;
        Mock::given(method("GET"))
            .and(path("/endpoint-analytics/profiling-rules/r-1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"ruleId": "r-1", "priority": 5})),
            )
            .mount(&server)
            .await;

        let (status, body) = call(app, get_req("/endpoint-analytics/profiling-rules/r-1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"ruleId": "r-1", "priority": 5}));
    }

    #[tokio::test]
    async fn create_profiling_rule_applies_default_type() {
        let (server, app) = setup().await;
        Mock::given(method("POST"))
            .and(path("/endpoint-analytics/profiling-rules"))
            .and(body_json(json!({"ruleId": "r-1", "ruleType": "Custom Rule"})))
            .respond_with(
                ResponseTemplate::new(202)
                    .set_body_json(json!({"response": {"taskId": "t-7", "url": "/task/t-7"}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let (status, body) = call(
            app,
            post_json("/endpoint-analytics/profiling-rules", &json!({"ruleId": "r-1"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"response": {"taskId": "t-7", "url": "/task/t-7"}}));
    }

    // ── Error translation ────────────────────────────────────────────

    #[tokio::test]
    async fn auth_failure_is_401() {
        let (server, app) = setup().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let (status, body) = call(app, get_req("/sites")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            body,
            json!({"detail": "Authentication failed. Check your API token."})
        );
    }

    #[tokio::test]
    async fn rate_limit_is_429() {
        let (server, app) = setup().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .expect(1)
            .mount(&server)
            .await;

        let (status, body) = call(app, get_req("/devices")).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            body,
            json!({"detail": "Rate limit exceeded. Please try again later."})
        );
    }

    #[tokio::test]
    async fn upstream_status_is_preserved() {
        let (server, app) = setup().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no such rule"))
            .mount(&server)
            .await;

        let (status, body) = call(app, get_req("/endpoint-analytics/profiling-rules/r-9")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "API error: 404 - no such rule"}));
    }

    #[tokio::test]
    async fn invalid_body_is_422_without_upstream_call() {
        let (server, app) = setup().await;

        let (status, body) = call(
            app.clone(),
            post_json("/sites", &json!({"siteNameHierarchy": "  "})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(
            body["detail"]
                .as_str()
                .unwrap()
                .starts_with("Validation error")
        );

        let (status, body) = call(
            app,
            post_json("/device-credentials", &json!({"username": "admin"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string());

        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn undecodable_path_is_422_detail() {
        let (server, app) = setup().await;

        let (status, body) = call(app, get_req("/endpoint-analytics/profiling-rules/%FF")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(
            body["detail"]
                .as_str()
                .unwrap()
                .starts_with("Validation error")
        );
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[test]
    fn api_status_outside_error_range_is_bad_gateway() {
        let err = ApiError(CoreError::Api {
            status: 302,
            body: String::new(),
        });
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);

        let err = ApiError(CoreError::Network {
            message: "refused".into(),
        });
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);

        let err = ApiError(CoreError::Unexpected {
            message: "bad json".into(),
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
