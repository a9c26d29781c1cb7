// Numerology Engine - Web Server
// JSON API for the landing page forms, with Axum

use axum::{
    extract::Path,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use clap::Parser;
use numerology_engine::{
    get_sun_sign, logging, meaning_for, NumberMeaning, NumerologyError, Reading, ZodiacSign,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

/// Server configuration, from `--addr <host:port>` or `NUMEROLOGY_ADDR`
#[derive(Debug, Clone, Parser)]
#[command(name = "numerology-server")]
#[command(about = "JSON API for numerology readings.")]
struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "NUMEROLOGY_ADDR", default_value = DEFAULT_ADDR)]
    addr: String,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn ok(data: T) -> Response {
        (
            StatusCode::OK,
            Json(ApiResponse {
                success: true,
                data: Some(data),
                error: None,
            }),
        )
            .into_response()
    }

    fn bad_request(error: NumerologyError) -> Response {
        warn!("rejected request: {}", error);
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<T> {
                success: false,
                data: None,
                error: Some(error.to_string()),
            }),
        )
            .into_response()
    }
}

/// Profile request body, raw strings straight from the form
#[derive(Deserialize)]
struct ProfileRequest {
    full_name: String,
    #[serde(default)]
    birth_date: String,
}

/// Sun sign response
#[derive(Serialize)]
struct SunSignResponse {
    sign: ZodiacSign,
    symbol: char,
    element: &'static str,
    date_range: String,
}

impl From<ZodiacSign> for SunSignResponse {
    fn from(sign: ZodiacSign) -> Self {
        Self {
            sign,
            symbol: sign.symbol(),
            element: sign.element().as_str(),
            date_range: sign.date_range(),
        }
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    ApiResponse::ok("OK")
}

/// POST /api/profile - Full reading for a name and birth date
async fn create_profile(Json(request): Json<ProfileRequest>) -> Response {
    match Reading::from_raw(&request.full_name, &request.birth_date) {
        Ok(reading) => {
            info!("profile computed, life path {}", reading.profile.life_path);
            ApiResponse::ok(reading)
        }
        Err(e) => ApiResponse::<Reading>::bad_request(e),
    }
}

/// GET /api/sun-sign/:date - Sun sign for a birth date
async fn sun_sign(Path(date): Path<String>) -> Response {
    match get_sun_sign(&date) {
        Ok(sign) => ApiResponse::ok(SunSignResponse::from(sign)),
        Err(e) => ApiResponse::<SunSignResponse>::bad_request(e),
    }
}

/// GET /api/meanings/:number - Meaning of a numerology number
async fn meaning(Path(number): Path<u32>) -> Response {
    match meaning_for(number) {
        Ok(meaning) => ApiResponse::ok(meaning),
        Err(e) => ApiResponse::<NumberMeaning>::bad_request(e),
    }
}

/// GET / - Serve index.html
async fn serve_index() -> impl IntoResponse {
    Html(include_str!("../web/index.html"))
}

fn app() -> Router {
    // Build API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/profile", post(create_profile))
        .route("/sun-sign/:date", get(sun_sign))
        .route("/meanings/:number", get(meaning));

    // Build main router
    Router::new()
        .route("/", get(serve_index))
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    logging::init_logging(1);

    println!("🔮 Numerology Engine - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", config.addr, e))?;

    println!("\n🚀 Server running on http://{}", config.addr);
    println!("   API: http://{}/api/profile", config.addr);
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app()).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_profile(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/profile")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[test]
    fn test_config_addr_flag() {
        let config = ServerConfig::try_parse_from(["numerology-server", "--addr", "127.0.0.1:8080"]).unwrap();
        assert_eq!(config.addr, "127.0.0.1:8080");

        let config = ServerConfig::try_parse_from(["numerology-server", "--addr=127.0.0.1:8081"]).unwrap();
        assert_eq!(config.addr, "127.0.0.1:8081");
    }

    #[test]
    fn test_config_default_addr() {
        // NUMEROLOGY_ADDR in the environment would take precedence over the default
        if std::env::var_os("NUMEROLOGY_ADDR").is_none() {
            let config = ServerConfig::try_parse_from(["numerology-server"]).unwrap();
            assert_eq!(config.addr, DEFAULT_ADDR);
        }
    }

    #[test]
    fn test_config_rejects_bad_flags() {
        assert!(ServerConfig::try_parse_from(["numerology-server", "--adr", "x"]).is_err());
        assert!(ServerConfig::try_parse_from(["numerology-server", "--addr"]).is_err());
        assert!(ServerConfig::try_parse_from(["numerology-server", "stray"]).is_err());
    }

    #[tokio::test]
    async fn test_health() {
        let (status, json) = send(get_request("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"], "OK");
    }

    #[tokio::test]
    async fn test_profile() {
        let body = serde_json::json!({"full_name": "John Doe", "birth_date": "1990-01-01"});
        let (status, json) = send(post_profile(body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["profile"]["life_path"], 3);
        assert_eq!(json["data"]["profile"]["personality"], 9);
        assert_eq!(json["data"]["sun_sign"], "Capricorn");
    }

    #[tokio::test]
    async fn test_profile_rejects_letterless_name() {
        let body = serde_json::json!({"full_name": "123", "birth_date": "1990-01-01"});
        let (status, json) = send(post_profile(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().contains("no letters"));
    }

    #[tokio::test]
    async fn test_sun_sign() {
        let (status, json) = send(get_request("/api/sun-sign/2024-02-19")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["sign"], "Pisces");
        assert_eq!(json["data"]["element"], "Water");

        let (status, _) = send(get_request("/api/sun-sign/garbage")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_meaning() {
        let (status, json) = send(get_request("/api/meanings/11")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["is_master"], true);

        let (status, _) = send(get_request("/api/meanings/0")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
