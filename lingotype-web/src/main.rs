use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use lingotype::Token;
use lingotype::accuracy::score;
use lingotype::segmenter::segment;
use lingotype_mt::{MyMemoryProvider, Translator, offline_fallback};

#[derive(Serialize, Deserialize)]
pub struct SegmentRequest {
    pub text: String,
    pub lang: String,
}

#[derive(Serialize)]
pub struct SegmentResponse {
    pub tokens: Vec<Token>,
}

#[derive(Serialize, Deserialize)]
pub struct AccuracyRequest {
    pub typed: String,
    pub reference: String,
}

#[derive(Serialize)]
pub struct AccuracyResponse {
    pub accuracy: u8,
}

#[derive(Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

#[derive(Serialize)]
pub struct TranslateResponse {
    pub translated: String,
    pub offline: bool,
}

#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<MyMemoryProvider>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("info".parse().unwrap()),
        )
        .init();

    let translator = MyMemoryProvider::new()
        .map_err(|e| format!("Failed to initialize translator: {}", e))?;
    let state = AppState {
        translator: Arc::new(translator),
    };

    info!("⌨️  Starting lingotype web server");

    // Build router
    let app = Router::new()
        .route("/", get(serve_index))
        .route("/api/segment", post(segment_text))
        .route("/api/accuracy", post(score_accuracy))
        .route("/api/translate", post(translate_text))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    info!("🚀 Server running at http://127.0.0.1:3000");

    axum::serve(listener, app).await?;

    Ok(())
}

async fn serve_index() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        include_str!("static/index.html"),
    )
}

async fn segment_text(Json(request): Json<SegmentRequest>) -> Json<SegmentResponse> {
    let tokens = segment(&request.text, &request.lang);
    Json(SegmentResponse { tokens })
}

async fn score_accuracy(Json(request): Json<AccuracyRequest>) -> Json<AccuracyResponse> {
    Json(AccuracyResponse {
        accuracy: score(&request.typed, &request.reference),
    })
}

async fn translate_text(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Json<TranslateResponse> {
    info!(
        "Translating {} chars {} → {}",
        request.text.chars().count(),
        &request.source_lang,
        &request.target_lang
    );

    match state
        .translator
        .translate(&request.text, &request.source_lang, &request.target_lang)
        .await
    {
        Ok(translated) => Json(TranslateResponse {
            translated,
            offline: false,
        }),
        Err(e) => {
            info!("Translation failed ({}), answering from offline fallback", e);
            Json(TranslateResponse {
                translated: offline_fallback(&request.text, &request.target_lang),
                offline: true,
            })
        }
    }
}
