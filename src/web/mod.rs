//! HTTP shell around the ask use case, built on axum.
//!
//! Routes:
//! - `GET  /`          the question form
//! - `POST /`          answer a form-encoded `question`, re-render the form
//! - `POST /api/ask`   JSON `{"question": "..."}` → [`handlers::AskResponse`]
//! - `GET  /api/stats` corpus summary and reply counters
//! - `GET  /healthz`   liveness probe
//!
//! The shared state is a single immutable [`AskUseCase`] behind an `Arc`;
//! handlers never lock.

pub mod handlers;
pub mod page;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::application::ask_use_case::AskUseCase;

/// Shared state for every route.
#[derive(Clone)]
pub struct AppState {
    pub ask: Arc<AskUseCase>,
}

/// Build the router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index_page).post(handlers::submit_form))
        .route("/api/ask", post(handlers::api_ask))
        .route("/api/stats", get(handlers::api_stats))
        .route("/healthz", get(handlers::healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: SocketAddr, ask: Arc<AskUseCase>) -> Result<()> {
    let app = build_router(AppState { ask });

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Cannot bind {addr}"))?;
    tracing::info!("IntelliChat listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Cannot listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::handlers::AskResponse;
    use super::*;
    use crate::application::ask_use_case::{CorpusOrigin, CorpusSummary};
    use crate::data::lemmatizer::Lemmatizer;
    use crate::data::preprocessor::Preprocessor;
    use crate::domain::outcome::INVALID_QUESTION_MESSAGE;
    use crate::domain::qa_pair::QaPair;
    use crate::infra::lexicon_store::LexiconStore;
    use crate::ml::index::RetrievalIndex;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        let entries = vec![
            QaPair::new("What is your return policy?", "30 days money back guarantee"),
            QaPair::new("How do I contact support?", "Email us at <support@company.com>"),
        ];
        let preprocessor = Preprocessor::new(Lemmatizer::new(LexiconStore::embedded()));
        let index = RetrievalIndex::build(entries, preprocessor).unwrap();
        let summary = CorpusSummary { entries: 2, origin: CorpusOrigin::Fallback };
        build_router(AppState {
            ask: Arc::new(AskUseCase::new(Arc::new(index), summary)),
        })
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form_post(body: &'static str) -> Request<Body> {
        Request::post("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    fn json_post(uri: &str, json: serde_json::Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_form_page_renders() {
        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("IntelliChat Bot"));
        assert!(html.contains("name=\"question\""));
    }

    #[tokio::test]
    async fn test_form_post_shows_exchange() {
        let response = app()
            .oneshot(form_post("question=How+can+I+contact+support%3F"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("You: How can I contact support?"));
        assert!(html.contains("Bot: Email us at &lt;support@company.com&gt;"));
        // input is cleared
        assert!(html.contains("placeholder=\"Ask me anything...\"></textarea>"));
    }

    #[tokio::test]
    async fn test_form_post_blank_question_is_invalid() {
        let html = body_text(app().oneshot(form_post("question=+++")).await.unwrap()).await;
        assert!(html.contains(INVALID_QUESTION_MESSAGE));
    }

    #[tokio::test]
    async fn test_form_post_without_question_does_nothing() {
        let html = body_text(app().oneshot(form_post("")).await.unwrap()).await;
        assert!(html.contains("<div id=\"output-area\" class=\"answer-box\"></div>"));
    }

    #[tokio::test]
    async fn test_api_ask_returns_exchange() {
        let response = app()
            .oneshot(json_post("/api/ask", serde_json::json!({"question": "return policy?"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: AskResponse = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body.kind, "exchange");
        assert_eq!(body.answer.as_deref(), Some("30 days money back guarantee"));
        assert_eq!(body.lines.len(), 2);
    }

    #[tokio::test]
    async fn test_api_ask_empty_question_is_invalid() {
        let response = app()
            .oneshot(json_post("/api/ask", serde_json::json!({"question": ""})))
            .await
            .unwrap();
        let body: AskResponse = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body.kind, "invalid");
        assert_eq!(body.lines, vec![INVALID_QUESTION_MESSAGE.to_string()]);
        assert_eq!(body.answer, None);
    }

    #[tokio::test]
    async fn test_stats_count_replies() {
        let app = app();
        app.clone()
            .oneshot(json_post("/api/ask", serde_json::json!({"question": "support"})))
            .await
            .unwrap();
        let response = app
            .oneshot(Request::get("/api/stats").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let stats: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(stats["queries"]["answered"], 1);
        assert_eq!(stats["corpus"]["entries"], 2);
        assert_eq!(stats["corpus"]["origin"]["kind"], "fallback");
    }

    #[tokio::test]
    async fn test_healthz() {
        let response = app()
            .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");
    }
}
