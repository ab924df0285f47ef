//! Route handlers for the web shell.
//!
//! Every handler is a thin adapter around [`AskUseCase::handle`]:
//! extract the question, call it, render the reply.

use axum::{
    extract::State,
    response::Html,
    Form, Json,
};
use serde::{Deserialize, Serialize};

use super::page::render_page;
use super::AppState;
use crate::application::ask_use_case::CorpusSummary;
use crate::domain::outcome::Reply;
use crate::infra::metrics::MetricsSnapshot;

/// Body of the HTML form post.
#[derive(Debug, Deserialize)]
pub struct AskForm {
    #[serde(default)]
    pub question: Option<String>,
}

/// Body of `POST /api/ask`.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// JSON form of a [`Reply`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AskResponse {
    pub kind: String,
    pub lines: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub answer: Option<String>,
}

impl From<Reply> for AskResponse {
    fn from(reply: Reply) -> Self {
        let kind = reply.kind().to_string();
        let lines = reply.lines();
        let (question, answer) = match reply {
            Reply::Exchange { question, answer } => (Some(question), Some(answer)),
            Reply::Invalid | Reply::Failure => (None, None),
        };
        Self { kind, lines, question, answer }
    }
}

/// Body of `GET /api/stats`.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub corpus: CorpusSummary,
    pub queries: MetricsSnapshot,
}

/// `GET /`: the empty form.
pub async fn index_page() -> Html<String> {
    Html(render_page(None))
}

/// `POST /`: answer the submitted question and re-render the page.
///
/// A missing or empty field is not an explicit question, so the
/// page is re-rendered without invoking the bot.
pub async fn submit_form(State(state): State<AppState>, Form(form): Form<AskForm>) -> Html<String> {
    match form.question.as_deref() {
        Some(question) if !question.is_empty() => {
            let reply = state.ask.handle(question);
            Html(render_page(Some(&reply)))
        }
        _ => Html(render_page(None)),
    }
}

/// `POST /api/ask`: JSON in, JSON out.
pub async fn api_ask(State(state): State<AppState>, Json(req): Json<AskRequest>) -> Json<AskResponse> {
    Json(state.ask.handle(&req.question).into())
}

/// `GET /api/stats`: corpus summary and reply counters.
pub async fn api_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        corpus:  state.ask.corpus().clone(),
        queries: state.ask.metrics(),
    })
}

/// `GET /healthz`
pub async fn healthz() -> &'static str {
    "ok"
}
