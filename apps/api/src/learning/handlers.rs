//! Axum route handlers for the two generation endpoints.
//!
//! Contract with the client: these handlers always answer 200 with a JSON
//! array, possibly empty. Generator-side failures (network, auth, quota) are
//! logged and mapped to an empty array, never to a 4xx/5xx. The client tells
//! "empty array" apart from transport failures on its own.

use axum::{extract::State, Json};
use tracing::warn;

use crate::learning::models::{AutoRequest, LearnRequest};
use crate::learning::normalize::{extract_link, normalize_list, ListKind};
use crate::learning::prompts;
use crate::llm_client::prompts::LIST_ONLY_SYSTEM;
use crate::llm_client::LlmClient;
use crate::state::AppState;

/// POST /api/auto
///
/// Asks the generator for 3–5 subtopics of the main topic and returns them
/// as a plain array of strings.
pub async fn handle_auto(
    State(state): State<AppState>,
    Json(request): Json<AutoRequest>,
) -> Json<Vec<String>> {
    let prompt = prompts::auto_subtopics_prompt(&request.main, request.level, request.depth);
    let raw = fetch_raw(&state.llm, &prompt).await;

    Json(normalize_list(raw.as_deref(), ListKind::Subtopics))
}

/// POST /api/learn
///
/// Asks the generator for one resource link per subtopic, order-aligned with
/// the request's `sub` list.
pub async fn handle_learn(
    State(state): State<AppState>,
    Json(request): Json<LearnRequest>,
) -> Json<Vec<String>> {
    let prompt = prompts::resource_links_prompt(
        &request.main,
        request.level,
        request.depth,
        &request.sub,
        request.goal.as_deref(),
    );
    let raw = fetch_raw(&state.llm, &prompt).await;

    let links: Vec<String> = normalize_list(raw.as_deref(), ListKind::Resources)
        .iter()
        .map(|entry| extract_link(entry))
        .collect();

    // Alignment with `sub` is positional and unverified; a short or long
    // reply silently misaligns entries on the client.
    if !links.is_empty() && links.len() != request.sub.len() {
        warn!(
            "resource count {} does not match subtopic count {}",
            links.len(),
            request.sub.len()
        );
    }

    Json(links)
}

/// Runs one generator call and hands back the raw reply text.
/// Any upstream failure is absorbed here: the caller sees `None` and
/// normalization turns that into an empty list.
async fn fetch_raw(llm: &LlmClient, prompt: &str) -> Option<String> {
    match llm.call_text(prompt, LIST_ONLY_SYSTEM).await {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("generator call failed: {e}");
            None
        }
    }
}
