//! Thin HTTP wrapper around the dispatcher: one POST route, JSON body
//! in, JSON body out. A body that is not JSON at all is rejected here by
//! the extractor, before the core ever runs.

use crate::service::dispatcher::DecisionService;
use crate::service::request::DecisionRequest;
use crate::service::response::DecisionResponse;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use std::sync::Arc;

/// Builds the application router. The service is shared immutable
/// state; axum may call the handler from any worker without
/// coordination.
pub fn router(service: Arc<DecisionService>) -> Router {
    Router::new()
        .route("/api/decision", post(decide))
        .with_state(service)
}

async fn decide(
    State(service): State<Arc<DecisionService>>,
    Json(request): Json<DecisionRequest>,
) -> Json<DecisionResponse> {
    Json(service.decide(&request))
}
