use axum::{
    Router,
    extract::State,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    models::{Preferences, Recommendation},
    web::AppState,
};

/// Body of `POST /api/recommend`
#[derive(Debug, Default, Deserialize)]
pub struct RecommendRequest {
    /// Free-form preferences; any JSON value is accepted
    #[serde(default)]
    pub preferences: Option<Value>,
}

impl RecommendRequest {
    /// Strings pass through, `null` or a missing field become empty, anything
    /// else is kept as its JSON text.
    #[must_use]
    pub fn preferences(&self) -> Preferences {
        match &self.preferences {
            None | Some(Value::Null) => Preferences::default(),
            Some(Value::String(text)) => Preferences::new(text.clone()),
            Some(other) => Preferences::new(other.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub cities: usize,
    pub model_loaded: bool,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/recommend", post(recommend))
}

/// Liveness check, mounted at `/health`
pub fn health_router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Json<Vec<Recommendation>> {
    let recommendations = state.engine.recommend(&request.preferences()).await;
    Json(recommendations)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        cities: state.engine.city_count(),
        model_loaded: state.engine.has_model(),
    })
}
