//! Root greeting handler.

use axum::extract::State;

use crate::state::AppState;

/// Root handler: greeting with the deployed commit SHA.
pub async fn index(State(state): State<AppState>) -> String {
    state.greeting.to_string()
}
