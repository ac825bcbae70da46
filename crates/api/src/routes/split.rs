//! 70/30 split route.

use axum::{
    Router,
    extract::{Query, State},
    response::Response,
    routing::get,
};

use crate::AppState;

/// Creates the split route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/73split", get(split_amount))
}

/// GET `/73split?amount=` - Split an amount 70/30 between BTC and ETH.
///
/// The query is read as raw pairs so a repeated `amount` never trips the
/// extractor's own rejection; the first occurrence wins.
async fn split_amount(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let amount = params
        .into_iter()
        .find_map(|(key, value)| (key == "amount").then_some(value))
        .unwrap_or_default();

    state.split.handle(&amount).await
}
