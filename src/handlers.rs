use crate::chart::{build_chart, ChartConfig};
use crate::errors::AppError;
use crate::models::{DrinkRecord, IncrementRequest, DRINK_TYPES};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{extract::State, http::StatusCode, response::Html, Json};
use chrono::{Local, NaiveDate};

pub async fn index() -> Html<String> {
    Html(render_index(&today_string()))
}

pub async fn get_records(State(state): State<AppState>) -> Json<Vec<DrinkRecord>> {
    let store = state.store.lock().await;
    Json(store.aggregate_by_date())
}

/// Counts one drink per selected type and returns the fresh projection so
/// the page can re-render the table. An empty selection changes nothing and
/// skips the persist.
pub async fn increment(
    State(state): State<AppState>,
    Json(payload): Json<IncrementRequest>,
) -> Result<Json<Vec<DrinkRecord>>, AppError> {
    if NaiveDate::parse_from_str(&payload.date, "%Y-%m-%d").is_err() {
        return Err(AppError::bad_request("date must be YYYY-MM-DD"));
    }
    if let Some(unknown) = payload
        .types
        .iter()
        .find(|drink_type| !DRINK_TYPES.contains(&drink_type.as_str()))
    {
        return Err(AppError::bad_request(format!("unknown drink type: {unknown}")));
    }

    let mut store = state.store.lock().await;
    if !payload.types.is_empty() {
        store.increment(&payload.date, &payload.types);
        persist_data(&state.data_path, &store).await?;
    }

    Ok(Json(store.aggregate_by_date()))
}

/// Builds the stacked bar configuration and stores it in the single chart
/// slot, replacing whatever was there.
pub async fn render_chart(State(state): State<AppState>) -> Json<ChartConfig> {
    let mut store = state.store.lock().await;
    let config = build_chart(&store.aggregate_by_date());
    store.set_chart(config.clone());
    Json(config)
}

/// Drops the chart slot. The tallies themselves are untouched; reset only
/// hides the views.
pub async fn reset(State(state): State<AppState>) -> StatusCode {
    let mut store = state.store.lock().await;
    store.clear_chart();
    StatusCode::NO_CONTENT
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
