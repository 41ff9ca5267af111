//! Read-only catalog endpoints.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::json;

use crate::content::filter::WorkQueryParams;
use crate::content::{
    CarouselCard, CategoryFilter, SiteContent, WorkCard, WorkQuery, filter_categories, filter_work,
};
use crate::state::AppState;

/// `GET /api/content`: the whole page catalog.
pub async fn site_content(State(state): State<AppState>) -> Json<SiteContent> {
    Json(SiteContent::clone(&state.content))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkListing<'a> {
    pub category: CategoryFilter,
    pub categories: Vec<CategoryFilter>,
    pub total: usize,
    pub has_more: bool,
    pub items: Vec<WorkCard<'a>>,
}

/// `GET /api/work?category=&q=&limit=&collapsed=`: filtered portfolio grid.
pub async fn list_work(
    State(state): State<AppState>,
    params: Result<Query<WorkQueryParams>, QueryRejection>,
) -> Response {
    let Ok(Query(params)) = params else {
        return bad_request("Invalid query parameters");
    };
    let query = match WorkQuery::try_from(params) {
        Ok(q) => q,
        Err(e) => return bad_request(&e.to_string()),
    };

    let unlimited = WorkQuery { limit: None, ..query.clone() };
    let total = filter_work(&state.content.work, &unlimited).len();
    let items: Vec<WorkCard<'_>> = filter_work(&state.content.work, &query)
        .into_iter()
        .map(WorkCard::from)
        .collect();

    Json(WorkListing {
        category: query.category,
        categories: filter_categories(),
        total,
        has_more: items.len() < total,
        items,
    })
    .into_response()
}

/// `GET /api/work/{id}`
pub async fn get_work(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.content.work_by_id(&id) {
        Some(item) => Json(WorkCard::from(item)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// `GET /api/carousels`: Instagram carousel grid.
pub async fn list_carousels(State(state): State<AppState>) -> Response {
    let cards: Vec<CarouselCard<'_>> = state.content.carousels.iter().map(CarouselCard::from).collect();
    Json(cards).into_response()
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
