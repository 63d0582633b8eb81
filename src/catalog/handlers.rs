use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use tracing::{instrument, warn};

use super::dto::{
    BarSetup, Drink, Faq, FaqFilter, GalleryFilter, GalleryItem, MenuFilter, Package, SetupFilter,
    Testimonial, TestimonialFilter,
};
use super::services;
use crate::{error::ApiError, state::AppState};

pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/setups", get(list_setups))
        .route("/setups/:slug", get(get_setup))
        .route("/menus", get(list_menus))
        .route("/testimonials", get(list_testimonials))
        .route("/gallery", get(list_gallery))
        .route("/packages", get(list_packages))
        .route("/faqs", get(list_faqs))
}

/// Bad query values are validation errors, reported like any other.
fn parse_filter<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    query.map(|Query(filter)| filter).map_err(|rejection| {
        warn!(error = %rejection.body_text(), "query string rejected");
        ApiError::Validation(rejection.body_text())
    })
}

#[instrument(skip(state))]
pub async fn list_setups(
    State(state): State<AppState>,
    query: Result<Query<SetupFilter>, QueryRejection>,
) -> Result<Json<Vec<BarSetup>>, ApiError> {
    let filter = parse_filter(query)?;
    Ok(Json(services::list_setups(state.store.as_ref(), &filter).await?))
}

#[instrument(skip(state))]
pub async fn get_setup(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BarSetup>, ApiError> {
    Ok(Json(services::get_setup(state.store.as_ref(), &slug).await?))
}

#[instrument(skip(state))]
pub async fn list_menus(
    State(state): State<AppState>,
    query: Result<Query<MenuFilter>, QueryRejection>,
) -> Result<Json<Vec<Drink>>, ApiError> {
    let filter = parse_filter(query)?;
    Ok(Json(services::list_drinks(state.store.as_ref(), &filter).await?))
}

#[instrument(skip(state))]
pub async fn list_testimonials(
    State(state): State<AppState>,
    query: Result<Query<TestimonialFilter>, QueryRejection>,
) -> Result<Json<Vec<Testimonial>>, ApiError> {
    let filter = parse_filter(query)?;
    Ok(Json(services::list_testimonials(state.store.as_ref(), &filter).await?))
}

#[instrument(skip(state))]
pub async fn list_gallery(
    State(state): State<AppState>,
    query: Result<Query<GalleryFilter>, QueryRejection>,
) -> Result<Json<Vec<GalleryItem>>, ApiError> {
    let filter = parse_filter(query)?;
    Ok(Json(services::list_gallery(state.store.as_ref(), &filter).await?))
}

#[instrument(skip(state))]
pub async fn list_packages(State(state): State<AppState>) -> Result<Json<Vec<Package>>, ApiError> {
    Ok(Json(services::list_packages(state.store.as_ref()).await?))
}

#[instrument(skip(state))]
pub async fn list_faqs(
    State(state): State<AppState>,
    query: Result<Query<FaqFilter>, QueryRejection>,
) -> Result<Json<Vec<Faq>>, ApiError> {
    let filter = parse_filter(query)?;
    Ok(Json(services::list_faqs(state.store.as_ref(), &filter).await?))
}
