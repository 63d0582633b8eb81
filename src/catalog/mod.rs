use crate::state::AppState;
use axum::Router;

mod defaults;
pub mod dto;
pub mod handlers;
pub mod services;

pub fn router() -> Router<AppState> {
    handlers::catalog_routes()
}
