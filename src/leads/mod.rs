use crate::state::AppState;
use axum::Router;

pub mod dto;
pub mod handlers;
mod repo;
pub mod services;

pub fn router() -> Router<AppState> {
    handlers::lead_routes()
}
