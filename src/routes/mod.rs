use crate::state::AppState;
use axum::Router;

pub mod about;
pub mod addresses;
pub mod distributors;
pub mod enquiries;
pub mod footer;
pub mod home;
pub mod products;
pub mod subscriptions;

pub fn all_routes() -> Router<AppState> {
    Router::new()
        .merge(products::create_route())
        .merge(home::create_route())
        .merge(about::create_route())
        .merge(footer::create_route())
        .merge(addresses::create_route())
        .merge(enquiries::create_route())
        .merge(distributors::create_route())
        .merge(subscriptions::create_route())
}
