//! Admin Console API Module
//!
//! Mutation endpoints; the route list must stay in sync with the guarded
//! paths in the auth middleware.

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/update_company", post(handler::update_company))
        .route("/update_contact", post(handler::update_contact))
        .route("/add_product", post(handler::add_product))
        .route("/update_product", post(handler::update_product))
        .route("/delete_product", post(handler::delete_product))
        .route("/delete_product_image", post(handler::delete_product_image))
        .route("/set_primary_image", post(handler::set_primary_image))
}
