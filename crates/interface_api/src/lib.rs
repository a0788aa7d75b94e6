//! HTTP API Layer
//!
//! This crate provides the REST API for the member directory using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: one per operation, stateless across requests
//! - **DTOs**: request/response data transfer objects
//! - **Error Handling**: consistent error responses via [`error::ApiError`]
//!
//! The router owns no database handle: it is constructed around the member
//! port it should serve, injected once at startup.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(members);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_member::MemberPort;

use crate::handlers::{health, member};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Port over the member collection
    pub members: Arc<dyn MemberPort>,
}

/// Creates the API router around the given member port.
///
/// Every route registers its methods explicitly; a request using an
/// unregistered method on a known path is answered with 405 by the method
/// router rather than falling through unhandled.
pub fn create_router(members: Arc<dyn MemberPort>) -> Router {
    let state = AppState { members };

    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/members",
            post(member::create_member).get(member::list_members),
        )
        .route(
            "/member",
            get(member::get_member)
                .put(member::update_member)
                .delete(member::delete_member),
        )
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
