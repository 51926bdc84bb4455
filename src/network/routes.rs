//! Request handlers
//!
//! One handler per route. Each builds a `Command` and hands it to the engine.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{DefaultBodyLimit, Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::engine::Engine;
use crate::error::{PostboxError, Result};
use crate::protocol::{Command, CreatePost, ListQuery, Reply, SearchQuery, UpdatePost};
use crate::query::invalid_query;

/// Build the application router
pub fn router(engine: Arc<Engine>, config: &Config) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/posts", get(list_posts).post(create_post))
        .route("/api/posts/search", get(search_posts))
        .route("/api/posts/:id", put(update_post).delete(delete_post))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(engine)
}

async fn health(State(engine): State<Arc<Engine>>) -> Result<Reply> {
    engine.execute(Command::Ping)
}

async fn list_posts(
    State(engine): State<Arc<Engine>>,
    query: std::result::Result<Query<ListQuery>, QueryRejection>,
) -> Result<Reply> {
    let Query(query) = query.map_err(|rejection| invalid_query(rejection.body_text()))?;
    engine.execute(Command::List(query))
}

async fn create_post(
    State(engine): State<Arc<Engine>>,
    payload: std::result::Result<Json<CreatePost>, JsonRejection>,
) -> Result<Reply> {
    let Json(payload) = payload.map_err(body_error)?;
    engine.execute(Command::Create(payload))
}

async fn update_post(
    State(engine): State<Arc<Engine>>,
    Path(id): Path<String>,
    changes: std::result::Result<Json<UpdatePost>, JsonRejection>,
) -> Result<Reply> {
    let Json(changes) = changes.map_err(body_error)?;
    engine.execute(Command::Update { id, changes })
}

async fn delete_post(State(engine): State<Arc<Engine>>, Path(id): Path<String>) -> Result<Reply> {
    engine.execute(Command::Delete { id })
}

async fn search_posts(
    State(engine): State<Arc<Engine>>,
    query: std::result::Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Reply> {
    let Query(query) =
        query.map_err(|rejection| PostboxError::InvalidSearch(rejection.body_text()))?;
    engine.execute(Command::Search(query))
}

fn body_error(rejection: JsonRejection) -> PostboxError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        PostboxError::BodyTooLarge(rejection.body_text())
    } else {
        PostboxError::InvalidBody(rejection.body_text())
    }
}
