//! Axum front end for the todo core.
//!
//! # Routes
//! - `GET    /api/todo`      list
//! - `POST   /api/todo`      create (201)
//! - `GET    /api/todo/{id}` get
//! - `PUT    /api/todo/{id}` update
//! - `DELETE /api/todo/{id}` delete, answering with the removed todo

pub mod config;
pub mod error;
pub mod handler;

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use todo_core::{InMemoryTodoStore, TodoOrchestrator, TodoStore};
use tower_http::trace::TraceLayer;

pub const TODO_BASE_PATH: &str = "/api/todo";

pub type AppState = Arc<TodoOrchestrator<Arc<dyn TodoStore>>>;

/// Router backed by a fresh `InMemoryTodoStore`.
pub fn app() -> Router {
    router(Arc::new(InMemoryTodoStore::new()))
}

/// Router backed by the given store.
pub fn router(store: Arc<dyn TodoStore>) -> Router {
    let state: AppState = Arc::new(TodoOrchestrator::new(store));
    Router::new()
        .route(
            TODO_BASE_PATH,
            get(handler::list_todos).post(handler::create_todo),
        )
        .route(
            &format!("{TODO_BASE_PATH}/{{id}}"),
            get(handler::get_todo)
                .put(handler::update_todo)
                .delete(handler::delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

/// Serves `app()` on `listener` until the process stops.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}
