//! # User Service ライブラリ
//!
//! ハンドラ・ユースケースとルーター構築を公開する。
//! `main` とルーターテストの双方から利用する。

pub mod config;
pub mod error;
pub mod handler;
pub mod openapi;
pub mod usecase;

use std::sync::Arc;

use axum::{Router, routing::get};
use handler::{
    ReadinessState,
    UserState,
    create_user,
    get_user,
    health_check,
    list_users,
    readiness_check,
    root,
};
use tower_http::trace::TraceLayer;

/// アプリケーションのルーターを構築する
pub fn build_router(user_state: Arc<UserState>, readiness_state: Arc<ReadinessState>) -> Router {
    let users = Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{user_id}", get(get_user))
        .with_state(user_state);

    let health = Router::new()
        .route("/health/ready", get(readiness_check))
        .with_state(readiness_state);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/openapi.json", get(openapi::openapi_json))
        .merge(users)
        .merge(health)
        .layer(TraceLayer::new_for_http())
}
