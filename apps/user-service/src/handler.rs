//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置し、ここで re-export する
//! - ハンドラは薄く保ち、作成処理はユースケースに委譲する
//! - エクストラクタのリジェクションも `{"detail"}` 形式の 400 に揃える

pub mod health;
pub mod user;

pub use health::{ReadinessState, health_check, readiness_check, root};
pub use user::{
    CreateUserRequest,
    ListUsersQuery,
    UserResponse,
    UserState,
    create_user,
    get_user,
    list_users,
};
