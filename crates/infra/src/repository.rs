//! # リポジトリ実装
//!
//! ## 設計方針
//!
//! - **トレイト経由の利用**: ユースケース層はトレイトのみに依存し、モックと差し替え可能
//! - **実行時クエリ**: `sqlx::query_as` + `FromRow` で行を受け取り、値オブジェクトに変換する

pub mod user_repository;

pub use user_repository::{PostgresUserRepository, UserRepository};
