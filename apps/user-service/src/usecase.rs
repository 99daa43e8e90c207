//! # ユースケース層
//!
//! User Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリと TransactionManager を `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは入力の変換とレスポンス組み立てのみを行う

pub mod user;

pub use user::UserUseCaseImpl;
