//! # User Management 共有ユーティリティ
//!
//! ## 設計方針
//!
//! - ドメイン層・インフラ層・サービスのいずれからも依存される
//! - ビジネスロジックを含まない純粋なデータ構造と初期化処理のみを配置
//! - axum には依存しない（`IntoResponse` 変換は各サービスの責務）

pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::{CheckStatus, HealthResponse, MessageResponse, ReadinessResponse, ReadinessStatus};
