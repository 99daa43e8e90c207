//! # ドメイン層エラー定義
//!
//! ビジネスルール違反やドメイン固有の例外状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//! | `NotFound` | 404 Not Found | エンティティが存在しない |
//! | `Conflict` | 400 Bad Request | メールアドレスの重複 |
//!
//! `Conflict` は 409 ではなく 400 に対応づける。
//!
//! ## 使用例
//!
//! ```rust
//! use usermgmt_domain::DomainError;
//!
//! fn validate_name(name: &str) -> Result<(), DomainError> {
//!     if name.is_empty() {
//!         return Err(DomainError::Validation("name is required".to_string()));
//!     }
//!     Ok(())
//! }
//!
//! let err = DomainError::NotFound {
//!     entity_type: "User",
//!     id:          "999".to_string(),
//! };
//! assert_eq!(err.to_string(), "User with id 999 not found");
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// `Display` の文字列はそのまま API の `detail` として返るため、
/// クライアント向けの英文メッセージにしている。
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// - 必須フィールドが未入力
    /// - 文字数制限の超過
    /// - 不正なフォーマット
    #[error("{0}")]
    Validation(String),

    /// エンティティが見つからない
    #[error("{entity_type} with id {id} not found")]
    NotFound {
        /// エンティティの種類（"User" など）
        entity_type: &'static str,
        /// 検索に使用した識別子
        id:          String,
    },

    /// 一意制約に反する状態（メールアドレス重複など）
    #[error("{0}")]
    Conflict(String),
}
