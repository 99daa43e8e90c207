//! # User Management ドメイン層
//!
//! ユーザー管理 API の中核となるドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: ストアが採番した ID を持つ [`user::User`]
//! - **値オブジェクト**: 生成時に検証される [`user::Email`], [`value_objects::UserName`],
//!   [`value_objects::Pagination`]
//! - **ドメインエラー**: 入力検証の失敗や存在しないエンティティを表現する [`DomainError`]
//!
//! ## 依存関係の方向
//!
//! ```text
//! user-service → infra → domain
//!        ↘                ↑
//!          ───────────────
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）に一切依存しない。
//! 値オブジェクトが存在すること自体が「検証済み」であることを保証するため、
//! ストアに到達する前にすべての入力検証が完了する。
//!
//! ## 使用例
//!
//! ```rust
//! use usermgmt_domain::{
//!     DomainError,
//!     user::{Email, NewUser},
//!     value_objects::UserName,
//! };
//!
//! let new_user = NewUser::new(
//!     UserName::new("Ada").unwrap(),
//!     Email::new("ada@example.com").unwrap(),
//! );
//! assert_eq!(new_user.email().as_str(), "ada@example.com");
//!
//! assert!(matches!(Email::new("not-an-email"), Err(DomainError::Validation(_))));
//! ```

pub mod error;
pub mod user;
pub mod value_objects;

pub use error::DomainError;
