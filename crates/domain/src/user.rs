//! # ユーザー
//!
//! ユーザーエンティティとそれに関連する値オブジェクトを定義する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: [`UserId`] はストアが採番した整数をラップし、型安全性を確保
//! - **不変性**: ユーザーは作成後に更新・削除されない。セッターは提供しない
//! - **バリデーション**: [`Email`] と [`UserName`] は生成時に検証ロジックを実行
//!
//! ## ライフサイクル
//!
//! ```text
//! NewUser（ID なし・検証済み） ──insert──▶ User（ID 採番済み）
//! ```
//!
//! ## 使用例
//!
//! ```rust
//! use usermgmt_domain::{
//!     user::{Email, User, UserId},
//!     value_objects::UserName,
//! };
//!
//! // データベースから取得したユーザーを復元
//! let user = User::from_db(
//!     UserId::from_i32(1),
//!     UserName::new("Ada").unwrap(),
//!     Email::new("ada@example.com").unwrap(),
//! );
//!
//! assert_eq!(user.id().as_i32(), 1);
//! ```

use derive_more::Display;
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::{DomainError, value_objects::UserName};

/// メールアドレスの最大文字数（`users.email` は `VARCHAR(100)`）
pub const EMAIL_MAX_LENGTH: usize = 100;

/// ユーザー ID（ストアが採番する一意識別子）
///
/// PostgreSQL の `SERIAL` 列に対応する。アプリケーション側で生成することはなく、
/// INSERT の `RETURNING` 句またはクエリ結果からのみ復元する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[serde(transparent)]
#[display("{_0}")]
pub struct UserId(i32);

impl UserId {
    /// 既存の整数値からユーザー ID を作成する
    pub fn from_i32(value: i32) -> Self {
        Self(value)
    }

    /// 内部の整数値を取得する
    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

/// メールアドレス（値オブジェクト）
///
/// 構文の厳密な判定は `validator` クレートの HTML5 準拠チェックに委ねる。
/// 生成時にバリデーションを実行し、不正な値の作成を防ぐ。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// メールアドレスを作成する
    ///
    /// # バリデーション
    ///
    /// - 空文字列ではない
    /// - 最大 100 文字
    /// - `local@domain` の形式で、両側が空でない
    /// - `validator` の構文チェックを通過する
    ///
    /// # エラー
    ///
    /// バリデーションに失敗した場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::Validation("email is required".to_string()));
        }

        if value.chars().count() > EMAIL_MAX_LENGTH {
            return Err(DomainError::Validation(format!(
                "email must be at most {EMAIL_MAX_LENGTH} characters"
            )));
        }

        // 基本的な構造検証: local@domain の形式であること
        let Some((local, domain)) = value.split_once('@') else {
            return Err(DomainError::Validation(
                "email must be a valid email address".to_string(),
            ));
        };

        if local.is_empty() || domain.is_empty() || !value.validate_email() {
            return Err(DomainError::Validation(
                "email must be a valid email address".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// データベースの値から復元する
    ///
    /// 検証は行わない。保存済みの値をそのまま保持する。
    pub fn from_db(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 永続化前のユーザー
///
/// ID を持たない検証済みの入力値。リポジトリの `insert` に渡すと
/// ストアが ID を採番し、[`User`] として返る。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name:  UserName,
    email: Email,
}

impl NewUser {
    pub fn new(name: UserName, email: Email) -> Self {
        Self { name, email }
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}

/// ユーザーエンティティ
///
/// # 不変条件
///
/// - `id` はストアが採番し、以後変化しない
/// - `email` はストア全体で一意（DB の一意制約で保証）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id:    UserId,
    name:  UserName,
    email: Email,
}

impl User {
    /// 既存のデータからユーザーを復元する（データベースから取得時）
    pub fn from_db(id: UserId, name: UserName, email: Email) -> Self {
        Self { id, name, email }
    }

    // Getter メソッド

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use super::*;

    // フィクスチャ

    #[fixture]
    fn user() -> User {
        User::from_db(
            UserId::from_i32(1),
            UserName::new("Ada").unwrap(),
            Email::new("ada@example.com").unwrap(),
        )
    }

    // Email のテスト

    #[rstest]
    #[case("ada@example.com")]
    #[case("first.last+tag@sub.example.co.jp")]
    #[case("user@localhost")]
    fn test_メールアドレスは正常な形式を受け入れる(#[case] input: &str) {
        assert_eq!(Email::new(input).unwrap().as_str(), input);
    }

    #[rstest]
    #[case("", "空文字列")]
    #[case("no-at-sign", "@記号なし")]
    #[case("@", "@のみ")]
    #[case("@example.com", "ローカル部分が空")]
    #[case("user@", "ドメイン部分が空")]
    #[case("user name@example.com", "空白を含む")]
    #[case(&format!("{}@example.com", "a".repeat(90)), "100文字超過")]
    fn test_メールアドレスは不正な形式を拒否する(
        #[case] input: &str,
        #[case] _reason: &str,
    ) {
        assert!(matches!(Email::new(input), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_メールアドレスはちょうど100文字を受け入れる() {
        // ローカル部は 64 文字以内という構文上の制約があるため、ドメイン側で長さを稼ぐ
        let input = format!("{}@{}.com", "a".repeat(60), "b".repeat(35));
        assert_eq!(input.chars().count(), EMAIL_MAX_LENGTH);

        assert!(Email::new(input).is_ok());
    }

    #[rstest]
    #[case("bob-at-example")]
    #[case("")]
    fn test_データベースから復元したメールアドレスは検証しない(#[case] stored: &str) {
        assert_eq!(Email::from_db(stored.to_string()).as_str(), stored);
    }

    // UserId のテスト

    #[test]
    fn test_ユーザーidはjsonで整数としてシリアライズされる() {
        let json = serde_json::to_value(UserId::from_i32(7)).unwrap();

        assert_eq!(json, serde_json::json!(7));
    }

    #[test]
    fn test_ユーザーidのdisplayは整数値() {
        assert_eq!(UserId::from_i32(999).to_string(), "999");
    }

    // User のテスト

    #[rstest]
    fn test_復元したユーザーのフィールドを取得できる(user: User) {
        assert_eq!(user.id(), UserId::from_i32(1));
        assert_eq!(user.name().as_str(), "Ada");
        assert_eq!(user.email().as_str(), "ada@example.com");
    }

    #[rstest]
    fn test_同じ値から復元したユーザーは等しい(user: User) {
        let other = User::from_db(
            UserId::from_i32(1),
            UserName::new("Ada").unwrap(),
            Email::new("ada@example.com").unwrap(),
        );

        assert_eq!(user, other);
    }
}
