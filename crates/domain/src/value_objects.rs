//! # 共通値オブジェクト
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: プリミティブ型をラップし、型安全性を確保
//! - **バリデーション**: 生成時に検証し、不正な値の存在を型レベルで排除
//! - **不変性**: 一度作成したら変更不可
//!
//! ## 含まれる型
//!
//! | 型 | ラップ対象 | 用途 |
//! |---|-----------|------|
//! | [`UserName`] | `String` | ユーザー表示名（最大 50 文字） |
//! | [`Pagination`] | `skip` + `limit` | 一覧取得のオフセット・件数 |

use crate::DomainError;

// =========================================================================
// UserName（ユーザー名）
// =========================================================================

/// ユーザー名の最大文字数（`users.name` は `VARCHAR(50)`）
pub const USER_NAME_MAX_LENGTH: usize = 50;

/// ユーザー名（値オブジェクト）
///
/// 前後の空白を除去したうえで、空でないこと・最大長以内であることを保証する。
/// 文字数は `char` 単位で数える（PostgreSQL の `VARCHAR(n)` と同じ基準）。
///
/// # 使用例
///
/// ```rust
/// use usermgmt_domain::value_objects::UserName;
///
/// let name = UserName::new("  Ada  ").unwrap();
/// assert_eq!(name.as_str(), "Ada");
///
/// assert!(UserName::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return Err(DomainError::Validation("name is required".to_string()));
        }

        if value.chars().count() > USER_NAME_MAX_LENGTH {
            return Err(DomainError::Validation(format!(
                "name must be at most {USER_NAME_MAX_LENGTH} characters"
            )));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// データベースの値から復元する
    ///
    /// 検証は行わない。保存済みの値は前後の空白も含めてそのまま保持する。
    pub fn from_db(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for UserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =========================================================================
// Pagination（オフセットページング）
// =========================================================================

/// 一覧取得のページング条件（値オブジェクト）
///
/// `skip` 件を読み飛ばしたあと、最大 `limit` 件を返す単純なオフセット方式。
/// カーソル方式や総件数の返却は行わない。
///
/// # 不変条件
///
/// - `skip` と `limit` はどちらも 0 以上
///
/// # 使用例
///
/// ```rust
/// use usermgmt_domain::value_objects::Pagination;
///
/// let page = Pagination::new(Some(10), None).unwrap();
/// assert_eq!(page.skip(), 10);
/// assert_eq!(page.limit(), Pagination::DEFAULT_LIMIT);
///
/// assert!(Pagination::new(Some(-1), None).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    skip:  i64,
    limit: i64,
}

impl Pagination {
    /// `skip` 省略時の値
    pub const DEFAULT_SKIP: i64 = 0;
    /// `limit` 省略時の値
    pub const DEFAULT_LIMIT: i64 = 100;

    /// ページング条件を作成する
    ///
    /// 省略された値にはデフォルト（`skip = 0`, `limit = 100`）を適用する。
    ///
    /// # エラー
    ///
    /// 負の値が指定された場合は `DomainError::Validation` を返す。
    pub fn new(skip: Option<i64>, limit: Option<i64>) -> Result<Self, DomainError> {
        let skip = skip.unwrap_or(Self::DEFAULT_SKIP);
        let limit = limit.unwrap_or(Self::DEFAULT_LIMIT);

        if skip < 0 {
            return Err(DomainError::Validation(
                "skip must be a non-negative integer".to_string(),
            ));
        }
        if limit < 0 {
            return Err(DomainError::Validation(
                "limit must be a non-negative integer".to_string(),
            ));
        }

        Ok(Self { skip, limit })
    }

    pub fn skip(&self) -> i64 {
        self.skip
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip:  Self::DEFAULT_SKIP,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    // UserName のテスト

    #[test]
    fn test_ユーザー名は前後の空白を除去する() {
        let name = UserName::new("  Ada Lovelace \n").unwrap();

        assert_eq!(name.as_str(), "Ada Lovelace");
    }

    #[rstest]
    #[case("", "空文字列")]
    #[case("   ", "空白のみ")]
    #[case(&"a".repeat(51), "51文字")]
    fn test_ユーザー名は不正な値を拒否する(#[case] input: &str, #[case] _reason: &str) {
        assert!(matches!(UserName::new(input), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_ユーザー名は50文字ちょうどを受け入れる() {
        assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH)).is_ok());
    }

    #[rstest]
    #[case(" Ada ")]
    #[case("")]
    fn test_データベースから復元したユーザー名は加工しない(#[case] stored: &str) {
        assert_eq!(UserName::from_db(stored.to_string()).as_str(), stored);
    }

    #[test]
    fn test_ユーザー名の文字数はバイト数ではなく文字数で数える() {
        // マルチバイト文字 50 文字（150 バイト）は許可される
        assert!(UserName::new("あ".repeat(USER_NAME_MAX_LENGTH)).is_ok());
    }

    // Pagination のテスト

    #[test]
    fn test_省略時はデフォルトのページング条件になる() {
        let sut = Pagination::new(None, None).unwrap();

        assert_eq!(sut, Pagination::default());
        assert_eq!(sut.skip(), 0);
        assert_eq!(sut.limit(), 100);
    }

    #[test]
    fn test_指定した値がそのまま保持される() {
        let sut = Pagination::new(Some(5), Some(0)).unwrap();

        assert_eq!(sut.skip(), 5);
        assert_eq!(sut.limit(), 0);
    }

    #[rstest]
    #[case(Some(-1), None, "skip must be a non-negative integer")]
    #[case(None, Some(-1), "limit must be a non-negative integer")]
    fn test_負の値は拒否される(
        #[case] skip: Option<i64>,
        #[case] limit: Option<i64>,
        #[case] expected: &str,
    ) {
        let err = Pagination::new(skip, limit).unwrap_err();

        assert_eq!(err.to_string(), expected);
    }
}
