//! # UserRepository
//!
//! `users` テーブルの読み書きを担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **読み取りはプールから直接**: 単一 SELECT のためトランザクションは張らない
//! - **書き込みは [`TxContext`] 必須**: コミットするまで他の接続からは見えない
//! - **一意制約違反の変換**: `users_email_key` 違反は [`InfraError::conflict`] にする

use async_trait::async_trait;
use sqlx::PgPool;
use usermgmt_domain::{
    user::{Email, NewUser, User, UserId},
    value_objects::{Pagination, UserName},
};

use crate::{db::TxContext, error::InfraError};

/// ユーザーリポジトリトレイト
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// ID 昇順でユーザーを取得する
    ///
    /// 先頭 `skip` 件を読み飛ばし、最大 `limit` 件を返す。
    async fn find_all(&self, pagination: Pagination) -> Result<Vec<User>, InfraError>;

    /// ID でユーザーを検索
    ///
    /// # 戻り値
    ///
    /// - `Ok(Some(user))`: ユーザーが見つかった場合
    /// - `Ok(None)`: ユーザーが見つからない場合
    /// - `Err(_)`: データベースエラー
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, InfraError>;

    /// メールアドレスでユーザーを検索（完全一致）
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, InfraError>;

    /// ユーザーを挿入し、採番された ID を含むユーザーを返す
    ///
    /// メールアドレスが既に存在する場合は `InfraErrorKind::Conflict` を返す。
    async fn insert(&self, tx: &mut TxContext, user: &NewUser) -> Result<User, InfraError>;

    /// データベースへの疎通を確認する
    async fn ping(&self) -> Result<(), InfraError>;
}

/// `users` テーブルの 1 行
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id:    i32,
    name:  String,
    email: String,
}

/// 保存済みの行は作成時の検証を通さずにそのまま復元する
impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::from_db(
            UserId::from_i32(row.id),
            UserName::from_db(row.name),
            Email::from_db(row.email),
        )
    }
}

/// PostgreSQL 実装の UserRepository
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(offset = pagination.skip(), limit = pagination.limit()))]
    async fn find_all(&self, pagination: Pagination) -> Result<Vec<User>, InfraError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email
            FROM users
            ORDER BY id
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(pagination.skip())
        .bind(pagination.limit())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, InfraError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, InfraError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, tx: &mut TxContext, user: &NewUser) -> Result<User, InfraError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email
            "#,
        )
        .bind(user.name().as_str())
        .bind(user.email().as_str())
        .fetch_one(tx.conn()?)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                InfraError::conflict("User", user.email().as_str())
            }
            other => InfraError::from(other),
        })?;

        Ok(User::from(row))
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn ping(&self) -> Result<(), InfraError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
