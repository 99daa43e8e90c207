//! ユーザー管理ユースケース

use std::sync::Arc;

use usermgmt_domain::{
    DomainError,
    user::{Email, NewUser, User, UserId},
    value_objects::Pagination,
};
use usermgmt_infra::{db::TransactionManager, repository::UserRepository};

use crate::error::CoreError;

/// ユーザー管理ユースケース
pub struct UserUseCaseImpl {
    user_repository: Arc<dyn UserRepository>,
    tx_manager:      Arc<dyn TransactionManager>,
}

impl UserUseCaseImpl {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        tx_manager: Arc<dyn TransactionManager>,
    ) -> Self {
        Self {
            user_repository,
            tx_manager,
        }
    }

    /// ユーザー一覧を ID 昇順で取得する
    pub async fn list_users(&self, pagination: Pagination) -> Result<Vec<User>, CoreError> {
        self.user_repository
            .find_all(pagination)
            .await
            .map_err(CoreError::database("Error fetching users"))
    }

    /// ID でユーザーを取得する
    ///
    /// `users.id` は `INTEGER` のため、範囲外の ID は存在しないユーザーとして扱う。
    pub async fn get_user(&self, id: i64) -> Result<User, CoreError> {
        let not_found = || {
            CoreError::from(DomainError::NotFound {
                entity_type: "User",
                id:          id.to_string(),
            })
        };

        let Ok(user_id) = i32::try_from(id).map(UserId::from_i32) else {
            return Err(not_found());
        };

        self.user_repository
            .find_by_id(user_id)
            .await
            .map_err(CoreError::database("Error fetching user"))?
            .ok_or_else(not_found)
    }

    /// ユーザーを作成する
    ///
    /// 1. メールアドレスの重複チェック
    /// 2. トランザクション内で INSERT
    /// 3. コミット
    ///
    /// 1 と 2 の間に同じメールアドレスが挿入された場合も、一意制約違反を
    /// 重複エラーとして返す。失敗時は `TxContext` のドロップでロールバックされる。
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, CoreError> {
        const CONTEXT: &str = "Error creating user";

        if self
            .user_repository
            .find_by_email(new_user.email())
            .await
            .map_err(CoreError::database(CONTEXT))?
            .is_some()
        {
            return Err(duplicate_email(new_user.email()));
        }

        let mut tx = self
            .tx_manager
            .begin()
            .await
            .map_err(CoreError::database(CONTEXT))?;

        let user = match self.user_repository.insert(&mut tx, &new_user).await {
            Ok(user) => user,
            Err(e) if e.as_conflict().is_some() => {
                tracing::info!(email = %new_user.email(), "同時登録によりメールアドレスが重複しました");
                return Err(duplicate_email(new_user.email()));
            }
            Err(e) => return Err(CoreError::database(CONTEXT)(e)),
        };

        tx.commit().await.map_err(CoreError::database(CONTEXT))?;

        tracing::info!(user_id = %user.id(), "ユーザーを作成しました");
        Ok(user)
    }
}

fn duplicate_email(email: &Email) -> CoreError {
    DomainError::Conflict(format!("User with email {email} already exists")).into()
}
