//! # テスト用モックリポジトリ
//!
//! ハンドラ・ユースケーステストで使用するインメモリ実装。
//! `test-utils` feature を有効にすると他クレートからも利用できる。
//!
//! ```toml
//! [dev-dependencies]
//! usermgmt-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{
    Arc,
    Mutex,
    MutexGuard,
    PoisonError,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use usermgmt_domain::{
    user::{Email, NewUser, User, UserId},
    value_objects::Pagination,
};

use crate::{
    db::{TransactionManager, TxContext},
    error::InfraError,
    repository::UserRepository,
};

// ===== MockUserRepository =====

/// インメモリの UserRepository
///
/// ID は 1 から順に採番し、メールアドレスの一意性を検査する。
/// `insert` 後にトランザクションがコミットされなくても結果は残る点は
/// PostgreSQL 実装と異なる。
#[derive(Clone, Default)]
pub struct MockUserRepository {
    state:              Arc<Mutex<MockUsers>>,
    unavailable:        Arc<AtomicBool>,
    insert_failure:     Arc<AtomicBool>,
    stale_email_lookup: Arc<AtomicBool>,
}

#[derive(Default)]
struct MockUsers {
    users:   Vec<User>,
    last_id: i32,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以降の全操作をデータベースエラーにする
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// `insert` だけをデータベースエラーにする
    pub fn set_insert_failure(&self, failure: bool) {
        self.insert_failure.store(failure, Ordering::SeqCst);
    }

    /// `find_by_email` が常に `None` を返すようにする
    ///
    /// 事前チェックの直後に別リクエストが同じメールアドレスで挿入した状況を再現する。
    pub fn set_stale_email_lookup(&self, stale: bool) {
        self.stale_email_lookup.store(stale, Ordering::SeqCst);
    }

    /// 保存されているユーザーの件数
    pub fn len(&self) -> usize {
        self.lock().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, MockUsers> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_available(&self) -> Result<(), InfraError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(InfraError::unexpected("database unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_all(&self, pagination: Pagination) -> Result<Vec<User>, InfraError> {
        self.check_available()?;
        let skip = usize::try_from(pagination.skip()).unwrap_or(usize::MAX);
        let limit = usize::try_from(pagination.limit()).unwrap_or(usize::MAX);
        Ok(self
            .lock()
            .users
            .iter()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, InfraError> {
        self.check_available()?;
        Ok(self.lock().users.iter().find(|u| u.id() == id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, InfraError> {
        self.check_available()?;
        if self.stale_email_lookup.load(Ordering::SeqCst) {
            return Ok(None);
        }
        Ok(self.lock().users.iter().find(|u| u.email() == email).cloned())
    }

    async fn insert(&self, _tx: &mut TxContext, user: &NewUser) -> Result<User, InfraError> {
        self.check_available()?;
        if self.insert_failure.load(Ordering::SeqCst) {
            return Err(InfraError::unexpected("insert failed"));
        }
        let mut state = self.lock();
        if state.users.iter().any(|u| u.email() == user.email()) {
            return Err(InfraError::conflict("User", user.email().as_str()));
        }
        state.last_id += 1;
        let created = User::from_db(
            UserId::from_i32(state.last_id),
            user.name().clone(),
            user.email().clone(),
        );
        state.users.push(created.clone());
        Ok(created)
    }

    async fn ping(&self) -> Result<(), InfraError> {
        self.check_available()
    }
}

// ===== MockTransactionManager =====

/// モック TxContext を返す TransactionManager
pub struct MockTransactionManager;

#[async_trait]
impl TransactionManager for MockTransactionManager {
    async fn begin(&self) -> Result<TxContext, InfraError> {
        Ok(TxContext::mock())
    }
}
