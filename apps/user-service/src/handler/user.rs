//! # ユーザー API ハンドラ
//!
//! - `GET /users`: 一覧（`skip` / `limit`）
//! - `GET /users/{user_id}`: 単一取得
//! - `POST /users`: 作成
//!
//! ## レスポンス
//!
//! ユーザーは [`UserResponse`] として `{"id", "name", "email"}` の形でシリアライズする。

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path,
        Query,
        State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use usermgmt_domain::{
    user::{Email, NewUser, User},
    value_objects::{Pagination, UserName},
};
use usermgmt_shared::ErrorResponse;
use utoipa::{IntoParams, ToSchema};

use crate::{error::CoreError, usecase::UserUseCaseImpl};

/// ユーザー API の State
pub struct UserState {
    pub usecase: UserUseCaseImpl,
}

/// 一覧取得のクエリパラメータ
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// 読み飛ばす件数（既定 0）
    pub skip:  Option<i64>,
    /// 最大取得件数（既定 100）
    pub limit: Option<i64>,
}

/// ユーザー作成リクエスト
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// 表示名（1〜50 文字）
    pub name:  String,
    /// メールアドレス（100 文字以内、一意）
    pub email: String,
}

impl CreateUserRequest {
    fn into_new_user(self) -> Result<NewUser, CoreError> {
        let name = UserName::new(self.name)?;
        let email = Email::new(self.email)?;
        Ok(NewUser::new(name, email))
    }
}

/// ユーザーのレスポンス表現
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id:    i32,
    pub name:  String,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id:    user.id().as_i32(),
            name:  user.name().to_string(),
            email: user.email().to_string(),
        }
    }
}

/// GET /users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "ユーザー一覧", body = Vec<UserResponse>),
        (status = 400, description = "クエリパラメータ不正", body = ErrorResponse),
        (status = 500, description = "データベースエラー", body = ErrorResponse)
    )
)]
pub async fn list_users(
    State(state): State<Arc<UserState>>,
    query: Result<Query<ListUsersQuery>, QueryRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let Query(query) = query.map_err(|e| CoreError::BadRequest(e.body_text()))?;
    let pagination = Pagination::new(query.skip, query.limit)?;

    let users = state.usecase.list_users(pagination).await?;

    let response: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();
    Ok(Json(response))
}

/// GET /users/{user_id}
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = i64, Path, description = "ユーザー ID")),
    responses(
        (status = 200, description = "ユーザー", body = UserResponse),
        (status = 400, description = "ID が整数でない", body = ErrorResponse),
        (status = 404, description = "ユーザーが存在しない", body = ErrorResponse),
        (status = 500, description = "データベースエラー", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<Arc<UserState>>,
    user_id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let Path(user_id) = user_id.map_err(|e| CoreError::BadRequest(e.body_text()))?;

    let user = state.usecase.get_user(user_id).await?;

    Ok(Json(UserResponse::from(&user)))
}

/// POST /users
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "作成されたユーザー", body = UserResponse),
        (status = 400, description = "入力不正またはメールアドレス重複", body = ErrorResponse),
        (status = 500, description = "データベースエラー", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<Arc<UserState>>,
    req: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let Json(req) = req.map_err(|e| CoreError::BadRequest(e.body_text()))?;
    let new_user = req.into_new_user()?;

    let user = state.usecase.create_user(new_user).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}
