//! # OpenAPI 仕様定義
//!
//! utoipa で User Service の OpenAPI 仕様を Rust の型から生成する。
//! `GET /openapi.json` で配信する。

use axum::Json;
use utoipa::OpenApi;

use crate::handler::{health, user};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Management API",
        version = "1.0.0",
        description = "API for managing users with fetch and insert operations"
    ),
    paths(
        // health
        health::root,
        health::health_check,
        health::readiness_check,
        // users
        user::list_users,
        user::get_user,
        user::create_user,
    ),
    components(schemas(usermgmt_shared::ErrorResponse)),
    tags(
        (name = "health", description = "ヘルスチェック"),
        (name = "users", description = "ユーザー管理"),
    )
)]
pub struct ApiDoc;

/// GET /openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_全エンドポイントが仕様に含まれる() {
        let doc = ApiDoc::openapi();
        let mut paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        paths.sort_unstable();

        assert_eq!(
            paths,
            vec!["/", "/health", "/health/ready", "/users", "/users/{user_id}"]
        );
        assert_eq!(doc.info.title, "User Management API");
        assert_eq!(doc.info.version, "1.0.0");
    }
}
