//! Generated OpenAPI documentation
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the API. The specification is served by Swagger UI at
//! `/docs` and by Redoc at `/redoc`, with the raw document available at
//! `/api-docs/openapi.json`.

use crate::error::{ErrorResponse, ValidationErrorDetail};
use crate::models::user::User;
use crate::routes::health::HealthResponse;
use crate::routes::users::{DeleteUserResponse, UserListResponse, UserPayload};
use utoipa::OpenApi;

/// OpenAPI document for the scaffold API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Axum Scaffold",
        description = "Starter scaffold for a CRUD web API backed by PostgreSQL."
    ),
    paths(
        crate::routes::health::health_check,
        crate::routes::users::create_user,
        crate::routes::users::get_user,
        crate::routes::users::update_user,
        crate::routes::users::delete_user,
        crate::routes::users::list_users,
    ),
    components(schemas(
        User,
        UserPayload,
        UserListResponse,
        DeleteUserResponse,
        HealthResponse,
        ErrorResponse,
        ValidationErrorDetail,
    )),
    tags(
        (name = "users", description = "User CRUD operations"),
        (name = "health", description = "Readiness probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_contains_user_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/users"));
        assert!(paths.iter().any(|p| p.as_str() == "/users/{id}"));
        assert!(paths.iter().any(|p| p.as_str() == "/health"));
    }

    #[test]
    fn test_openapi_document_registers_schemas() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components should be present");

        assert!(components.schemas.contains_key("User"));
        assert!(components.schemas.contains_key("UserPayload"));
        assert!(components.schemas.contains_key("ErrorResponse"));
    }
}
