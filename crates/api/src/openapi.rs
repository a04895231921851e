//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::health_handler::HealthResponse;
use domain::{NewUser, User, UserPatch};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User API",
        description = "In-memory user CRUD service",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::update_user,
        crate::handlers::user_handler::delete_user,
    ),
    components(
        schemas(
            User,
            NewUser,
            UserPatch,
            HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "User management endpoints"),
        (name = "Health", description = "Liveness endpoint"),
    )
)]
pub struct ApiDoc;
