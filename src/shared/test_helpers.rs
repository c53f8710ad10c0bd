#[cfg(test)]
use crate::features::auth::model::AuthenticatedUser;
#[cfg(test)]
use crate::features::users::models::UserRole;

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};

#[cfg(test)]
#[allow(dead_code)]
pub fn create_lecturer_user() -> AuthenticatedUser {
    AuthenticatedUser {
        id: 1,
        username: "test-lecturer".to_string(),
        role: UserRole::Lecturer,
        secondary_role: None,
    }
}

#[cfg(test)]
#[allow(dead_code)]
pub fn create_admin_user() -> AuthenticatedUser {
    AuthenticatedUser {
        id: 2,
        username: "test-admin".to_string(),
        role: UserRole::Admin,
        secondary_role: None,
    }
}

#[cfg(test)]
#[allow(dead_code)]
async fn inject_lecturer_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_lecturer_user());
    next.run(request).await
}

#[cfg(test)]
#[allow(dead_code)]
pub fn with_lecturer_auth(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_lecturer_middleware))
}
