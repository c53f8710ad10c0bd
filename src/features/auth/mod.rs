//! Bearer-token authentication.
//!
//! Token issuance lives in the identity provider; this feature only
//! validates the HS256 access tokens it mints and exposes the
//! [`AuthenticatedUser`] extracted from them.

mod validator;

pub mod model;

pub use model::AuthenticatedUser;
pub use validator::JwtValidator;
