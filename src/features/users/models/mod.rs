mod user;

pub use user::{User, UserProfile, UserRole, UserView};
