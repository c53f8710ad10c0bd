pub mod assignments;
pub mod auth;
pub mod categories;
pub mod complaints;
pub mod notifications;
pub mod resolutions;
pub mod users;
pub mod workflow;
