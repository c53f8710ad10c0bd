//! The complaint resolution workflow: category policy, form state, the
//! role-dispatched planning engine, and best-effort effect execution.

pub mod dtos;
pub mod effects;
pub mod engine;
pub mod executor;
pub mod form;
pub mod handlers;
pub mod messages;
pub mod policy;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

pub use services::WorkflowService;
pub use store::{PgWorkflowStore, WorkflowStore};
