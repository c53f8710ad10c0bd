mod workflow_service;

pub use workflow_service::WorkflowService;
