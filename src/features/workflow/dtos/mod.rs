mod workflow_dto;

pub use workflow_dto::{SubmitResolutionDto, WorkflowReportDto};
