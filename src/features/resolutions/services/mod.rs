mod resolution_service;

pub use resolution_service::ResolutionService;
