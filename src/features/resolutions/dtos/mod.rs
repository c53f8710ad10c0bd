mod resolution_dto;

pub use resolution_dto::{CreateResolutionDto, ResolutionResponseDto, UpdateResolutionDto};
