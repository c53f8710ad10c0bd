mod resolution;

pub use resolution::{NewResolution, Resolution, ResolutionPatch};
