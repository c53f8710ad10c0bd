mod assignment;

pub use assignment::{Assignment, NewAssignment};
