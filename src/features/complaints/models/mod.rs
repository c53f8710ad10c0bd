mod complaint;

pub use complaint::{Complaint, ComplaintAttachment, ComplaintStatus};
