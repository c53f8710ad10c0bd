pub mod complaint_handler;
