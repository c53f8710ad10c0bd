pub mod assignment_handler;
