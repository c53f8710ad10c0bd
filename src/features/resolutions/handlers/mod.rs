pub mod resolution_handler;
