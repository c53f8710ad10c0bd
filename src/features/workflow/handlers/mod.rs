pub mod workflow_handler;
