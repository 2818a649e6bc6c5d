// Utility modules: global error mapping and request logging middleware.

pub mod error_handler;
pub mod request_logger;
