// API features exposed by the service.

pub mod greeting;
