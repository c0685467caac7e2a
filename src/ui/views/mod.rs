pub mod endpoint;
pub mod not_found;
pub mod setup;
pub mod threats;
pub mod vulnerabilities;
