pub mod ports;
pub mod primary_table;
pub mod record_cache;
pub mod services;
