pub mod components;
pub mod routes;
pub mod services;
pub mod shell;
pub mod state;
pub mod views;
