pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;
