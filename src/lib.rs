pub mod cli;
pub mod config;
mod middleware;
pub mod observability;
pub mod routes;
pub mod template;

pub use config::Config;
pub use routes::{AppState, router};
