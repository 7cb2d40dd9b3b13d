pub mod assets;
pub mod config;
pub mod content;
pub mod middleware;
pub mod observability;
pub mod page;
pub mod routes;
pub mod template;

pub use config::Config;
pub use routes::{AppState, router};
