pub mod config;
pub mod dispatch;
pub mod error;
pub mod features;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use state::AppState;
