// Library root for the greeting service

pub mod api;
pub mod config;
pub mod core;
pub mod models;
pub mod services;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::core::server::create_app;
pub use crate::models::greeting::Greeting;
pub use crate::services::GreetingService;
