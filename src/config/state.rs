// Application state shared with every handler

use std::sync::Arc;
use crate::config::environment::EnvironmentVariables;
use crate::services::GreetingService;

#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub greeting_service: GreetingService,
}

impl AppState {
    /// Creates a new AppState around the given configuration
    pub fn new(environment: EnvironmentVariables) -> Self {
        Self {
            environment: Arc::new(environment),
            greeting_service: GreetingService::new(),
        }
    }

    /// Builds the state from the process-wide environment configuration
    pub fn from_env() -> anyhow::Result<Self> {
        let environment: &'static EnvironmentVariables = EnvironmentVariables::instance()?;
        Ok(Self::new(environment.clone()))
    }
}
