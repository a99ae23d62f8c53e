// Server assembly and process-level concerns

pub mod logging;
pub mod server;
