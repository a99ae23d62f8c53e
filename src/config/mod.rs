// Start of file: /src/config/mod.rs

/*
* Configuration: environment variables and the state handed to handlers.
*/

pub mod environment;
pub mod state;

// End of file: /src/config/mod.rs
