// Start of file: /src/utils/mod.rs

/*
    * Cross-cutting helpers: middleware error mapping and the error
    * response envelope.
*/

pub mod error_handler;
pub mod response_handler;

// End of file: /src/utils/mod.rs
