// Start of file: /src/models/mod.rs

/*
    * Data models serialized in API responses.
*/

pub mod greeting;

pub use greeting::Greeting;

// End of file: /src/models/mod.rs
