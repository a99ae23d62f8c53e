// Start of file: /src/models/greeting.rs

/*
    * The data holder returned by GET /api/hello.
    * Serializes as `{"message": "..."}`.
*/

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

impl Greeting {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }
}


// End of file: /src/models/greeting.rs
