// Greeting generation

use tracing::instrument;

use crate::models::greeting::Greeting;

/// Builds greetings from names. Stateless; cloned into every request via `AppState`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreetingService;

impl GreetingService {
    pub fn new() -> Self {
        Self
    }

    /// Returns `"Hello, <name>!"`. Accepts any input, including the empty string.
    #[instrument(level = "debug", skip(self), ret)]
    pub fn greet(&self, name: &str) -> Greeting {
        Greeting::new(format!("Hello, {name}!"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_by_name() {
        let service: GreetingService = GreetingService::new();

        assert_eq!(service.greet("World").message, "Hello, World!");
        assert_eq!(service.greet("Alice").message, "Hello, Alice!");
    }

    #[test]
    fn empty_name_is_not_replaced() {
        assert_eq!(GreetingService::new().greet("").message, "Hello, !");
    }

    #[test]
    fn input_is_concatenated_verbatim() {
        let service: GreetingService = GreetingService::new();

        for name in ["José", "  padded  ", "a, b!", "<script>", "名前", "\"quoted\""] {
            assert_eq!(service.greet(name).message, format!("Hello, {}!", name));
        }
    }
}
