// Domain services used by the HTTP handlers

pub mod greeting_service;

pub use greeting_service::GreetingService;
