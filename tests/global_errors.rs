//! tests/global_errors.rs
//! Integration test crate aggregating the tests in the global_errors folder.

mod common;

#[cfg(test)]
mod global_errors {
    #[path = "../global_errors/404.rs"]
    mod e404;

    #[path = "../global_errors/405.rs"]
    mod e405;
}
