//! Utility functions and helpers.

pub mod http;

#[cfg(test)]
pub(crate) mod test_server;
