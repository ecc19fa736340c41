pub mod api;
pub mod cache;
pub mod common;
pub mod configs;
pub mod extract;
pub mod fetch;
pub mod merge;
pub mod server;
pub mod sources;
pub mod transport;

#[cfg(test)]
mod test_support;
