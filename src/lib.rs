pub mod cli;
pub mod error;
pub mod extract;
pub mod filter;
pub mod query;
pub mod server;
pub mod store;
pub mod types;
pub mod utils;
